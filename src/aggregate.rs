use crate::models::{RawTollRecord, RevenueRow, RevenueTable};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// A fully-summed group before projection down to the display columns.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedRow {
    pub toll_station_id: String,
    pub toll_station_name: String,
    pub rate_category: String,
    pub month: String,
    pub revenue: i64,
    pub traffic_count: i64,
    pub evader_count: f64,
    pub exempt_count: f64,
}

/// Builds the dashboard table: group, sum, then project to
/// `{toll_station_name, rate_category, month, revenue}`. Rows come out
/// ordered by the grouping key, so the result is deterministic for a given
/// input.
pub fn build_revenue_table(records: &[RawTollRecord]) -> RevenueTable {
    let grouped = group_records(records);

    let mut stations = BTreeSet::new();
    let mut months = BTreeSet::new();
    for group in &grouped {
        stations.insert(group.toll_station_name.clone());
        months.insert(group.month.clone());
    }

    let rows = grouped
        .into_iter()
        .map(|group| RevenueRow {
            toll_station_name: group.toll_station_name,
            rate_category: group.rate_category,
            month: group.month,
            revenue: group.revenue,
        })
        .collect();

    RevenueTable {
        rows,
        stations: stations.into_iter().collect(),
        months: months.into_iter().collect(),
    }
}

/// Groups raw records by `(toll_station_id, toll_station_name,
/// rate_category, month)` and sums every numeric column. Records with a
/// missing grouping key, an unparseable period, or a non-numeric tariff or
/// traffic count are dropped.
pub fn group_records(records: &[RawTollRecord]) -> Vec<GroupedRow> {
    let mut groups: BTreeMap<(String, String, String, String), GroupedRow> = BTreeMap::new();
    let mut dropped = 0usize;

    for record in records {
        let Some(typed) = typed_record(record) else {
            dropped += 1;
            continue;
        };

        let key = (
            typed.toll_station_id.clone(),
            typed.toll_station_name.clone(),
            typed.rate_category.clone(),
            typed.month.clone(),
        );
        match groups.entry(key) {
            Entry::Occupied(mut entry) => {
                let group = entry.get_mut();
                group.revenue += typed.revenue;
                group.traffic_count += typed.traffic_count;
                group.evader_count += typed.evader_count;
                group.exempt_count += typed.exempt_count;
            }
            Entry::Vacant(entry) => {
                entry.insert(typed);
            }
        }
    }

    if dropped > 0 {
        warn!("dropped {dropped} of {} records with missing or unparseable fields", records.len());
    }

    groups.into_values().collect()
}

fn typed_record(record: &RawTollRecord) -> Option<GroupedRow> {
    let toll_station_id = non_empty(record.toll_station_id.as_deref())?;
    let toll_station_name = non_empty(record.toll_station_name.as_deref())?;
    let rate_category = non_empty(record.rate_category.as_deref())?;

    parse_timestamp(record.period_start.as_deref()?)?;
    let period_end = parse_timestamp(record.period_end.as_deref()?)?;

    let tariff_amount = parse_int(record.tariff_amount.as_deref()?)?;
    let traffic_count = parse_int(record.traffic_count.as_deref()?)?;

    Some(GroupedRow {
        toll_station_id: toll_station_id.to_string(),
        toll_station_name: toll_station_name.to_string(),
        rate_category: rate_category.to_string(),
        month: period_end.format("%Y-%m").to_string(),
        revenue: tariff_amount * traffic_count,
        traffic_count,
        evader_count: parse_float(record.evader_count.as_deref()).unwrap_or(0.0),
        exempt_count: parse_float(record.exempt_count.as_deref()).unwrap_or(0.0),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Socrata floating timestamps look like `2023-01-31T00:00:00.000`; some
/// exports carry a bare date.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Unparseable counts are treated as missing, not as an error.
fn parse_float(value: Option<&str>) -> Option<f64> {
    value.and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        id: &str,
        name: &str,
        category: &str,
        period_end: &str,
        tariff: &str,
        traffic: &str,
    ) -> RawTollRecord {
        RawTollRecord {
            toll_station_id: Some(id.to_string()),
            toll_station_name: Some(name.to_string()),
            rate_category: Some(category.to_string()),
            period_start: Some("2023-01-01T00:00:00.000".to_string()),
            period_end: Some(period_end.to_string()),
            tariff_amount: Some(tariff.to_string()),
            traffic_count: Some(traffic.to_string()),
            evader_count: Some("4".to_string()),
            exempt_count: None,
        }
    }

    #[test]
    fn revenue_is_tariff_times_traffic() {
        let records = [record("1", "NORTE", "I", "2023-01-31T00:00:00.000", "9100", "1200")];
        let grouped = group_records(&records);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].revenue, 9100 * 1200);
        assert_eq!(grouped[0].month, "2023-01");
    }

    #[test]
    fn grouping_sums_all_numeric_columns_per_key() {
        let mut a = record("1", "NORTE", "I", "2023-01-15T00:00:00.000", "9100", "100");
        a.evader_count = Some("2".to_string());
        a.exempt_count = Some("1.5".to_string());
        let mut b = record("1", "NORTE", "I", "2023-01-31T00:00:00.000", "9100", "50");
        b.evader_count = Some("3".to_string());
        b.exempt_count = Some("no dato".to_string());

        let grouped = group_records(&[a, b]);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].revenue, 9100 * 150);
        assert_eq!(grouped[0].traffic_count, 150);
        assert_eq!(grouped[0].evader_count, 5.0);
        assert_eq!(grouped[0].exempt_count, 1.5);
    }

    #[test]
    fn distinct_keys_stay_distinct() {
        let records = [
            record("1", "NORTE", "I", "2023-01-31T00:00:00.000", "9100", "100"),
            record("1", "NORTE", "II", "2023-01-31T00:00:00.000", "10500", "40"),
            record("1", "NORTE", "I", "2023-02-28T00:00:00.000", "9100", "80"),
            record("2", "SUR", "I", "2023-01-31T00:00:00.000", "8700", "60"),
        ];

        let table = build_revenue_table(&records);
        assert_eq!(table.rows.len(), 4);

        let mut keys: Vec<_> = table
            .rows
            .iter()
            .map(|row| (&row.toll_station_name, &row.rate_category, &row.month))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn unparseable_records_are_dropped_without_affecting_others() {
        let good = record("1", "NORTE", "I", "2023-01-31T00:00:00.000", "9100", "100");
        let bad_traffic = record("1", "NORTE", "I", "2023-01-31T00:00:00.000", "9100", "n/a");
        let bad_date = record("1", "NORTE", "I", "sin fecha", "9100", "100");
        let mut missing_name = record("9", "", "I", "2023-01-31T00:00:00.000", "9100", "100");
        missing_name.toll_station_name = None;

        let grouped = group_records(&[good, bad_traffic, bad_date, missing_name]);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].revenue, 9100 * 100);
    }

    #[test]
    fn date_only_periods_parse() {
        let records = [record("1", "NORTE", "I", "2023-03-31", "9100", "10")];
        let grouped = group_records(&records);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].month, "2023-03");
    }

    #[test]
    fn table_lists_sorted_distinct_stations_and_months() {
        let records = [
            record("2", "SUR", "I", "2023-02-28T00:00:00.000", "8700", "60"),
            record("1", "NORTE", "I", "2023-01-31T00:00:00.000", "9100", "100"),
            record("2", "SUR", "II", "2023-01-31T00:00:00.000", "12000", "20"),
        ];

        let table = build_revenue_table(&records);
        assert_eq!(table.stations, vec!["NORTE".to_string(), "SUR".to_string()]);
        assert_eq!(table.months, vec!["2023-01".to_string(), "2023-02".to_string()]);
    }
}
