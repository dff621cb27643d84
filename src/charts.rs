use crate::models::{ChartFigure, ChartPoint, RevenueTable};
use std::collections::BTreeMap;

pub const LINE_CHART_PROMPT: &str = "Select at least one toll station";
pub const BAR_CHART_PROMPT: &str = "Select at least one month";

const LINE_CHART_TITLE: &str = "Total Revenue by Month";
const BAR_CHART_TITLE: &str = "Total Revenue by Rate Category";

/// One color per rate category, assigned in category order.
const CATEGORY_COLORS: &[&str] = &[
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
];

/// Revenue by month across the selected stations. Empty selection yields an
/// empty figure whose title asks the user to pick a station.
pub fn line_chart(table: &RevenueTable, stations: &[String]) -> ChartFigure {
    if stations.is_empty() {
        return ChartFigure {
            title: LINE_CHART_PROMPT.to_string(),
            x_label: "Month".to_string(),
            y_label: "Total Revenue".to_string(),
            points: Vec::new(),
        };
    }

    let mut by_month: BTreeMap<&str, i64> = BTreeMap::new();
    for row in &table.rows {
        if stations.contains(&row.toll_station_name) {
            *by_month.entry(row.month.as_str()).or_default() += row.revenue;
        }
    }

    ChartFigure {
        title: LINE_CHART_TITLE.to_string(),
        x_label: "Month".to_string(),
        y_label: "Total Revenue".to_string(),
        points: by_month
            .into_iter()
            .map(|(month, revenue)| ChartPoint {
                label: month.to_string(),
                value: revenue,
                color: None,
            })
            .collect(),
    }
}

/// Revenue by rate category across the selected months, one color per
/// category. Empty selection yields an empty figure whose title asks the
/// user to pick a month.
pub fn bar_chart(table: &RevenueTable, months: &[String]) -> ChartFigure {
    if months.is_empty() {
        return ChartFigure {
            title: BAR_CHART_PROMPT.to_string(),
            x_label: "Rate Category".to_string(),
            y_label: "Total Revenue".to_string(),
            points: Vec::new(),
        };
    }

    let mut by_category: BTreeMap<&str, i64> = BTreeMap::new();
    for row in &table.rows {
        if months.contains(&row.month) {
            *by_category.entry(row.rate_category.as_str()).or_default() += row.revenue;
        }
    }

    ChartFigure {
        title: BAR_CHART_TITLE.to_string(),
        x_label: "Rate Category".to_string(),
        y_label: "Total Revenue".to_string(),
        points: by_category
            .into_iter()
            .enumerate()
            .map(|(index, (category, revenue))| ChartPoint {
                label: category.to_string(),
                value: revenue,
                color: Some(CATEGORY_COLORS[index % CATEGORY_COLORS.len()].to_string()),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RevenueRow;

    fn row(station: &str, category: &str, month: &str, revenue: i64) -> RevenueRow {
        RevenueRow {
            toll_station_name: station.to_string(),
            rate_category: category.to_string(),
            month: month.to_string(),
            revenue,
        }
    }

    fn table() -> RevenueTable {
        RevenueTable {
            rows: vec![
                row("NORTE", "I", "2023-01", 100),
                row("NORTE", "II", "2023-01", 40),
                row("NORTE", "I", "2023-02", 70),
                row("SUR", "I", "2023-01", 25),
                row("SUR", "II", "2023-02", 55),
            ],
            stations: vec!["NORTE".to_string(), "SUR".to_string()],
            months: vec!["2023-01".to_string(), "2023-02".to_string()],
        }
    }

    fn selection(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn empty_station_selection_prompts() {
        let figure = line_chart(&table(), &[]);
        assert_eq!(figure.title, LINE_CHART_PROMPT);
        assert!(figure.points.is_empty());
    }

    #[test]
    fn empty_month_selection_prompts() {
        let figure = bar_chart(&table(), &[]);
        assert_eq!(figure.title, BAR_CHART_PROMPT);
        assert!(figure.points.is_empty());
    }

    #[test]
    fn line_chart_sums_selected_stations_per_month() {
        let figure = line_chart(&table(), &selection(&["NORTE", "SUR"]));
        assert_eq!(figure.title, LINE_CHART_TITLE);

        let labels: Vec<_> = figure.points.iter().map(|point| point.label.as_str()).collect();
        assert_eq!(labels, vec!["2023-01", "2023-02"]);

        let values: Vec<_> = figure.points.iter().map(|point| point.value).collect();
        assert_eq!(values, vec![100 + 40 + 25, 70 + 55]);
    }

    #[test]
    fn line_chart_ignores_unselected_stations() {
        let figure = line_chart(&table(), &selection(&["SUR"]));
        let values: Vec<_> = figure.points.iter().map(|point| point.value).collect();
        assert_eq!(values, vec![25, 55]);
    }

    #[test]
    fn bar_chart_groups_selected_month_by_category() {
        let figure = bar_chart(&table(), &selection(&["2023-01"]));
        assert_eq!(figure.title, BAR_CHART_TITLE);
        assert_eq!(figure.points.len(), 2);

        assert_eq!(figure.points[0].label, "I");
        assert_eq!(figure.points[0].value, 100 + 25);
        assert_eq!(figure.points[1].label, "II");
        assert_eq!(figure.points[1].value, 40);

        let colors: Vec<_> = figure.points.iter().map(|point| point.color.as_deref()).collect();
        assert!(colors.iter().all(|color| color.is_some()));
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn unknown_selection_yields_empty_data_with_regular_title() {
        let figure = bar_chart(&table(), &selection(&["1999-12"]));
        assert_eq!(figure.title, BAR_CHART_TITLE);
        assert!(figure.points.is_empty());
    }

    #[test]
    fn handlers_are_idempotent_for_a_fixed_selection() {
        let table = table();
        let stations = selection(&["NORTE"]);
        assert_eq!(line_chart(&table, &stations), line_chart(&table, &stations));

        let months = selection(&["2023-02"]);
        assert_eq!(bar_chart(&table, &months), bar_chart(&table, &months));
    }
}
