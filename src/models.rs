use serde::{Deserialize, Serialize};

/// One record as the SODA endpoint returns it. Every column arrives as an
/// optional string; typing happens in `aggregate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTollRecord {
    #[serde(rename = "idpeaje")]
    pub toll_station_id: Option<String>,
    #[serde(rename = "peaje")]
    pub toll_station_name: Option<String>,
    #[serde(rename = "categoriatarifa")]
    pub rate_category: Option<String>,
    #[serde(rename = "desde")]
    pub period_start: Option<String>,
    #[serde(rename = "hasta")]
    pub period_end: Option<String>,
    #[serde(rename = "valortarifa")]
    pub tariff_amount: Option<String>,
    #[serde(rename = "cantidadtrafico")]
    pub traffic_count: Option<String>,
    #[serde(rename = "cantidadevasores")]
    pub evader_count: Option<String>,
    #[serde(rename = "cantidadexentos787")]
    pub exempt_count: Option<String>,
}

/// One row of the aggregated table: `(toll_station_name, rate_category,
/// month)` is unique across rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueRow {
    pub toll_station_name: String,
    pub rate_category: String,
    pub month: String,
    pub revenue: i64,
}

/// The immutable table the dashboard serves from, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct RevenueTable {
    pub rows: Vec<RevenueRow>,
    /// Distinct station names, sorted.
    pub stations: Vec<String>,
    /// Distinct `YYYY-MM` months, sorted.
    pub months: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LineChartRequest {
    pub stations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BarChartRequest {
    pub months: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub stations: Vec<String>,
    pub months: Vec<String>,
    pub default_station: Option<String>,
    pub default_month: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}
