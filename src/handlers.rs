use crate::charts;
use crate::errors::AppError;
use crate::models::{BarChartRequest, ChartFigure, FiltersResponse, LineChartRequest};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.table))
}

pub async fn get_filters(State(state): State<AppState>) -> Json<FiltersResponse> {
    let table = &state.table;
    Json(FiltersResponse {
        stations: table.stations.clone(),
        months: table.months.clone(),
        default_station: table.stations.first().cloned(),
        default_month: table.months.first().cloned(),
    })
}

pub async fn line_chart(
    State(state): State<AppState>,
    Json(payload): Json<LineChartRequest>,
) -> Result<Json<ChartFigure>, AppError> {
    validate_selection(&payload.stations, "station")?;
    Ok(Json(charts::line_chart(&state.table, &payload.stations)))
}

pub async fn bar_chart(
    State(state): State<AppState>,
    Json(payload): Json<BarChartRequest>,
) -> Result<Json<ChartFigure>, AppError> {
    validate_selection(&payload.months, "month")?;
    Ok(Json(charts::bar_chart(&state.table, &payload.months)))
}

fn validate_selection(values: &[String], what: &str) -> Result<(), AppError> {
    if values.iter().any(|value| value.trim().is_empty()) {
        return Err(AppError::bad_request(format!(
            "{what} selections must not be blank"
        )));
    }
    Ok(())
}
