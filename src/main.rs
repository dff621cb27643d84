use reqwest::Client;
use std::{env, net::SocketAddr};
use toll_dashboard::aggregate::build_revenue_table;
use toll_dashboard::{fetch_records, resolve_data_url, router, AppState};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let url = resolve_data_url();
    let client = Client::new();
    let records = fetch_records(&client, &url).await?;

    let table = build_revenue_table(&records);
    info!(
        "aggregated {} revenue rows across {} stations and {} months",
        table.rows.len(),
        table.stations.len(),
        table.months.len()
    );

    let app = router(AppState::new(table));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
