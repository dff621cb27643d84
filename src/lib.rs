pub mod aggregate;
pub mod app;
pub mod charts;
pub mod errors;
pub mod fetch;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;

pub use app::router;
pub use fetch::{fetch_records, resolve_data_url};
pub use state::AppState;
