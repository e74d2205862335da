pub mod dashboard_api;

pub use dashboard_api::{
    CountEntry, FilterConfig, FilteredTable, PredictionOutcome, PredictionRequest, WasmDashboard,
};
