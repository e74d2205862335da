pub mod cache; // Memoizácia načítaní podľa cesty k súboru
pub mod csv_data_loader; // CSV implementation of strategy
pub mod data_loader; // Strategy trait

pub use cache::DatasetCache;
pub use csv_data_loader::CsvDataLoader;
pub use data_loader::{DataLoader, LoadError, SurveyData};
