//! Jadro dashboardu pre prieskum a predikciu rakoviny pľúc zo survey datasetu.
//! Renderovanie grafov a widgety rieši hosťujúca aplikácia, táto knižnica
//! vlastní iba filter-and-encode pipeline a predikčný adaptér.

use thiserror::Error;

pub mod data_loading;
pub mod explore;
pub mod models;
pub mod prediction;
pub mod processing;
pub mod schema;
pub mod wasm_api;

pub use data_loading::{CsvDataLoader, DataLoader, DatasetCache, LoadError, SurveyData};
pub use explore::{count_by, filter, FilterSelection, FilteredView};
pub use models::{Classifier, ModelChoice, ModelFactory};
pub use prediction::{
    predict, BundleCache, BundleLoadError, ModelBundle, PatientProfile, PredictionError,
};
pub use processing::{CategoricalNormalizer, CategoryEncoder, MappingError, MinMaxScaler};

/// Chyby celého dashboardového jadra.
///
/// Chyby načítania (dáta aj bundle) sú fatálne a majú zastaviť štart hosťa,
/// validačné a predikčné chyby sa vracajú používateľovi per-request.
#[derive(Debug, Error)]
pub enum LungscopeError {
    #[error("nepodarilo sa načítať survey dáta: {0}")]
    Load(#[from] LoadError),

    #[error("nepodarilo sa znormalizovať kategorické hodnoty: {0}")]
    Mapping(#[from] MappingError),

    #[error("neplatný vstup: {0}")]
    Validation(String),

    #[error("nepodarilo sa načítať model bundle: {0}")]
    BundleLoad(#[from] BundleLoadError),

    #[error("predikcia zlyhala: {0}")]
    Prediction(#[from] PredictionError),
}
