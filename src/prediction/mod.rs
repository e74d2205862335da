use thiserror::Error;

pub mod adapter;
pub mod bundle;

pub use adapter::{predict, PatientProfile, LABEL_NEGATIVE, LABEL_POSITIVE};
pub use bundle::{BundleCache, BundleLoadError, ModelBundle};

/// Per-request chyby predikcie. Sú zotaviteľné, hosť ich zobrazí ako
/// "predikcia nedostupná" a dashboard beží ďalej.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("stĺpec '{0}' nie je v trénovacej schéme encodera")]
    UnknownColumn(String),

    #[error("hodnota '{value}' nie je v kódovacom priestore stĺpca '{column}'")]
    UnknownLabel { column: String, value: String },

    #[error("neznámy kód triedy {code} pre stĺpec '{column}'")]
    UnknownClassCode { column: String, code: i64 },

    #[error("vektor má {got} hodnôt, trénovacia schéma očakáva {expected}")]
    LengthMismatch { got: usize, expected: usize },

    #[error("klasifikátor zlyhal: {0}")]
    Model(#[from] smartcore::error::Failed),

    #[error("klasifikátor nevrátil žiadnu predikciu")]
    Empty,
}
