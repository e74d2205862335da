use crate::prediction::PredictionError;

/// Spoločné rozhranie nad natrénovanými klasifikátormi z bundle
pub trait Classifier {
    /// Názov modelu
    fn get_name(&self) -> &str;

    /// Predikcia triedy pre jeden zakódovaný a preškálovaný vektor
    fn predict(&self, features: &[f64]) -> Result<i32, PredictionError>;
}

pub mod factory;
pub mod knn;
pub mod logreg;

pub use factory::{ModelChoice, ModelFactory};
pub use knn::{KnnModel, KnnWrapper};
pub use logreg::{LogRegModel, LogRegWrapper};
