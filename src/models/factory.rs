use serde::{Deserialize, Serialize};

use super::Classifier;
use crate::prediction::ModelBundle;
use crate::LungscopeError;

/// Voľba klasifikátora zo selectboxu dashboardu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelChoice {
    LogisticRegression,
    KNearestNeighbors,
}

impl ModelChoice {
    /// Vytvorí voľbu na základe názvu z frontendu
    pub fn parse(name: &str) -> Result<Self, LungscopeError> {
        match name {
            "logreg" | "logistic_regression" => Ok(Self::LogisticRegression),
            "knn" | "k_nearest_neighbors" => Ok(Self::KNearestNeighbors),
            _ => Err(LungscopeError::Validation(format!("Neznámy model: {name}"))),
        }
    }

    /// Vráti zoznam všetkých dostupných modelov
    pub fn available_models() -> Vec<&'static str> {
        vec!["logreg", "knn"]
    }

    /// Vráti popis modelu
    pub fn get_model_description(model_type: &str) -> Option<&'static str> {
        match model_type {
            "logreg" => Some("Logistická Regresia - binárna klasifikácia rizika"),
            "knn" => Some("K-Nearest Neighbors - klasifikácia podľa najbližších respondentov"),
            _ => None,
        }
    }
}

/// Factory vyberajúca klasifikátor z bundle podľa voľby
pub struct ModelFactory;

impl ModelFactory {
    pub fn create(bundle: &ModelBundle, choice: ModelChoice) -> &dyn Classifier {
        match choice {
            ModelChoice::LogisticRegression => bundle.logreg(),
            ModelChoice::KNearestNeighbors => bundle.knn(),
        }
    }
}
