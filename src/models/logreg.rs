use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::LogisticRegression;

use super::Classifier;
use crate::prediction::PredictionError;

/// Typ serializovaného logistic regression artefaktu
pub type LogRegModel = LogisticRegression<f64, i32, DenseMatrix<f64>, Vec<i32>>;

#[derive(Debug)]
pub struct LogRegWrapper {
    model: LogRegModel,
}

impl LogRegWrapper {
    pub fn new(model: LogRegModel) -> Self {
        Self { model }
    }
}

impl Classifier for LogRegWrapper {
    fn get_name(&self) -> &str {
        "Logistická Regresia (Klasifikácia)"
    }

    fn predict(&self, features: &[f64]) -> Result<i32, PredictionError> {
        let x = DenseMatrix::from_2d_vec(&vec![features.to_vec()]);
        let classes = self.model.predict(&x)?;
        classes.into_iter().next().ok_or(PredictionError::Empty)
    }
}
