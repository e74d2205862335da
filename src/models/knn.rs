use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::distance::euclidian::Euclidian;
use smartcore::neighbors::knn_classifier::KNNClassifier;

use super::Classifier;
use crate::prediction::PredictionError;

/// Typ serializovaného KNN artefaktu (euklidovská vzdialenosť ako pri trénovaní)
pub type KnnModel = KNNClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>, Euclidian<f64>>;

#[derive(Debug)]
pub struct KnnWrapper {
    model: KnnModel,
}

impl KnnWrapper {
    pub fn new(model: KnnModel) -> Self {
        Self { model }
    }
}

impl Classifier for KnnWrapper {
    fn get_name(&self) -> &str {
        "K-Nearest Neighbors"
    }

    fn predict(&self, features: &[f64]) -> Result<i32, PredictionError> {
        let x = DenseMatrix::from_2d_vec(&vec![features.to_vec()]);
        let classes = self.model.predict(&x)?;
        classes.into_iter().next().ok_or(PredictionError::Empty)
    }
}
