use serde::{Deserialize, Serialize};

use crate::prediction::PredictionError;

/// MinMax Scaler s parametrami fitovanými pri trénovaní.
/// Načítava sa ako artefakt bundle, pri inferencii sa nefituje.
/// Poradie stĺpcov vo vektore musí sedieť so zoznamom `columns`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub version: u32,
    pub columns: Vec<String>,
    pub data_min: Vec<f64>,
    pub data_max: Vec<f64>,
    pub range_min: f64,
    pub range_max: f64,
}

impl MinMaxScaler {
    /// Preškáluje celý príznakový vektor (vrátane veku) do trénovacieho rozsahu
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, PredictionError> {
        if features.len() != self.columns.len() {
            return Err(PredictionError::LengthMismatch {
                got: features.len(),
                expected: self.columns.len(),
            });
        }

        let scale = self.range_max - self.range_min;
        Ok(features
            .iter()
            .enumerate()
            .map(|(j, value)| {
                let range = self.data_max[j] - self.data_min[j];
                if range > 1e-8 {
                    (value - self.data_min[j]) / range * scale + self.range_min
                } else {
                    self.range_min
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> MinMaxScaler {
        MinMaxScaler {
            version: 1,
            columns: vec!["Gender".to_string(), "Age".to_string()],
            data_min: vec![0.0, 20.0],
            data_max: vec![1.0, 80.0],
            range_min: 0.0,
            range_max: 1.0,
        }
    }

    #[test]
    fn scales_with_training_parameters() {
        let scaled = scaler().transform(&[1.0, 50.0]).unwrap();
        assert_eq!(scaled[0], 1.0);
        assert!((scaled[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_column_collapses_to_range_min() {
        let mut scaler = scaler();
        scaler.data_min[0] = 1.0;
        scaler.data_max[0] = 1.0;
        let scaled = scaler.transform(&[1.0, 20.0]).unwrap();
        assert_eq!(scaled[0], 0.0);
    }

    #[test]
    fn wrong_vector_length_is_rejected() {
        let err = scaler().transform(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::LengthMismatch { got: 1, expected: 2 }
        ));
    }
}
