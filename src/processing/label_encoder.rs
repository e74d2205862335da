use serde::{Deserialize, Serialize};

use crate::prediction::PredictionError;

/// Jeden kategorický stĺpec a jeho triedy. Kód triedy je index
/// v zozname, presne ako pri fitnutí encodera počas trénovania.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderColumn {
    pub name: String,
    pub classes: Vec<String>,
}

/// Kategorický encoder s kódovacím priestorom fixovaným pri trénovaní.
/// Načítava sa ako artefakt bundle a pri inferencii sa nikdy nefituje
/// nanovo, inak by sa kódy mohli ticho rozísť s trénovacími.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEncoder {
    pub version: u32,
    pub columns: Vec<EncoderColumn>,
}

impl CategoryEncoder {
    fn column(&self, name: &str) -> Result<&EncoderColumn, PredictionError> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .ok_or_else(|| PredictionError::UnknownColumn(name.to_string()))
    }

    /// Názvy stĺpcov v poradí artefaktu
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    /// Kanonický label na trénovací kód
    pub fn transform(&self, column: &str, label: &str) -> Result<usize, PredictionError> {
        let column = self.column(column)?;
        column
            .classes
            .iter()
            .position(|class| class == label)
            .ok_or_else(|| PredictionError::UnknownLabel {
                column: column.name.clone(),
                value: label.to_string(),
            })
    }

    /// Trénovací kód späť na kanonický label
    pub fn inverse_transform(&self, column: &str, code: usize) -> Result<&str, PredictionError> {
        let found = self.column(column)?;
        found
            .classes
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| PredictionError::UnknownClassCode {
                column: found.name.clone(),
                code: code as i64,
            })
    }
}
