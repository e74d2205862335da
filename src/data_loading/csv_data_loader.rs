use std::collections::HashMap;

use csv::ReaderBuilder;

use super::data_loader::{DataLoader, LoadError, SurveyData};
use crate::schema;

/// CSV Data Loader - implementácia Strategy pattern pre survey CSV súbory.
/// Hlavičky normalizuje na kanonické názvy stĺpcov.
pub struct CsvDataLoader;

impl CsvDataLoader {
    pub fn new() -> Self {
        Self
    }

    /// Normalizácia hlavičky: podčiarkovníky na medzery, trim, Title Case.
    /// Napr. `CHEST_PAIN ` sa zmení na `Chest Pain`.
    fn normalize_header(raw: &str) -> String {
        let spaced = raw.replace('_', " ");
        let trimmed = spaced.trim();
        let mut normalized = String::with_capacity(trimmed.len());
        let mut word_start = true;

        for ch in trimmed.chars() {
            if ch.is_alphabetic() {
                if word_start {
                    normalized.extend(ch.to_uppercase());
                    word_start = false;
                } else {
                    normalized.extend(ch.to_lowercase());
                }
            } else {
                normalized.push(ch);
                word_start = true;
            }
        }

        normalized
    }

    /// Helper pre parsovanie CSV
    fn parse_csv(
        &self,
        csv_text: &str,
    ) -> Result<(Vec<String>, Vec<HashMap<String, String>>), LoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(csv_text.as_bytes());

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(Self::normalize_header)
            .collect();

        if headers.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut records = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            if record.len() != headers.len() {
                return Err(LoadError::RowShape {
                    row: idx + 1,
                    got: record.len(),
                    expected: headers.len(),
                });
            }
            records.push(
                record
                    .iter()
                    .enumerate()
                    .map(|(i, val)| (headers[i].clone(), val.trim().to_string()))
                    .collect::<HashMap<_, _>>(),
            );
        }

        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok((headers, records))
    }
}

impl DataLoader for CsvDataLoader {
    fn get_name(&self) -> &str {
        "CSV Data Loader"
    }

    fn load_from_string(&mut self, data: &str) -> Result<SurveyData, LoadError> {
        self.validate_format(data)?;

        let (headers, records) = self.parse_csv(data)?;

        // Kontrola povinných stĺpcov survey datasetu
        for required in schema::required_columns() {
            if !headers.iter().any(|header| header == required) {
                return Err(LoadError::MissingColumn(required.to_string()));
            }
        }

        Ok(SurveyData::new(headers, records))
    }

    fn get_available_columns(&self, data: &str) -> Result<Vec<String>, LoadError> {
        let (headers, _) = self.parse_csv(data)?;
        Ok(headers)
    }

    fn validate_format(&self, data: &str) -> Result<(), LoadError> {
        if data.trim().is_empty() {
            return Err(LoadError::Empty);
        }

        // CSV musí obsahovať aspoň header a jeden riadok dát
        if data.lines().count() < 2 {
            return Err(LoadError::Empty);
        }

        Ok(())
    }
}

impl Default for CsvDataLoader {
    fn default() -> Self {
        Self::new()
    }
}
