use thiserror::Error;

use crate::data_loading::SurveyData;
use crate::schema;

/// Chyba mapovania surového kódu. Neznámy kód zhadzuje celé načítanie,
/// tichý fallback na chýbajúcu hodnotu by skreslil filtre aj grafy.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("neznámy kód '{value}' v stĺpci '{column}' (riadok {row})")]
    UnknownCode {
        column: String,
        row: usize,
        value: String,
    },

    #[error("vek '{value}' nie je celé číslo v rozsahu 1 až 120 (riadok {row})")]
    InvalidAge { row: usize, value: String },
}

/// Prevod surových kódov survey datasetu na kanonické labely.
/// Mapovanie je case-sensitive na surovej strane a zodpovedá kódom
/// použitým pri trénovaní: 1/NO na No, 2/YES na Yes, M/F na Male/Female.
pub struct CategoricalNormalizer;

impl CategoricalNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn map_binary(raw: &str) -> Option<&'static str> {
        match raw {
            "1" | "NO" => Some(schema::NO),
            "2" | "YES" => Some(schema::YES),
            _ => None,
        }
    }

    fn map_gender(raw: &str) -> Option<&'static str> {
        match raw {
            "M" => Some(schema::MALE),
            "F" => Some(schema::FEMALE),
            _ => None,
        }
    }

    /// Vráti novú tabuľku s kanonickými labelmi, zdrojová tabuľka sa nemení
    pub fn normalize(&self, data: &SurveyData) -> Result<SurveyData, MappingError> {
        let mut records = Vec::with_capacity(data.num_rows());

        for (idx, record) in data.records().iter().enumerate() {
            let row = idx + 1;
            let mut normalized = record.clone();

            for column in schema::BINARY_COLUMNS {
                let raw = record.get(column).map(String::as_str).unwrap_or_default();
                match Self::map_binary(raw) {
                    Some(canonical) => {
                        normalized.insert(column.to_string(), canonical.to_string());
                    }
                    None => {
                        return Err(MappingError::UnknownCode {
                            column: column.to_string(),
                            row,
                            value: raw.to_string(),
                        })
                    }
                }
            }

            let raw_gender = record
                .get(schema::GENDER)
                .map(String::as_str)
                .unwrap_or_default();
            match Self::map_gender(raw_gender) {
                Some(canonical) => {
                    normalized.insert(schema::GENDER.to_string(), canonical.to_string());
                }
                None => {
                    return Err(MappingError::UnknownCode {
                        column: schema::GENDER.to_string(),
                        row,
                        value: raw_gender.to_string(),
                    })
                }
            }

            // Vek ostáva numerický, kontroluje sa iba rozsah
            let raw_age = record
                .get(schema::AGE)
                .map(String::as_str)
                .unwrap_or_default();
            match raw_age.parse::<u32>() {
                Ok(age) if (schema::AGE_MIN..=schema::AGE_MAX).contains(&age) => {}
                _ => {
                    return Err(MappingError::InvalidAge {
                        row,
                        value: raw_age.to_string(),
                    })
                }
            }

            records.push(normalized);
        }

        Ok(SurveyData::new(data.headers().to_vec(), records))
    }
}

impl Default for CategoricalNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn raw_record(gender: &str, age: &str, smoking: &str) -> HashMap<String, String> {
        let mut record = HashMap::new();
        record.insert(schema::GENDER.to_string(), gender.to_string());
        record.insert(schema::AGE.to_string(), age.to_string());
        for column in schema::BINARY_COLUMNS {
            record.insert(column.to_string(), "1".to_string());
        }
        record.insert("Smoking".to_string(), smoking.to_string());
        record
    }

    fn raw_table(records: Vec<HashMap<String, String>>) -> SurveyData {
        let headers = schema::required_columns()
            .into_iter()
            .map(str::to_string)
            .collect();
        SurveyData::new(headers, records)
    }

    #[test]
    fn known_codes_map_deterministically() {
        assert_eq!(CategoricalNormalizer::map_binary("1"), Some("No"));
        assert_eq!(CategoricalNormalizer::map_binary("2"), Some("Yes"));
        assert_eq!(CategoricalNormalizer::map_binary("YES"), Some("Yes"));
        assert_eq!(CategoricalNormalizer::map_binary("NO"), Some("No"));
        assert_eq!(CategoricalNormalizer::map_gender("M"), Some("Male"));
        assert_eq!(CategoricalNormalizer::map_gender("F"), Some("Female"));
    }

    #[test]
    fn raw_side_is_case_sensitive() {
        assert_eq!(CategoricalNormalizer::map_binary("yes"), None);
        assert_eq!(CategoricalNormalizer::map_binary("No"), None);
        assert_eq!(CategoricalNormalizer::map_gender("m"), None);
    }

    #[test]
    fn normalizes_whole_table() {
        let data = raw_table(vec![raw_record("M", "34", "2")]);
        let normalized = CategoricalNormalizer::new().normalize(&data).unwrap();

        let record = &normalized.records()[0];
        assert_eq!(record["Gender"], "Male");
        assert_eq!(record["Smoking"], "Yes");
        assert_eq!(record["Chest Pain"], "No");
        assert_eq!(record["Age"], "34");
    }

    #[test]
    fn unknown_code_fails_loudly() {
        let data = raw_table(vec![raw_record("M", "34", "3")]);
        let err = CategoricalNormalizer::new().normalize(&data).unwrap_err();
        assert!(matches!(err, MappingError::UnknownCode { ref column, row: 1, .. } if column == "Smoking"));
    }

    #[test]
    fn out_of_range_age_is_rejected() {
        let data = raw_table(vec![raw_record("F", "121", "1")]);
        let err = CategoricalNormalizer::new().normalize(&data).unwrap_err();
        assert!(matches!(err, MappingError::InvalidAge { row: 1, .. }));

        let data = raw_table(vec![raw_record("F", "0", "1")]);
        assert!(CategoricalNormalizer::new().normalize(&data).is_err());
    }
}
