use std::collections::HashMap;

use thiserror::Error;

/// Výsledok načítania survey dát
#[derive(Debug, Clone)]
pub struct SurveyData {
    headers: Vec<String>,
    records: Vec<HashMap<String, String>>,
}

impl SurveyData {
    pub fn new(headers: Vec<String>, records: Vec<HashMap<String, String>>) -> Self {
        Self { headers, records }
    }

    /// Názvy stĺpcov po normalizácii hlavičiek
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[HashMap<String, String>] {
        &self.records
    }

    pub fn num_rows(&self) -> usize {
        self.records.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }
}

/// Chyby pri načítaní vstupného súboru. Sú fatálne, bez dát dashboard nebeží.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("nepodarilo sa prečítať súbor '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("chyba pri čítaní CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV neobsahuje žiadne dáta")]
    Empty,

    #[error("riadok {row} má {got} stĺpcov, očakávaných {expected}")]
    RowShape {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("chýbajúci povinný stĺpec '{0}'")]
    MissingColumn(String),
}

/// Strategy pattern pre načítanie dát z rôznych zdrojov
pub trait DataLoader {
    /// Názov loadera
    fn get_name(&self) -> &str;

    /// Načíta survey tabuľku zo stringu
    fn load_from_string(&mut self, data: &str) -> Result<SurveyData, LoadError>;

    /// Získa dostupné stĺpce (headers) z dát
    fn get_available_columns(&self, data: &str) -> Result<Vec<String>, LoadError>;

    /// Validuje formát dát pred načítaním
    fn validate_format(&self, data: &str) -> Result<(), LoadError>;
}
