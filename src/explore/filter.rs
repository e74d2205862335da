use std::collections::HashMap;

use crate::data_loading::SurveyData;
use crate::schema;
use crate::LungscopeError;

/// Výber z widgetov dashboardu. Žije len počas jednej interakcie,
/// po vyrobení pohľadu sa zahadzuje.
#[derive(Debug, Clone)]
pub struct FilterSelection {
    pub genders: Vec<String>,
    pub features: Vec<String>,
    pub symptoms: Vec<String>,
    /// Inkluzívny rozsah veku (lo, hi)
    pub age_range: (u32, u32),
}

impl FilterSelection {
    pub fn new() -> Self {
        Self {
            genders: Vec::new(),
            features: Vec::new(),
            symptoms: Vec::new(),
            age_range: (schema::AGE_MIN, schema::AGE_MAX),
        }
    }

    pub fn genders(mut self, genders: &[&str]) -> Self {
        self.genders = genders.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn symptoms(mut self, symptoms: &[&str]) -> Self {
        self.symptoms = symptoms.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn age_range(mut self, lo: u32, hi: u32) -> Self {
        self.age_range = (lo, hi);
        self
    }

    fn validate(&self) -> Result<(), LungscopeError> {
        let (lo, hi) = self.age_range;
        if lo < schema::AGE_MIN || hi > schema::AGE_MAX {
            return Err(LungscopeError::Validation(format!(
                "rozsah veku {lo}-{hi} je mimo {}-{}",
                schema::AGE_MIN,
                schema::AGE_MAX
            )));
        }
        if lo > hi {
            return Err(LungscopeError::Validation(format!(
                "dolná hranica veku {lo} je väčšia ako horná {hi}"
            )));
        }
        for gender in &self.genders {
            if gender != schema::MALE && gender != schema::FEMALE {
                return Err(LungscopeError::Validation(format!(
                    "neznáme pohlavie '{gender}'"
                )));
            }
        }
        for feature in &self.features {
            if !schema::FEATURE_COLUMNS.contains(&feature.as_str()) {
                return Err(LungscopeError::Validation(format!(
                    "neznámy feature stĺpec '{feature}'"
                )));
            }
        }
        for symptom in &self.symptoms {
            if !schema::SYMPTOM_COLUMNS.contains(&symptom.as_str()) {
                return Err(LungscopeError::Validation(format!(
                    "neznámy symptóm '{symptom}'"
                )));
            }
        }
        Ok(())
    }

    /// Stĺpce výsledného pohľadu: Age, Gender, Lung Cancer, potom zvolené
    /// features a symptómy, každá skupina v pevnom kanonickom poradí
    fn selected_headers(&self) -> Vec<String> {
        let mut headers = vec![
            schema::AGE.to_string(),
            schema::GENDER.to_string(),
            schema::OUTCOME.to_string(),
        ];
        for column in schema::FEATURE_COLUMNS {
            if self.features.iter().any(|f| f == column) {
                headers.push(column.to_string());
            }
        }
        for column in schema::SYMPTOM_COLUMNS {
            if self.symptoms.iter().any(|s| s == column) {
                headers.push(column.to_string());
            }
        }
        headers
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::new()
    }
}

/// Odvodený read-only pohľad na vyfiltrované riadky
#[derive(Debug, Clone)]
pub struct FilteredView {
    headers: Vec<String>,
    records: Vec<HashMap<String, String>>,
}

impl FilteredView {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[HashMap<String, String>] {
        &self.records
    }

    pub fn num_rows(&self) -> usize {
        self.records.len()
    }

    /// Riadky zarovnané na poradie hlavičiek, pre render tabuľky
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|record| {
                self.headers
                    .iter()
                    .map(|header| record.get(header).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Aplikuje výber na dataset: riadok ostáva ak pohlavie patrí do výberu
/// a vek leží v inkluzívnom rozsahu. Výsledok je stabilne zoradený
/// vzostupne podľa veku a orezaný na zvolené stĺpce.
pub fn filter(
    data: &SurveyData,
    selection: &FilterSelection,
) -> Result<FilteredView, LungscopeError> {
    selection.validate()?;
    let (lo, hi) = selection.age_range;

    let mut matched: Vec<(u32, &HashMap<String, String>)> = Vec::new();
    for (idx, record) in data.records().iter().enumerate() {
        let gender = record
            .get(schema::GENDER)
            .map(String::as_str)
            .unwrap_or_default();
        if !selection.genders.iter().any(|g| g == gender) {
            continue;
        }

        let age: u32 = record
            .get(schema::AGE)
            .map(String::as_str)
            .unwrap_or_default()
            .parse()
            .map_err(|_| {
                LungscopeError::Validation(format!("vek nie je číslo (riadok {})", idx + 1))
            })?;
        if age < lo || age > hi {
            continue;
        }

        matched.push((age, record));
    }

    // sort_by_key je stabilný, remízy držia pôvodné poradie riadkov
    matched.sort_by_key(|(age, _)| *age);

    let headers = selection.selected_headers();
    let records = matched
        .into_iter()
        .map(|(_, record)| {
            headers
                .iter()
                .map(|header| {
                    (
                        header.clone(),
                        record.get(header).cloned().unwrap_or_default(),
                    )
                })
                .collect()
        })
        .collect();

    Ok(FilteredView { headers, records })
}
