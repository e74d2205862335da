use std::collections::HashMap;

use tracing::debug;

use super::bundle::ModelBundle;
use super::PredictionError;
use crate::models::{Classifier, ModelChoice, ModelFactory};
use crate::schema;
use crate::LungscopeError;

/// Výsledné label stringy pre binárnu predikciu rizika
pub const LABEL_POSITIVE: &str = "Likely to have lung cancer.";
pub const LABEL_NEGATIVE: &str = "Unlikely to have lung cancer.";

/// Profil pacienta poskladaný z widgetov. Kandidátny záznam bez outcome,
/// žije len počas jednej predikcie.
#[derive(Debug, Clone)]
pub struct PatientProfile {
    pub age: u32,
    pub gender: String,
    answers: HashMap<String, String>,
}

impl PatientProfile {
    pub fn new(age: u32, gender: &str) -> Self {
        Self {
            age,
            gender: gender.to_string(),
            answers: HashMap::new(),
        }
    }

    /// Nastaví Yes/No odpoveď pre jeden stĺpec
    pub fn with_answer(mut self, column: &str, value: &str) -> Self {
        self.answers.insert(column.to_string(), value.to_string());
        self
    }

    pub fn set_answer(&mut self, column: &str, value: &str) {
        self.answers.insert(column.to_string(), value.to_string());
    }

    pub fn answer(&self, column: &str) -> Option<&str> {
        self.answers.get(column).map(String::as_str)
    }

    /// Profil musí mať hodnotu pre každý stĺpec okrem outcome
    fn validate(&self) -> Result<(), LungscopeError> {
        if !(schema::AGE_MIN..=schema::AGE_MAX).contains(&self.age) {
            return Err(LungscopeError::Validation(format!(
                "vek {} je mimo rozsahu {} až {}",
                self.age,
                schema::AGE_MIN,
                schema::AGE_MAX
            )));
        }
        if self.gender != schema::MALE && self.gender != schema::FEMALE {
            return Err(LungscopeError::Validation(format!(
                "neznáme pohlavie '{}'",
                self.gender
            )));
        }
        for column in schema::profile_columns() {
            match self.answer(column) {
                Some(value) if value == schema::YES || value == schema::NO => {}
                Some(value) => {
                    return Err(LungscopeError::Validation(format!(
                        "odpoveď '{value}' pre stĺpec '{column}' nie je Yes/No"
                    )))
                }
                None => {
                    return Err(LungscopeError::Validation(format!(
                        "chýba odpoveď pre stĺpec '{column}'"
                    )))
                }
            }
        }
        Ok(())
    }
}

/// Predikcia rizika pre jeden profil: validácia, enkódovanie persistnutým
/// encoderom v trénovacom poradí stĺpcov, škálovanie persistnutým scalerom
/// a klasifikácia zvoleným modelom.
pub fn predict(
    bundle: &ModelBundle,
    profile: &PatientProfile,
    choice: ModelChoice,
) -> Result<&'static str, LungscopeError> {
    profile.validate()?;

    let mut features = Vec::with_capacity(schema::FEATURE_ORDER.len());
    for column in schema::FEATURE_ORDER {
        if column == schema::AGE {
            features.push(f64::from(profile.age));
            continue;
        }
        let label = if column == schema::GENDER {
            profile.gender.as_str()
        } else {
            profile.answer(column).unwrap_or_default()
        };
        let code = bundle.encoder().transform(column, label)?;
        features.push(code as f64);
    }

    let scaled = bundle.scaler().transform(&features)?;

    let classifier = ModelFactory::create(bundle, choice);
    let class = classifier.predict(&scaled)?;
    let code = usize::try_from(class).map_err(|_| PredictionError::UnknownClassCode {
        column: schema::OUTCOME.to_string(),
        code: i64::from(class),
    })?;
    let outcome = bundle.encoder().inverse_transform(schema::OUTCOME, code)?;

    debug!(model = classifier.get_name(), outcome, "prediction served");
    Ok(if outcome == schema::YES {
        LABEL_POSITIVE
    } else {
        LABEL_NEGATIVE
    })
}
