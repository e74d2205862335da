use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::models::{KnnModel, KnnWrapper, LogRegModel, LogRegWrapper};
use crate::processing::{CategoryEncoder, MinMaxScaler};
use crate::schema;

pub const LOGREG_ARTIFACT: &str = "logreg.json";
pub const KNN_ARTIFACT: &str = "knn.json";
pub const ENCODER_ARTIFACT: &str = "encoder.json";
pub const SCALER_ARTIFACT: &str = "scaler.json";

/// Chyby načítania bundle. Bez modelov predikcia nefunguje, hosť má
/// pri tejto chybe zastaviť štart a nie ju hlásiť per-request.
#[derive(Debug, Error)]
pub enum BundleLoadError {
    #[error("artefakt '{path}' sa nepodarilo otvoriť: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("artefakt '{path}' sa nepodarilo deserializovať: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("schéma artefaktov nesedí s očakávanou: {0}")]
    SchemaMismatch(String),
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, BundleLoadError> {
    let file = File::open(path).map_err(|source| BundleLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| BundleLoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn parse_artifact<T: DeserializeOwned>(name: &str, json: &str) -> Result<T, BundleLoadError> {
    serde_json::from_str(json).map_err(|source| BundleLoadError::Parse {
        path: name.to_string(),
        source,
    })
}

/// Štyri natrénované artefakty zdieľané read-only všetkými predikciami:
/// dva klasifikátory, kategorický encoder a feature scaler.
#[derive(Debug)]
pub struct ModelBundle {
    logreg: LogRegWrapper,
    knn: KnnWrapper,
    encoder: CategoryEncoder,
    scaler: MinMaxScaler,
}

impl ModelBundle {
    /// Načíta všetky artefakty z adresára
    pub fn load(dir: &Path) -> Result<Self, BundleLoadError> {
        let logreg: LogRegModel = read_artifact(&dir.join(LOGREG_ARTIFACT))?;
        let knn: KnnModel = read_artifact(&dir.join(KNN_ARTIFACT))?;
        let encoder: CategoryEncoder = read_artifact(&dir.join(ENCODER_ARTIFACT))?;
        let scaler: MinMaxScaler = read_artifact(&dir.join(SCALER_ARTIFACT))?;

        let bundle = Self::from_parts(logreg, knn, encoder, scaler)?;
        info!(dir = %dir.display(), "model bundle loaded");
        Ok(bundle)
    }

    /// Zostaví bundle z JSON reťazcov, pre hostov bez prístupu na disk
    pub fn from_json_parts(
        logreg_json: &str,
        knn_json: &str,
        encoder_json: &str,
        scaler_json: &str,
    ) -> Result<Self, BundleLoadError> {
        let logreg: LogRegModel = parse_artifact(LOGREG_ARTIFACT, logreg_json)?;
        let knn: KnnModel = parse_artifact(KNN_ARTIFACT, knn_json)?;
        let encoder: CategoryEncoder = parse_artifact(ENCODER_ARTIFACT, encoder_json)?;
        let scaler: MinMaxScaler = parse_artifact(SCALER_ARTIFACT, scaler_json)?;
        Self::from_parts(logreg, knn, encoder, scaler)
    }

    fn from_parts(
        logreg: LogRegModel,
        knn: KnnModel,
        encoder: CategoryEncoder,
        scaler: MinMaxScaler,
    ) -> Result<Self, BundleLoadError> {
        Self::check_schema(&encoder, &scaler)?;
        Ok(Self {
            logreg: LogRegWrapper::new(logreg),
            knn: KnnWrapper::new(knn),
            encoder,
            scaler,
        })
    }

    /// Kontrola zhody artefaktov s očakávanou schémou príznakového vektora.
    /// Nesúlad poradia stĺpcov by inak viedol na ticho nesprávne predikcie.
    fn check_schema(
        encoder: &CategoryEncoder,
        scaler: &MinMaxScaler,
    ) -> Result<(), BundleLoadError> {
        if encoder.version != schema::SCHEMA_VERSION {
            return Err(BundleLoadError::SchemaMismatch(format!(
                "encoder má verziu {}, očakávaná {}",
                encoder.version,
                schema::SCHEMA_VERSION
            )));
        }
        if scaler.version != schema::SCHEMA_VERSION {
            return Err(BundleLoadError::SchemaMismatch(format!(
                "scaler má verziu {}, očakávaná {}",
                scaler.version,
                schema::SCHEMA_VERSION
            )));
        }

        let expected_scaler: Vec<&str> = schema::FEATURE_ORDER.to_vec();
        let got_scaler: Vec<&str> = scaler.columns.iter().map(String::as_str).collect();
        if got_scaler != expected_scaler {
            return Err(BundleLoadError::SchemaMismatch(format!(
                "scaler stĺpce {:?} nesedia s {:?}",
                got_scaler, expected_scaler
            )));
        }
        if scaler.data_min.len() != scaler.columns.len()
            || scaler.data_max.len() != scaler.columns.len()
        {
            return Err(BundleLoadError::SchemaMismatch(
                "scaler nemá min/max pre každý stĺpec".to_string(),
            ));
        }

        let expected_encoder = schema::encoded_columns();
        let got_encoder = encoder.column_names();
        if got_encoder != expected_encoder {
            return Err(BundleLoadError::SchemaMismatch(format!(
                "encoder stĺpce {:?} nesedia s {:?}",
                got_encoder, expected_encoder
            )));
        }
        for column in &encoder.columns {
            if column.classes.is_empty() {
                return Err(BundleLoadError::SchemaMismatch(format!(
                    "encoder stĺpec '{}' nemá žiadne triedy",
                    column.name
                )));
            }
            let canonical: &[&str] = if column.name == schema::GENDER {
                &[schema::FEMALE, schema::MALE]
            } else {
                &[schema::NO, schema::YES]
            };
            for class in &column.classes {
                if !canonical.contains(&class.as_str()) {
                    return Err(BundleLoadError::SchemaMismatch(format!(
                        "encoder stĺpec '{}' má nekanonickú triedu '{}'",
                        column.name, class
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn logreg(&self) -> &LogRegWrapper {
        &self.logreg
    }

    pub fn knn(&self) -> &KnnWrapper {
        &self.knn
    }

    pub fn encoder(&self) -> &CategoryEncoder {
        &self.encoder
    }

    pub fn scaler(&self) -> &MinMaxScaler {
        &self.scaler
    }
}

/// Bundle sa načítava najviac raz za beh procesu. Cache drží jednu
/// zdieľanú instanciu a odovzdáva sa hosťom ako explicitná závislosť.
pub struct BundleCache {
    cell: OnceCell<Arc<ModelBundle>>,
}

impl BundleCache {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Prvé volanie načíta bundle z adresára, ďalšie vracajú tú istú instanciu
    pub fn get_or_load(&self, dir: &Path) -> Result<Arc<ModelBundle>, BundleLoadError> {
        self.cell
            .get_or_try_init(|| ModelBundle::load(dir).map(Arc::new))
            .cloned()
    }
}

impl Default for BundleCache {
    fn default() -> Self {
        Self::new()
    }
}
