//! End-to-end scenáre: od surového CSV cez filter a agregáciu až po
//! predikciu nad bundle s reálne natrénovanými modelmi.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::LogisticRegression;
use smartcore::neighbors::knn_classifier::{KNNClassifier, KNNClassifierParameters};

use lungscope::prediction::bundle::{
    ENCODER_ARTIFACT, KNN_ARTIFACT, LOGREG_ARTIFACT, SCALER_ARTIFACT,
};
use lungscope::processing::{CategoryEncoder, EncoderColumn, MinMaxScaler};
use lungscope::{
    count_by, filter, predict, schema, BundleCache, BundleLoadError, CategoricalNormalizer,
    DatasetCache, FilterSelection, ModelBundle, ModelChoice, PatientProfile,
};

const CSV_HEADER: &str = "GENDER,AGE,SMOKING,YELLOW_FINGERS,ANXIETY,PEER_PRESSURE,\
CHRONIC DISEASE,FATIGUE ,ALLERGY ,WHEEZING,ALCOHOL CONSUMING,COUGHING,\
SHORTNESS OF BREATH,SWALLOWING DIFFICULTY,CHEST_PAIN ,LUNG_CANCER";

fn write_survey_csv(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("survey_lung_cancer.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{CSV_HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    path
}

fn training_encoder() -> CategoryEncoder {
    let columns = schema::encoded_columns()
        .into_iter()
        .map(|name| EncoderColumn {
            name: name.to_string(),
            classes: if name == schema::GENDER {
                vec!["Female".to_string(), "Male".to_string()]
            } else {
                vec!["No".to_string(), "Yes".to_string()]
            },
        })
        .collect();
    CategoryEncoder {
        version: schema::SCHEMA_VERSION,
        columns,
    }
}

fn training_scaler() -> MinMaxScaler {
    let columns: Vec<String> = schema::FEATURE_ORDER.iter().map(|c| c.to_string()).collect();
    let mut data_min = vec![0.0; columns.len()];
    let mut data_max = vec![1.0; columns.len()];
    // Vek sa škáluje do [0, 1] z trénovacieho rozsahu 20 až 80
    data_min[1] = 20.0;
    data_max[1] = 80.0;
    MinMaxScaler {
        version: schema::SCHEMA_VERSION,
        columns,
        data_min,
        data_max,
        range_min: 0.0,
        range_max: 1.0,
    }
}

/// Zakódovaný trénovací vektor v trénovacom poradí stĺpcov
fn sample(gender: f64, age: f64, smoking: f64) -> Vec<f64> {
    let mut row = vec![0.0; schema::FEATURE_ORDER.len()];
    row[0] = gender;
    row[1] = age;
    row[2] = smoking;
    row
}

/// Natrénuje oba klasifikátory na malej syntetickej vzorke a zapíše
/// všetky štyri artefakty do adresára.
fn write_bundle(dir: &Path) {
    let encoder = training_encoder();
    let scaler = training_scaler();

    let raw_rows = vec![
        sample(1.0, 62.0, 1.0),
        sample(1.0, 70.0, 1.0),
        sample(0.0, 58.0, 1.0),
        sample(1.0, 66.0, 1.0),
        sample(0.0, 30.0, 0.0),
        sample(1.0, 25.0, 0.0),
        sample(0.0, 35.0, 0.0),
        sample(0.0, 28.0, 0.0),
    ];
    let scaled_rows: Vec<Vec<f64>> = raw_rows
        .iter()
        .map(|row| scaler.transform(row).unwrap())
        .collect();
    let y: Vec<i32> = vec![1, 1, 1, 1, 0, 0, 0, 0];

    let x = DenseMatrix::from_2d_vec(&scaled_rows);
    let logreg = LogisticRegression::fit(&x, &y, Default::default()).unwrap();
    let knn = KNNClassifier::fit(&x, &y, KNNClassifierParameters::default().with_k(3)).unwrap();

    std::fs::write(
        dir.join(LOGREG_ARTIFACT),
        serde_json::to_string(&logreg).unwrap(),
    )
    .unwrap();
    std::fs::write(dir.join(KNN_ARTIFACT), serde_json::to_string(&knn).unwrap()).unwrap();
    std::fs::write(
        dir.join(ENCODER_ARTIFACT),
        serde_json::to_string(&encoder).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join(SCALER_ARTIFACT),
        serde_json::to_string(&scaler).unwrap(),
    )
    .unwrap();
}

fn complete_profile(age: u32, gender: &str, smoking: &str) -> PatientProfile {
    let mut profile = PatientProfile::new(age, gender);
    for column in schema::profile_columns() {
        profile.set_answer(column, "No");
    }
    profile.set_answer("Smoking", smoking);
    profile
}

#[test]
fn explore_pipeline_from_raw_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_survey_csv(
        dir.path(),
        &[
            "M,34,2,1,1,1,1,1,1,1,1,1,1,1,1,YES",
            "F,60,1,1,1,1,1,1,1,1,1,1,1,1,1,NO",
        ],
    );

    let cache = DatasetCache::new();
    let raw = cache.load(&path).unwrap();
    let data = CategoricalNormalizer::new().normalize(&raw).unwrap();

    let selection = FilterSelection::new()
        .genders(&["Male", "Female"])
        .features(&["Smoking"])
        .age_range(1, 120);
    let view = filter(&data, &selection).unwrap();

    assert_eq!(view.num_rows(), 2);
    assert_eq!(view.records()[0]["Age"], "34");
    assert_eq!(view.records()[1]["Age"], "60");
    assert_eq!(view.records()[0]["Smoking"], "Yes");

    // Remíza 1:1, takže poradie prvého výskytu: Yes pred No
    let counts = count_by(&view, "Lung Cancer").unwrap();
    assert_eq!(counts, vec![("Yes".to_string(), 1), ("No".to_string(), 1)]);

    let gender_counts = count_by(&view, "Gender").unwrap();
    let total: usize = gender_counts.iter().map(|(_, count)| count).sum();
    assert_eq!(total, view.num_rows());
}

#[test]
fn cached_dataset_is_read_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_survey_csv(dir.path(), &["M,34,2,1,1,1,1,1,1,1,1,1,1,1,1,YES"]);

    let cache = DatasetCache::new();
    let first = cache.load(&path).unwrap();

    // Prepíšeme súbor nezmyslom, cache musí ďalej vracať pôvodnú tabuľku
    std::fs::write(&path, "garbage").unwrap();
    let second = cache.load(&path).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn prediction_returns_a_fixed_label_for_both_models() {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());

    let bundle = ModelBundle::load(dir.path()).unwrap();
    let profile = complete_profile(45, "Male", "Yes");

    for choice in [ModelChoice::LogisticRegression, ModelChoice::KNearestNeighbors] {
        let label = predict(&bundle, &profile, choice).unwrap();
        assert!(
            label == "Likely to have lung cancer." || label == "Unlikely to have lung cancer."
        );
    }
}

#[test]
fn prediction_separates_training_classes() {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());
    let bundle = ModelBundle::load(dir.path()).unwrap();

    let risky = complete_profile(65, "Male", "Yes");
    let healthy = complete_profile(27, "Female", "No");

    assert_eq!(
        predict(&bundle, &risky, ModelChoice::KNearestNeighbors).unwrap(),
        "Likely to have lung cancer."
    );
    assert_eq!(
        predict(&bundle, &healthy, ModelChoice::KNearestNeighbors).unwrap(),
        "Unlikely to have lung cancer."
    );
}

#[test]
fn incomplete_profile_blocks_prediction() {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());
    let bundle = ModelBundle::load(dir.path()).unwrap();

    let profile = PatientProfile::new(45, "Male");
    assert!(predict(&bundle, &profile, ModelChoice::LogisticRegression).is_err());
}

#[test]
fn bundle_cache_loads_at_most_once() {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());

    let cache = BundleCache::new();
    let first = cache.get_or_load(dir.path()).unwrap();
    let second = cache.get_or_load(dir.path()).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn missing_artifact_fails_bundle_load() {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());
    std::fs::remove_file(dir.path().join(SCALER_ARTIFACT)).unwrap();

    let err = ModelBundle::load(dir.path()).unwrap_err();
    assert!(matches!(err, BundleLoadError::Io { .. }));
}

#[test]
fn scaler_with_foreign_columns_is_a_schema_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    write_bundle(dir.path());

    let mut scaler = training_scaler();
    scaler.columns.swap(0, 1);
    std::fs::write(
        dir.path().join(SCALER_ARTIFACT),
        serde_json::to_string(&scaler).unwrap(),
    )
    .unwrap();

    let err = ModelBundle::load(dir.path()).unwrap_err();
    assert!(matches!(err, BundleLoadError::SchemaMismatch(_)));
}
