use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::data_loading::{CsvDataLoader, DataLoader, SurveyData};
use crate::explore::{count_by, filter, FilterSelection};
use crate::models::ModelChoice;
use crate::prediction::{predict, ModelBundle, PatientProfile};
use crate::processing::CategoricalNormalizer;

/// Hodnoty widgetov prieskumnej sekcie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub genders: Vec<String>,
    pub features: Vec<String>,
    pub symptoms: Vec<String>,
    pub age_min: u32,
    pub age_max: u32,
}

impl FilterConfig {
    fn to_selection(&self) -> FilterSelection {
        FilterSelection {
            genders: self.genders.clone(),
            features: self.features.clone(),
            symptoms: self.symptoms.clone(),
            age_range: (self.age_min, self.age_max),
        }
    }
}

/// Vyfiltrovaná tabuľka pre render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub num_rows: usize,
}

/// Jedna skupina grafu početností
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountEntry {
    pub label: String,
    pub count: usize,
}

/// Profil pacienta a voľba modelu z predikčnej sekcie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: u32,
    pub gender: String,
    pub answers: Vec<(String, String)>,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub model: String,
    pub label: String,
}

/// Adaptér dashboardu pre webového hosťa. Každá zmena widgetu spúšťa
/// plný prepočet filter + agregácia nad tabuľkou drženou v pamäti.
#[wasm_bindgen]
pub struct WasmDashboard {
    data: Option<SurveyData>,
    bundle: Option<ModelBundle>,
}

#[wasm_bindgen]
impl WasmDashboard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmDashboard {
        console_error_panic_hook::set_once();

        WasmDashboard {
            data: None,
            bundle: None,
        }
    }

    /// Načíta survey CSV a znormalizuje kódy na kanonické labely.
    /// Vracia počet načítaných riadkov.
    #[wasm_bindgen(js_name = loadSurveyCsv)]
    pub fn load_survey_csv(&mut self, csv_text: &str) -> Result<usize, JsValue> {
        let raw = CsvDataLoader::new()
            .load_from_string(csv_text)
            .map_err(to_js)?;
        let data = CategoricalNormalizer::new().normalize(&raw).map_err(to_js)?;
        let rows = data.num_rows();
        self.data = Some(data);
        Ok(rows)
    }

    /// Názvy stĺpcov načítanej tabuľky
    #[wasm_bindgen(js_name = getHeaders)]
    pub fn get_headers(&self) -> Result<JsValue, JsValue> {
        let data = self.require_data()?;
        serde_wasm_bindgen::to_value(&data.headers().to_vec()).map_err(to_js)
    }

    /// Vyfiltruje a zoradí riadky podľa hodnôt widgetov
    #[wasm_bindgen(js_name = filterRecords)]
    pub fn filter_records(&self, config: JsValue) -> Result<JsValue, JsValue> {
        let config: FilterConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Config parse error: {e:?}")))?;
        let data = self.require_data()?;

        let view = filter(data, &config.to_selection()).map_err(to_js)?;
        let table = FilteredTable {
            headers: view.headers().to_vec(),
            rows: view.rows(),
            num_rows: view.num_rows(),
        };
        serde_wasm_bindgen::to_value(&table).map_err(to_js)
    }

    /// Početnosti hodnôt jedného stĺpca nad aktuálnym filtrom
    #[wasm_bindgen(js_name = countColumn)]
    pub fn count_column(&self, config: JsValue, column: &str) -> Result<JsValue, JsValue> {
        let config: FilterConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Config parse error: {e:?}")))?;
        let data = self.require_data()?;

        let view = filter(data, &config.to_selection()).map_err(to_js)?;
        let counts: Vec<CountEntry> = count_by(&view, column)
            .map_err(to_js)?
            .into_iter()
            .map(|(label, count)| CountEntry { label, count })
            .collect();
        serde_wasm_bindgen::to_value(&counts).map_err(to_js)
    }

    /// Zostaví model bundle zo serializovaných artefaktov
    #[wasm_bindgen(js_name = loadModelBundle)]
    pub fn load_model_bundle(
        &mut self,
        logreg_json: &str,
        knn_json: &str,
        encoder_json: &str,
        scaler_json: &str,
    ) -> Result<(), JsValue> {
        let bundle = ModelBundle::from_json_parts(logreg_json, knn_json, encoder_json, scaler_json)
            .map_err(to_js)?;
        self.bundle = Some(bundle);
        Ok(())
    }

    /// Predikcia rizika pre zadaný profil
    #[wasm_bindgen(js_name = predictProfile)]
    pub fn predict_profile(&self, request: JsValue) -> Result<JsValue, JsValue> {
        let request: PredictionRequest = serde_wasm_bindgen::from_value(request)
            .map_err(|e| JsValue::from_str(&format!("Request parse error: {e:?}")))?;
        let bundle = self
            .bundle
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Model bundle nie je načítaný"))?;

        let mut profile = PatientProfile::new(request.age, &request.gender);
        for (column, value) in &request.answers {
            profile.set_answer(column, value);
        }
        let choice = ModelChoice::parse(&request.model).map_err(to_js)?;

        let label = predict(bundle, &profile, choice).map_err(to_js)?;
        let outcome = PredictionOutcome {
            model: request.model,
            label: label.to_string(),
        };
        serde_wasm_bindgen::to_value(&outcome).map_err(to_js)
    }
}

impl WasmDashboard {
    fn require_data(&self) -> Result<&SurveyData, JsValue> {
        self.data
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Dataset nie je načítaný"))
    }
}

impl Default for WasmDashboard {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
