use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use super::csv_data_loader::CsvDataLoader;
use super::data_loader::{DataLoader, LoadError, SurveyData};

/// Explicitná memoizačná cache datasetov kľúčovaná cestou k súboru.
/// Každá cesta sa číta z disku najviac raz za život cache, opakované
/// volania vracajú tú istú tabuľku v pamäti. Hosť ju odovzdáva ako
/// závislosť komponentom, nie je to globálny stav.
pub struct DatasetCache {
    entries: Mutex<HashMap<PathBuf, Arc<SurveyData>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Načíta survey tabuľku zo súboru, pri opakovanom volaní vráti cached kópiu
    pub fn load(&self, path: &Path) -> Result<Arc<SurveyData>, LoadError> {
        let mut entries = self.entries.lock().unwrap();

        if let Some(hit) = entries.get(path) {
            debug!(path = %path.display(), "dataset served from cache");
            return Ok(Arc::clone(hit));
        }

        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let data = CsvDataLoader::new().load_from_string(&text)?;
        info!(path = %path.display(), rows = data.num_rows(), "survey dataset loaded");

        let data = Arc::new(data);
        entries.insert(path.to_path_buf(), Arc::clone(&data));
        Ok(data)
    }

    /// Počet zapamätaných datasetov
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}
