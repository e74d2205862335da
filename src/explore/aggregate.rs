use std::collections::HashMap;

use super::filter::FilteredView;
use crate::LungscopeError;

/// Frekvenčné počty hodnôt stĺpca pre graf. Skupiny sú zoradené
/// zostupne podľa počtu, remízy drží poradie prvého výskytu, takže
/// opakované rendery nezmeneného pohľadu dostanú identické dáta.
pub fn count_by(
    view: &FilteredView,
    column: &str,
) -> Result<Vec<(String, usize)>, LungscopeError> {
    if !view.headers().iter().any(|header| header == column) {
        return Err(LungscopeError::Validation(format!(
            "stĺpec '{column}' nie je vo vybranom pohľade"
        )));
    }

    let mut first_seen: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in view.records() {
        let value = record.get(column).cloned().unwrap_or_default();
        if !counts.contains_key(&value) {
            first_seen.push(value.clone());
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut result: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|label| {
            let count = counts.get(&label).copied().unwrap_or(0);
            (label, count)
        })
        .collect();

    // Stabilný sort, remízy ostávajú v poradí prvého výskytu
    result.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(result)
}
