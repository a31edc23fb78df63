use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, SwapError};
use crate::models::Food;

/// Load a food catalog from a JSON or CSV file, picked by extension.
///
/// Catalog order is preserved; the search index depends on it. Duplicated ids
/// and negative macro values are rejected rather than silently dropped.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    let foods = match extension.as_deref() {
        Some("csv") => load_csv(path)?,
        _ => load_json(path)?,
    };

    validate_catalog(&foods)?;
    Ok(foods)
}

fn load_json(path: &Path) -> Result<Vec<Food>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn load_csv(path: &Path) -> Result<Vec<Food>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();
    for record in reader.deserialize() {
        foods.push(record?);
    }
    Ok(foods)
}

fn validate_catalog(foods: &[Food]) -> Result<()> {
    let mut seen = HashSet::new();
    for food in foods {
        if !food.is_valid() {
            return Err(SwapError::InvalidInput(format!(
                "{} has a negative macro value",
                food.name
            )));
        }
        if !seen.insert(food.id) {
            return Err(SwapError::InvalidInput(format!(
                "duplicate food id {} ({})",
                food.id, food.name
            )));
        }
    }
    Ok(())
}
