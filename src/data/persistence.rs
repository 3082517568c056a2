use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Diet;

/// Load a diet table from a JSON file and validate it.
pub fn load_diet<P: AsRef<Path>>(path: P) -> Result<Diet> {
    let content = fs::read_to_string(path)?;
    let diet: Diet = serde_json::from_str(&content)?;
    diet.validate()?;
    Ok(diet)
}

/// Save a diet table to a JSON file.
pub fn save_diet<P: AsRef<Path>>(path: P, diet: &Diet) -> Result<()> {
    let json = serde_json::to_string_pretty(diet)?;
    fs::write(path, json)?;
    Ok(())
}
