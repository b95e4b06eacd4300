//! Raw batch persistence: a JSON array of `[date, weekend, holiday, markup]`
//! rows, loaded with up-front structural validation and saved pretty-printed.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use altistat_core::dates::is_iso_date_shaped;
use altistat_core::error::{AltistatError, Result};

/// Number of leading rows that are structurally validated on load.
const VALIDATION_WINDOW: usize = 200;

/// Load a raw batch from `path`.
///
/// The file must contain a JSON array. The first [`VALIDATION_WINDOW`] rows
/// are checked for shape (4-element array, `YYYY-MM-DD` string, two bools,
/// string); any violation rejects the batch wholesale with the offending
/// index. Rows beyond the window are accepted as-is — lenient skipping of
/// stray legacy rows happens later, at expansion.
pub fn load_batch(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path).map_err(|source| AltistatError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let data: Value = serde_json::from_str(&content)?;
    let rows = match data {
        Value::Array(rows) => rows,
        _ => {
            return Err(AltistatError::InvalidBatch(
                "top level must be a JSON array".to_string(),
            ))
        }
    };

    for (index, row) in rows.iter().take(VALIDATION_WINDOW).enumerate() {
        validate_row(index, row)?;
    }

    debug!("Loaded {} raw rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Save a raw batch to `path` as pretty-printed UTF-8 JSON.
pub fn save_batch(path: &Path, rows: &[Value]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    debug!("Saved {} raw rows to {}", rows.len(), path.display());
    Ok(())
}

fn validate_row(index: usize, row: &Value) -> Result<()> {
    let invalid = |reason: String| AltistatError::InvalidBatchRow { index, reason };

    let fields = row
        .as_array()
        .ok_or_else(|| invalid(format!("expected an array, got {}", row)))?;
    if fields.len() != 4 {
        return Err(invalid(format!(
            "expected 4 fields, got {}",
            fields.len()
        )));
    }

    match fields[0].as_str() {
        Some(date) if is_iso_date_shaped(date) => {}
        Some(date) => return Err(invalid(format!("invalid date {:?}", date))),
        None => return Err(invalid("date field must be a string".to_string())),
    }

    if !fields[1].is_boolean() || !fields[2].is_boolean() {
        return Err(invalid("weekend/holiday fields must be booleans".to_string()));
    }
    if !fields[3].is_string() {
        return Err(invalid("markup field must be a string".to_string()));
    }

    Ok(())
}
