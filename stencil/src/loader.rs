use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{InputKind, StencilError};
use crate::fields::FieldTable;

/// Resolve a user-entered file name to a full path.
///
/// Blank names are rejected before any filesystem access. Relative names
/// resolve against the working directory.
pub fn resolve_path(name: &str, kind: InputKind) -> Result<PathBuf, StencilError> {
    if name.trim().is_empty() {
        return Err(StencilError::MissingInputError(kind));
    }

    let path = Path::new(name);

    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// Read the template file with the given name.
pub fn read_template(name: &str) -> Result<String, StencilError> {
    let path = resolve_path(name, InputKind::Template)?;

    if !path.exists() {
        return Err(StencilError::FileNotFoundError(InputKind::Template));
    }

    Ok(fs::read_to_string(path)?)
}

/// Read the JSON file with the given name and build its field table.
pub fn read_fields(name: &str) -> Result<FieldTable, StencilError> {
    let path = resolve_path(name, InputKind::Fields)?;

    if !path.exists() {
        return Err(StencilError::FileNotFoundError(InputKind::Fields));
    }

    let json = fs::read_to_string(path)?;

    FieldTable::from_json_str(&json)
}

/// Write processed text to the named output file, returning the full path.
pub fn write_output(name: &str, contents: &str) -> Result<PathBuf, StencilError> {
    let path = resolve_path(name, InputKind::Output)?;

    fs::write(&path, contents)?;

    Ok(path)
}

/// Names of the entries in a directory, for prompt completion.
///
/// Completion is an affordance, so an unreadable directory just means no
/// candidates.
pub fn dir_entry_names(dir: impl AsRef<Path>) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok()?.file_name().into_string().ok())
        .collect()
}
