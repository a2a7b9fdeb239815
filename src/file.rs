// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::table::DataSet;

/// Write the table to the file `export` points at. Returns that path.
pub fn write_export(export: &ExportOptions, ds: &DataSet) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();
    write_export_to(&path, export, ds)?;
    Ok(path)
}

pub fn write_export_to(
    path: &Path,
    export: &ExportOptions,
    ds: &DataSet,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(
        &ds.headers,
        &ds.rows,
        export.include_headers,
        export.format.delim(),
    );

    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
