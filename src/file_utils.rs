use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_controller::Download;
use crate::errors::AppError;

// @module: File output for the command line

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Write every download into `output_dir`, returning the written paths
    ///
    /// Existing files are only replaced when `force_overwrite` is set; nothing
    /// is written if any target already exists.
    pub fn write_downloads<P: AsRef<Path>>(
        output_dir: P,
        downloads: &[Download],
        force_overwrite: bool,
    ) -> Result<Vec<PathBuf>, AppError> {
        let paths: Vec<PathBuf> = downloads
            .iter()
            .map(|d| output_dir.as_ref().join(&d.file_name))
            .collect();

        if !force_overwrite {
            if let Some(existing) = paths.iter().find(|p| p.exists()) {
                return Err(AppError::File(format!(
                    "Output file already exists: {:?}. Use -f to force overwrite.",
                    existing
                )));
            }
        }

        for (path, download) in paths.iter().zip(downloads) {
            Self::write_to_file(path, &download.content)?;
        }
        Ok(paths)
    }
}
