//! File I/O for matrix description files
//!
//! Reads a plain-text matrix description from disk and hands it to the
//! `spmat-core` parser. There is no write path.

use spmat_core::{parse_matrix_with_config, MatrixElement, ParseConfig, SparseMatrix, SpmatError};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors that can occur while loading a matrix file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The contents are not a valid matrix, or arithmetic on it failed
    #[error(transparent)]
    Matrix(#[from] SpmatError),
}

/// Handle for a matrix description file whose contents have been read
pub struct MatrixFile {
    pub path: PathBuf,
    contents: String,
}

impl MatrixFile {
    /// Open and read a matrix file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;

        log::debug!("read {} bytes from {}", contents.len(), path.display());
        Ok(Self { path, contents })
    }

    /// Raw text of the file
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Parse the file contents
    pub fn parse<T: MatrixElement>(
        &self,
        config: &ParseConfig,
    ) -> Result<SparseMatrix<T>, LoadError> {
        Ok(parse_matrix_with_config(&self.contents, config)?)
    }

    /// Read and parse a matrix file with the default config
    pub fn read_matrix<T: MatrixElement, P: AsRef<Path>>(
        path: P,
    ) -> Result<SparseMatrix<T>, LoadError> {
        Self::read_matrix_with_config(path, &ParseConfig::default())
    }

    /// Read and parse a matrix file
    pub fn read_matrix_with_config<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        config: &ParseConfig,
    ) -> Result<SparseMatrix<T>, LoadError> {
        Self::open(path)?.parse(config)
    }
}
