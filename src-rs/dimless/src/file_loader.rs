//! Reading, parsing and lowering declaration files

use std::{
    io,
    path::{Path, PathBuf},
};

use dimless_parser::{self as parser, ast::DeclFile};
use dimless_quantity::Quantity;
use dimless_shared::error::{AsDimlessError, DimlessError};

/// A declaration file that could not be read
#[derive(Debug)]
struct FileError {
    path: PathBuf,
    error: io::Error,
}

impl AsDimlessError for FileError {
    fn message(&self) -> String {
        format!("couldn't read `{}` - {}", self.path.display(), self.error)
    }
}

/// A declaration file and its parsed contents
#[derive(Debug)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub source: String,
    pub declarations: DeclFile,
}

/// Reads and parses a declaration file.
pub fn parse_file(path: &Path) -> Result<LoadedFile, Vec<DimlessError>> {
    let source = std::fs::read_to_string(path).map_err(|error| {
        let error = FileError {
            path: path.to_path_buf(),
            error,
        };
        vec![DimlessError::from_error(&error, path.to_path_buf())]
    })?;

    log::debug!("read {} bytes from {}", source.len(), path.display());

    let declarations = parser::parse_file(&source, None).map_err(|error| {
        vec![DimlessError::from_error_with_source(
            &error,
            path.to_path_buf(),
            &source,
        )]
    })?;

    Ok(LoadedFile {
        path: path.to_path_buf(),
        source,
        declarations,
    })
}

/// Reads, parses and lowers a declaration file into quantities.
pub fn load_quantities(path: &Path) -> Result<Vec<Quantity>, Vec<DimlessError>> {
    let file = parse_file(path)?;

    parser::lower_file(&file.declarations).map_err(|errors| {
        errors
            .iter()
            .map(|error| DimlessError::from_error_with_source(error, file.path.clone(), &file.source))
            .collect()
    })
}
