use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, ErrorKind},
    path::{Path, PathBuf},
};

use crate::error::{AppError, Result};

/// Where the header text comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` select standard input; anything else is a file path.
    #[must_use]
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    /// Open the source for buffered line reading.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InputNotFound`] for a missing file and
    /// [`AppError::Read`] for any other open failure.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => FileReader::open_buffered(path)
                .map(|reader| Box::new(reader) as Box<dyn BufRead>),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "'{}'", path.display()),
        }
    }
}

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    ///
    /// # Errors
    ///
    /// Maps `NotFound` to [`AppError::InputNotFound`], everything else to [`AppError::Read`].
    pub fn open(path: &Path) -> Result<File> {
        File::open(path).map_err(|source| read_error(path, source))
    }

    /// Open the file at `path` with buffered reading.
    ///
    /// # Errors
    ///
    /// See [`FileReader::open`].
    pub fn open_buffered(path: &Path) -> Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the entire file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// See [`FileReader::open`]; invalid UTF-8 is reported as [`AppError::Read`].
    pub fn read_to_string(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|source| read_error(path, source))
    }
}

fn read_error(path: &Path, source: io::Error) -> AppError {
    if source.kind() == ErrorKind::NotFound {
        AppError::InputNotFound {
            path: path.to_path_buf(),
        }
    } else {
        AppError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}
