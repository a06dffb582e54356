//! Misc utility stuff

use flate2::read::MultiGzDecoder;
use fs_err as fs;
use std::error;
use std::fmt;
use std::io::{self, BufRead, Read};

/// Shorthand for returning an error Result
#[macro_export]
macro_rules! err {
    ($e:literal) => {Err(Error::Error($e.to_string()))};
    ($e:expr) => {Err(Error::Error($e))};
    ($($e:expr),+) => {Err(Error::Error(format!($($e),+)))}
}
pub use err;
// Shorthand for implementing a pass-through error
macro_rules! err_type {
    ($x:path, $i:path) => {
        impl From<$x> for Error {
            fn from(kind: $x) -> Error {
                $i(kind)
            }
        }
    };
}

/// Various errors
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Custom cryptoquip error
    Error(String),
    /// pass through io::Error
    IoError(std::io::Error),
}
/// Result type for cryptoquip
pub type Result<T> = core::result::Result<T, Error>;
impl error::Error for Error {}

impl Error {
    /// return true if this error should be treated as not an error
    pub fn suppress(&self) -> bool {
        match self {
            Self::IoError(err) => err.kind() == io::ErrorKind::BrokenPipe,
            Self::Error(_) => false,
        }
    }
}

err_type!(std::io::Error, Error::IoError);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(s) => write!(f, "{}", s)?,
            Self::IoError(s) => write!(f, "IoError : {}", s)?,
        }
        Ok(())
    }
}

/// Open a named file for buffered reading. `-` means stdin.
/// Gzipped input, recognized by its magic bytes, is decompressed transparently.
pub fn get_reader(name: &str) -> Result<Box<dyn BufRead>> {
    let inner: Box<dyn Read> = if name == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(fs::File::open(name)?)
    };
    let mut outer = io::BufReader::new(inner);
    let start = outer.fill_buf()?;
    if start.starts_with(&[0x1f_u8, 0x8b_u8, 0x08_u8]) {
        Ok(Box::new(io::BufReader::new(MultiGzDecoder::new(outer))))
    } else {
        Ok(Box::new(outer))
    }
}
