use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidConfig(String),
    DimensionMismatch {
        expected: usize,
        width: usize,
        height: usize,
    },
    UnknownFormat(String),
    Cancelled,
    Worker(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            Self::DimensionMismatch {
                expected,
                width,
                height,
            } => write!(
                f,
                "bitmap is {width}x{height}, expected {expected}x{expected} to match the frame size"
            ),
            Self::UnknownFormat(name) => write!(f, "unknown export format '{name}'"),
            Self::Cancelled => write!(f, "generation cancelled"),
            Self::Worker(msg) => write!(f, "generation worker failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
