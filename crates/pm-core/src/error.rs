use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    InvalidConfig { what: &'static str },
    EmptyRegion,
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidConfig { what } => write!(f, "invalid config: {what}"),
            Self::EmptyRegion => write!(f, "empty region"),
            Self::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}

impl std::error::Error for Error {}
