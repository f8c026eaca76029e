use std::fmt;

#[derive(Debug)]
pub enum Error {
    Fmt(::std::fmt::Error),
    Io(std::io::Error),
    General(String),
    InvalidSigma(f64),
    EmptyRange { begin: i32, end: i32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Fmt(ref e) => write!(f, "{}", e),
            Error::Io(ref e) => write!(f, "I/O error: {}", e),
            Error::General(ref s) => write!(f, "General Error: '{}'", s),
            Error::InvalidSigma(s) => write!(f, "Sigma must be finite and positive (got {})", s),
            Error::EmptyRange { begin, end } =>
                write!(f, "Empty coordinate range: {} > {}", begin, end),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            Error::Fmt(ref e) => Some(e),
            _ => None
        }
    }
}

impl From<std::fmt::Error> for Error {
    fn from(e: std::fmt::Error) -> Error {
        Error::Fmt(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;
