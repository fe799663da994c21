use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A link URI was empty or only whitespace.
    BlankUri,
    /// The rendered value could not be used as an HTTP header value.
    InvalidHeaderValue(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Error::BlankUri => "URI cannot be blank",
            Error::InvalidHeaderValue(g) => g,
        };
        write!(f, "{}", text)
    }
}

impl std::error::Error for Error {}
