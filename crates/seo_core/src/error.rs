use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    #[error("A generation request is already in progress")]
    Busy,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint returned {status}: {body}")]
    Endpoint { status: u16, body: String },

    #[error("No response generated")]
    EmptyResponse,

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Short stable label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Configuration(_) => "configuration",
            Error::Validation(_) => "validation",
            Error::Busy => "busy",
            Error::Http(_) => "transport",
            Error::Endpoint { .. } => "endpoint",
            Error::EmptyResponse => "empty_response",
            Error::Parse(_) => "parse",
            Error::Shape(_) => "shape",
            Error::Io(_) => "io",
            Error::External(_) => "external",
        }
    }

    /// Transport, endpoint, empty-body, parse and shape failures all collapse
    /// into the same "try again" message for the user.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::Endpoint { .. }
                | Error::EmptyResponse
                | Error::Parse(_)
                | Error::Shape(_)
                | Error::External(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
