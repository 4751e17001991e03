use miette::Diagnostic;
use thiserror::Error;

/// Main error type for identicon operations.
///
/// Deriving, decoding and rendering never fail; only the collaborators
/// around them (files, configuration, PNG encoding, sockets) produce these.
#[derive(Error, Diagnostic, Debug)]
pub enum IdenticonError {
    #[error("IO error: {0}")]
    #[diagnostic(code(identicon::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(identicon::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(identicon::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(identicon::encode))]
    Encode { message: String },

    #[error("HTTP error: {message}")]
    #[diagnostic(code(identicon::http))]
    Http { message: String },
}

pub type Result<T> = std::result::Result<T, IdenticonError>;
