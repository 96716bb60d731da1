// Error types returned by the upload library.
//
// A response that decodes fine but carries no URL is not an error: it comes
// back as an `UploadResult` with `status == false`.

use crate::provider::Provider;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, UploadError>;

#[derive(Error, Debug)]
pub enum UploadError {
    /// The path could not be stat'ed
    #[error("could not find file \"{}\"", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path exists but could not be opened for reading
    #[error("could not open file \"{}\": {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The base name cannot be sent in a request header
    #[error("file name of \"{}\" cannot be sent as a header value", path.display())]
    InvalidFileName { path: PathBuf },

    /// Connection or transport failure while sending the request
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read in full
    #[error("could not read response body: {source}")]
    ResponseRead {
        #[source]
        source: reqwest::Error,
    },

    /// The response did not have the shape the provider documents
    #[error("unexpected {provider} response: {message}")]
    Decode { provider: Provider, message: String },

    #[error("unknown provider \"{0}\" (expected one of: imagebin, anonfiles, bayfiles, filebin)")]
    UnknownProvider(String),

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl UploadError {
    pub fn decode(provider: Provider, message: impl Into<String>) -> Self {
        UploadError::Decode {
            provider,
            message: message.into(),
        }
    }
}
