// Transport layer: the part of an upload that actually talks HTTP.
// `Uploader` builds the request pieces and hands them to a `Transport`;
// the default one is a thin wrapper around reqwest's blocking client.

use crate::config::UploaderConfig;
use crate::error::{Result, UploadError};
use reqwest::blocking::{multipart, Body, Client};
use reqwest::header::HeaderMap;
use std::fs::File;

/// An open file ready to be sent. The handle is consumed by the request and
/// closed when the request is done with it.
#[derive(Debug)]
pub struct FilePayload {
    pub file: File,
    /// Base name of the file on disk.
    pub file_name: String,
    pub len: u64,
}

/// Sends one upload request and returns the response body as text.
pub trait Transport {
    /// POST a multipart form with a single file part named `field`.
    fn post_multipart(&self, url: &str, field: &str, payload: FilePayload) -> Result<String>;

    /// POST the file bytes as the raw request body with the given headers.
    fn post_raw(&self, url: &str, headers: HeaderMap, payload: FilePayload) -> Result<String>;
}

/// Transport backed by a reqwest blocking client.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &UploaderConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(UploadError::Client)?;
        Ok(HttpTransport { client })
    }

    fn read_body(url: &str, res: reqwest::blocking::Response) -> Result<String> {
        // Non-2xx answers are handed to the parsers like any other body.
        log::debug!("{} answered {}", url, res.status());
        res.text()
            .map_err(|source| UploadError::ResponseRead { source })
    }
}

impl Transport for HttpTransport {
    fn post_multipart(&self, url: &str, field: &str, payload: FilePayload) -> Result<String> {
        log::debug!(
            "POST {} (multipart, {} bytes as \"{}\")",
            url,
            payload.len,
            payload.file_name
        );
        let part = multipart::Part::reader_with_length(payload.file, payload.len)
            .file_name(payload.file_name);
        let form = multipart::Form::new().part(field.to_string(), part);

        let res = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .map_err(|source| UploadError::Network {
                url: url.to_string(),
                source,
            })?;
        Self::read_body(url, res)
    }

    fn post_raw(&self, url: &str, headers: HeaderMap, payload: FilePayload) -> Result<String> {
        log::debug!(
            "POST {} (raw body, {} bytes as \"{}\")",
            url,
            payload.len,
            payload.file_name
        );
        let res = self
            .client
            .post(url)
            .headers(headers)
            .body(Body::sized(payload.file, payload.len))
            .send()
            .map_err(|source| UploadError::Network {
                url: url.to_string(),
                source,
            })?;
        Self::read_body(url, res)
    }
}
