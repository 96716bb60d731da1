// Upload client: opens the local file, shapes the request each provider
// expects, sends it through a `Transport` and decodes the answer into an
// `UploadResult`. Calls are blocking and independent of each other.

use crate::config::UploaderConfig;
use crate::error::{Result, UploadError};
use crate::provider::Provider;
use crate::response::{self, UploadResult};
use crate::transport::{FilePayload, HttpTransport, Transport};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::fs::File;
use std::path::Path;

/// Name of the form field every multipart provider reads the file from.
pub const FILE_FIELD: &str = "file";

/// Header Filebin takes the stored file name from.
pub const FILENAME_HEADER: &str = "filename";

/// Content type Filebin uploads are sent with. It does not describe the
/// binary body, but it is what the service has always been sent.
pub const FILEBIN_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Upload client holding the endpoint table and the transport used to reach
/// it.
#[derive(Clone)]
pub struct Uploader<T: Transport = HttpTransport> {
    transport: T,
    config: UploaderConfig,
}

impl Uploader<HttpTransport> {
    /// Create an Uploader configured from the `PARTICEPS_*` environment
    /// variables, see `UploaderConfig::from_env`.
    pub fn from_env() -> Result<Self> {
        Self::new(UploaderConfig::from_env())
    }

    pub fn new(config: UploaderConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Uploader { transport, config })
    }
}

impl<T: Transport> Uploader<T> {
    pub fn with_transport(transport: T, config: UploaderConfig) -> Self {
        Uploader { transport, config }
    }

    pub fn config(&self) -> &UploaderConfig {
        &self.config
    }

    /// Upload `path` to `provider`.
    pub fn upload(&self, provider: Provider, path: impl AsRef<Path>) -> Result<UploadResult> {
        let path = path.as_ref();
        match provider {
            Provider::Imagebin => self.imagebin_upload(path),
            Provider::AnonFiles => self.anonfiles_upload(path),
            Provider::BayFiles => self.bayfiles_upload(path),
            Provider::Filebin => self.filebin_upload(path),
        }
    }

    /// Upload an image to imagebin.ca. Imagebin answers in plain text; a
    /// response without a `url:` line gives `status == false`.
    pub fn imagebin_upload(&self, path: impl AsRef<Path>) -> Result<UploadResult> {
        let payload = open_payload(path.as_ref())?;
        let url = self.config.endpoint(Provider::Imagebin);
        let body = self.transport.post_multipart(url, FILE_FIELD, payload)?;
        Ok(response::parse_imagebin(&body))
    }

    pub fn anonfiles_upload(&self, path: impl AsRef<Path>) -> Result<UploadResult> {
        self.upload_multipart_json(Provider::AnonFiles, path.as_ref())
    }

    pub fn bayfiles_upload(&self, path: impl AsRef<Path>) -> Result<UploadResult> {
        self.upload_multipart_json(Provider::BayFiles, path.as_ref())
    }

    /// Upload a file to filebin.net. The bytes go out as the raw body with
    /// the base name in a `Filename` header.
    pub fn filebin_upload(&self, path: impl AsRef<Path>) -> Result<UploadResult> {
        let path = path.as_ref();
        let payload = open_payload(path)?;

        let mut headers = HeaderMap::new();
        let file_name = HeaderValue::from_str(&payload.file_name)
            .map_err(|_| UploadError::InvalidFileName {
                path: path.to_path_buf(),
            })?;
        headers.insert(HeaderName::from_static(FILENAME_HEADER), file_name);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FILEBIN_CONTENT_TYPE));

        let url = self.config.endpoint(Provider::Filebin);
        let body = self.transport.post_raw(url, headers, payload)?;
        response::parse_filebin(&body)
    }

    // AnonFiles and BayFiles run the same API; only the endpoint differs.
    fn upload_multipart_json(&self, provider: Provider, path: &Path) -> Result<UploadResult> {
        let payload = open_payload(path)?;
        let url = self.config.endpoint(provider);
        let body = self.transport.post_multipart(url, FILE_FIELD, payload)?;
        response::parse_anonfiles(provider, &body)
    }
}

fn open_payload(path: &Path) -> Result<FilePayload> {
    let open_err = |source: std::io::Error| UploadError::FileOpen {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_err)?;
    let metadata = file.metadata().map_err(open_err)?;
    // Directories open fine on unix but fail on the first read.
    if !metadata.is_file() {
        return Err(open_err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    let len = metadata.len();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(FilePayload {
        file,
        file_name,
        len,
    })
}
