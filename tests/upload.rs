// Drives the public API end to end with a transport that never touches the
// network.

use particeps::{
    check_file, FilePayload, Provider, Result, Transport, UploadError, UploadResult, Uploader,
    UploaderConfig,
};
use reqwest::header::HeaderMap;
use std::cell::RefCell;
use std::io::{Read, Write};

struct CannedTransport {
    body: &'static str,
    received: RefCell<Vec<(String, Vec<u8>)>>,
}

impl CannedTransport {
    fn new(body: &'static str) -> Self {
        CannedTransport {
            body,
            received: RefCell::new(Vec::new()),
        }
    }

    fn take(&self, url: &str, mut payload: FilePayload) -> Result<String> {
        let mut bytes = Vec::new();
        payload.file.read_to_end(&mut bytes).unwrap();
        self.received.borrow_mut().push((url.to_string(), bytes));
        Ok(self.body.to_string())
    }
}

impl Transport for CannedTransport {
    fn post_multipart(&self, url: &str, _field: &str, payload: FilePayload) -> Result<String> {
        self.take(url, payload)
    }

    fn post_raw(&self, url: &str, _headers: HeaderMap, payload: FilePayload) -> Result<String> {
        self.take(url, payload)
    }
}

fn sample_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"hello, world").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn uploads_to_imagebin_and_scrapes_url() {
    let file = sample_file();
    let transport = CannedTransport::new("...url:https://imagebin.ca/abc123");
    let uploader = Uploader::with_transport(transport, UploaderConfig::default());

    let result = uploader
        .upload("imagebin".parse::<Provider>().unwrap(), file.path())
        .unwrap();

    assert_eq!(
        result,
        UploadResult {
            status: true,
            full_url: "https://imagebin.ca/abc123".into(),
            short_url: String::new(),
        }
    );
}

#[test]
fn uploads_to_anonfiles_and_reports_both_urls() {
    let file = sample_file();
    let transport = CannedTransport::new(
        r#"{"status":true,"data":{"file":{"url":{"full":"https://anonfiles.com/x","short":"https://afiles.io/x"}}}}"#,
    );
    let uploader = Uploader::with_transport(transport, UploaderConfig::default());

    let result = uploader.upload(Provider::AnonFiles, file.path()).unwrap();

    assert!(result.status);
    assert_eq!(result.full_url, "https://anonfiles.com/x");
    assert_eq!(result.short_url, "https://afiles.io/x");
}

#[test]
fn rejects_malformed_filebin_response() {
    let file = sample_file();
    let transport = CannedTransport::new(r#"{"links":[]}"#);
    let uploader = Uploader::with_transport(transport, UploaderConfig::default());

    let err = uploader.upload(Provider::Filebin, file.path()).unwrap_err();
    assert!(matches!(err, UploadError::Decode { .. }));
}

#[test]
fn result_serializes_for_cli_output() {
    let result = UploadResult {
        status: true,
        full_url: "https://filebin.net/bin/a.txt".into(),
        short_url: String::new(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], true);
    assert_eq!(json["full_url"], "https://filebin.net/bin/a.txt");
}

#[test]
fn check_file_reports_size() {
    let file = sample_file();
    assert_eq!(check_file(file.path()).unwrap(), "12 B");
}
