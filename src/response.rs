// Normalized upload outcome and the per-provider response decoders.
//
// Every provider answers differently: AnonFiles and BayFiles return a JSON
// envelope with full and short URLs, Filebin returns a JSON list of links
// and Imagebin returns plain text with a `url:` line. The decoders below map
// each of these onto `UploadResult`.

use crate::error::{Result, UploadError};
use crate::provider::Provider;
use serde::{Deserialize, Serialize};

/// Marker preceding the uploaded image's URL in Imagebin's text response.
pub const IMAGEBIN_URL_MARKER: &str = "url:";

/// Where an uploaded file ended up. `status` is true only when a non-empty
/// `full_url` was recovered from the provider's response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadResult {
    pub status: bool,
    pub full_url: String,
    /// Empty when the provider hands out no short link.
    #[serde(default)]
    pub short_url: String,
}

impl UploadResult {
    fn from_urls(full_url: String, short_url: String) -> Self {
        UploadResult {
            status: !full_url.is_empty(),
            full_url,
            short_url,
        }
    }
}

/// AnonFiles/BayFiles response envelope.
#[derive(Deserialize, Debug)]
struct AnonFilesResponse {
    status: bool,
    #[serde(default)]
    data: Option<AnonFilesData>,
    #[serde(default)]
    error: Option<AnonFilesError>,
}

#[derive(Deserialize, Debug)]
struct AnonFilesData {
    file: AnonFilesFile,
}

#[derive(Deserialize, Debug)]
struct AnonFilesFile {
    url: AnonFilesUrl,
}

#[derive(Deserialize, Debug)]
struct AnonFilesUrl {
    #[serde(default)]
    full: String,
    #[serde(default)]
    short: String,
}

#[derive(Deserialize, Debug)]
struct AnonFilesError {
    #[serde(default)]
    message: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    code: i64,
}

#[derive(Deserialize, Debug)]
struct FilebinResponse {
    links: Vec<FilebinLink>,
}

#[derive(Deserialize, Debug)]
struct FilebinLink {
    #[serde(default)]
    href: String,
}

/// Decode an AnonFiles-style JSON body (also used by BayFiles).
pub fn parse_anonfiles(provider: Provider, body: &str) -> Result<UploadResult> {
    let resp: AnonFilesResponse = serde_json::from_str(body)
        .map_err(|e| UploadError::decode(provider, e.to_string()))?;

    if !resp.status {
        match resp.error {
            Some(err) => log::warn!(
                "{} rejected the upload: {} ({}, code {})",
                provider,
                err.message,
                err.kind,
                err.code
            ),
            None => log::warn!("{} rejected the upload without an error message", provider),
        }
        return Ok(UploadResult::default());
    }

    let data = resp
        .data
        .ok_or_else(|| UploadError::decode(provider, "missing \"data\" in successful response"))?;
    Ok(UploadResult::from_urls(data.file.url.full, data.file.url.short))
}

/// Decode Filebin's link list. The uploaded file is the second link.
pub fn parse_filebin(body: &str) -> Result<UploadResult> {
    let resp: FilebinResponse = serde_json::from_str(body)
        .map_err(|e| UploadError::decode(Provider::Filebin, e.to_string()))?;

    let count = resp.links.len();
    let link = resp.links.into_iter().nth(1).ok_or_else(|| {
        UploadError::decode(
            Provider::Filebin,
            format!("expected at least 2 links, got {}", count),
        )
    })?;
    Ok(UploadResult::from_urls(link.href, String::new()))
}

/// Scrape Imagebin's plain-text body. No marker means no URL, which is a
/// valid outcome rather than an error.
pub fn parse_imagebin(body: &str) -> UploadResult {
    let url = string_after_last(body, IMAGEBIN_URL_MARKER).trim();
    UploadResult::from_urls(url.to_string(), String::new())
}

/// Everything after the last occurrence of `marker`, or "" when the marker is
/// missing or ends the text.
pub fn string_after_last<'a>(value: &'a str, marker: &str) -> &'a str {
    match value.rfind(marker) {
        Some(pos) => &value[pos + marker.len()..],
        None => "",
    }
}
