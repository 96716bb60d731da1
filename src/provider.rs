// Hosting services an upload can be sent to. Each variant picks the
// endpoint, the request shape and the response parser in `client`.

use crate::error::UploadError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// https://imagebin.ca/ - multipart upload, plain-text response
    Imagebin,
    /// https://anonfiles.com/ - multipart upload, JSON response
    AnonFiles,
    /// https://bayfiles.com/ - same API as AnonFiles
    BayFiles,
    /// https://filebin.net/ - raw body upload, JSON link list response
    Filebin,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::AnonFiles,
        Provider::BayFiles,
        Provider::Filebin,
        Provider::Imagebin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Imagebin => "Imagebin",
            Provider::AnonFiles => "AnonFiles",
            Provider::BayFiles => "BayFiles",
            Provider::Filebin => "Filebin",
        }
    }

    /// Endpoint the upload is POSTed to unless configuration overrides it.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Provider::Imagebin => "https://imagebin.ca/upload.php",
            Provider::AnonFiles => "https://api.anonfiles.com/upload",
            Provider::BayFiles => "https://api.bayfiles.com/upload",
            Provider::Filebin => "https://filebin.net",
        }
    }

    /// Suffix of the environment variable that overrides the endpoint.
    pub(crate) fn env_key(&self) -> &'static str {
        match self {
            Provider::Imagebin => "IMAGEBIN",
            Provider::AnonFiles => "ANONFILES",
            Provider::BayFiles => "BAYFILES",
            Provider::Filebin => "FILEBIN",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = UploadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UploadError::UnknownProvider(s.to_string()))
    }
}
