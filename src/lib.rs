// Library root
// -----------
// Uploads a local file to a public file host and reports where it landed.
// The binary (`main.rs`) is a small CLI on top of these modules.
//
// Module responsibilities:
// - `client`: the `Uploader`, one entry point per provider plus `upload`
//   dispatching on `Provider`.
// - `transport`: the HTTP side of an upload (reqwest blocking client).
// - `response`: `UploadResult` and the per-provider response decoders.
// - `size`: file existence check and human-readable sizes.
// - `config`: endpoints and client settings, overridable from the env.
// - `ui`: interactive and one-shot CLI flows.
pub mod client;
pub mod config;
pub mod error;
pub mod provider;
pub mod response;
pub mod size;
pub mod transport;
pub mod ui;

pub use client::Uploader;
pub use config::UploaderConfig;
pub use error::{Result, UploadError};
pub use provider::Provider;
pub use response::UploadResult;
pub use size::check_file;
pub use transport::{FilePayload, HttpTransport, Transport};
