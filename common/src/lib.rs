//! Resume Match Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod parser;
pub mod form;

pub use types::{MatchRecord, UploadResponse};
pub use error::{Error, Result};
pub use parser::parse_upload_response;
pub use form::{MatchForm, DEFAULT_ENDPOINT, JOB_DESCRIPTION_FIELD, RESUMES_FIELD};
