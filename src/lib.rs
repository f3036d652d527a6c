//! resume-match: 履歴書・求人票のアップロードクライアント

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod upload;
