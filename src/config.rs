use crate::error::{ResumeMatchError, Result};
use resume_match_common::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 送信先を上書きする環境変数
pub const ENDPOINT_ENV: &str = "RESUME_MATCH_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ResumeMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("resume-match").join("config.json"))
    }

    /// 送信先を決定
    ///
    /// 優先順位: 引数 > 環境変数 > 設定ファイル
    pub fn resolve_endpoint(&self, cli_endpoint: Option<&str>) -> String {
        Self::pick_endpoint(
            cli_endpoint,
            std::env::var(ENDPOINT_ENV).ok().as_deref(),
            &self.endpoint,
        )
    }

    fn pick_endpoint(cli: Option<&str>, env: Option<&str>, file: &str) -> String {
        [cli, env]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(file)
            .to_string()
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ResumeMatchError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                endpoint
            )));
        }
        self.endpoint = endpoint;
        self.save()
    }

    /// リクエストのタイムアウト（0 はタイムアウトなし）
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }
}
