use crate::error::{OctScanError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 解析サービスのデフォルトURL
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "OCT_SCAN_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書きする
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        // 環境変数を優先
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint;
            }
        }

        Ok(config)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut config: Config = serde_json::from_str(&content)?;
            // 0秒はタイムアウトなし
            config.timeout_seconds = config.timeout_seconds.filter(|s| *s > 0);
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| OctScanError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("oct-scan").join("config.json"))
    }

    /// エンドポイントを検証して設定する
    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        validate_endpoint(&endpoint)?;
        self.endpoint = endpoint;
        Ok(())
    }

    /// 0秒はタイムアウトなしとして扱う
    pub fn set_timeout(&mut self, seconds: u64) {
        self.timeout_seconds = (seconds > 0).then_some(seconds);
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
    }

    /// `POST /analyze` のURL
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url())
    }

    /// `GET /health` のURL
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url())
    }

    fn base_url(&self) -> &str {
        self.endpoint.trim().trim_end_matches('/')
    }
}

pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(OctScanError::Config("エンドポイントが空です".into()));
    }
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(OctScanError::Config(format!(
            "エンドポイントは http:// または https:// で始めてください: {}",
            endpoint
        )));
    }
    Ok(())
}
