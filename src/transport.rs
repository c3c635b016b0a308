//! 解析サービスへの送信
//!
//! `AnalysisTransport` がアップローダーとネットワークの境界。
//! 本番は `HttpTransport`（multipart/form-data で `POST /analyze`）。

use crate::config::Config;
use crate::error::{OctScanError, Result};
use crate::selected_file::SelectedFile;
use async_trait::async_trait;
use oct_scan_common::{AnalysisResult, HealthStatus, parse_analysis_response, parse_health_response};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

/// 画像を入れるフォームフィールド名
pub const IMAGE_FIELD: &str = "image";

/// 1枚の画像を解析サービスに送って結果を受け取る
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    analyze_url: String,
    health_url: String,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        crate::config::validate_endpoint(&config.endpoint)?;

        let timeout = config.timeout();
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| OctScanError::Config(format!("HTTPクライアントの初期化に失敗: {}", e)))?;

        Ok(Self {
            client,
            analyze_url: config.analyze_url(),
            health_url: config.health_url(),
            timeout,
        })
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OctScanError::Server { status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(|e| self.map_reqwest_error(e))?;
        Ok(parse_health_response(&body)?)
    }

    fn build_form(file: &SelectedFile) -> Result<Form> {
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.mime_type())
            .map_err(|_| OctScanError::InvalidType(file.mime_type().to_string()))?;
        Ok(Form::new().part(IMAGE_FIELD, part))
    }

    fn map_reqwest_error(&self, err: reqwest::Error) -> OctScanError {
        if err.is_timeout() {
            let secs = self.timeout.map(|t| t.as_secs()).unwrap_or_default();
            OctScanError::Timeout(secs)
        } else {
            OctScanError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl AnalysisTransport for HttpTransport {
    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult> {
        let form = Self::build_form(file)?;

        debug!(url = %self.analyze_url, file = %file.name(), size = file.size(), "解析リクエスト送信");

        let response = self
            .client
            .post(&self.analyze_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = %status, body = %body.lines().next().unwrap_or(""), "解析サービスがエラーを返しました");
            return Err(OctScanError::Server { status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(|e| self.map_reqwest_error(e))?;
        Ok(parse_analysis_response(&body)?)
    }
}
