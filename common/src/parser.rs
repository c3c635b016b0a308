//! APIレスポンスパーサー
//!
//! 解析サービスのレスポンス本文をパースする。
//! 2xxでも必須フィールドが欠けていればエラーにする。

use crate::error::{Error, Result};
use crate::types::{AnalysisResult, HealthStatus};

/// `POST /analyze` のレスポンス本文をパース
///
/// # Arguments
/// * `body` - レスポンス本文
///
/// # Returns
/// * `Ok(AnalysisResult)` - パース成功
/// * `Err(Error::Parse)` - JSONとして不正、または必須フィールドが欠けている
///
/// # Examples
/// ```
/// use oct_scan_common::parse_analysis_response;
///
/// let body = br#"{"disease":"AMD","isOCTScan":true,"explanation":"drusen"}"#;
/// let result = parse_analysis_response(body).unwrap();
/// assert_eq!(result.disease, "AMD");
/// ```
pub fn parse_analysis_response(body: &[u8]) -> Result<AnalysisResult> {
    serde_json::from_slice(body).map_err(|source| Error::Parse {
        context: "解析結果JSONパースエラー",
        source,
    })
}

/// `GET /health` のレスポンス本文をパース
pub fn parse_health_response(body: &[u8]) -> Result<HealthStatus> {
    serde_json::from_slice(body).map_err(|source| Error::Parse {
        context: "ヘルスチェックJSONパースエラー",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analysis_response() {
        let body = br#"{"disease":"NORMAL","isOCTScan":true,"explanation":"no fluid"}"#;
        let result = parse_analysis_response(body).unwrap();

        assert_eq!(result.disease, "NORMAL");
        assert_eq!(result.is_oct_scan, Some(true));
        assert_eq!(result.explanation, "no fluid");
    }

    #[test]
    fn test_parse_analysis_response_not_json() {
        let err = parse_analysis_response(b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_parse_analysis_response_missing_disease() {
        let err = parse_analysis_response(br#"{"explanation":"?"}"#).unwrap_err();
        assert!(err.to_string().contains("disease"));
    }

    #[test]
    fn test_parse_analysis_response_wrong_type() {
        let body = br#"{"disease":"DME","isOCTScan":"yes","explanation":""}"#;
        assert!(parse_analysis_response(body).is_err());
    }

    #[test]
    fn test_parse_analysis_response_array() {
        let body = br#"[{"disease":"DME","explanation":""}]"#;
        assert!(parse_analysis_response(body).is_err());
    }

    #[test]
    fn test_parse_health_response() {
        let status = parse_health_response(br#"{"status":"ok"}"#).unwrap();
        assert!(status.is_ok());
        assert!(parse_health_response(b"ok").is_err());
    }
}
