//! エラー型定義

use thiserror::Error;

/// レスポンス本文を解析結果として読めなかった
#[derive(Error, Debug)]
pub enum Error {
    #[error("{context}: {source}")]
    Parse {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_has_context_and_cause() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::Parse { context: "解析結果JSONパースエラー", source };

        let display = format!("{}", error);
        assert!(display.starts_with("解析結果JSONパースエラー: "));
        assert!(display.contains("EOF"));
    }

    #[test]
    fn test_parse_error_exposes_source() {
        use std::error::Error as _;

        let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let error = Error::Parse { context: "ヘルスチェックJSONパースエラー", source };
        assert!(error.source().is_some());
    }
}
