//! 解析の成否の通知
//!
//! 画面上のトースト表示に相当する。ヘッドレスでは `TracingObserver` でログに流すか、
//! `NoopObserver` で捨てる。

use crate::error::OctScanError;
use oct_scan_common::AnalysisResult;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// 利用者向けの通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn analysis_complete(result: &AnalysisResult) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "解析完了".into(),
            description: format!("検出: {}", result.disease),
        }
    }

    pub fn analysis_failed(err: &OctScanError) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "解析失敗".into(),
            description: err.to_string(),
        }
    }

    /// 選択・送信前の検証で弾かれたとき
    pub fn rejected(err: &OctScanError) -> Self {
        let (level, title) = match err {
            OctScanError::InvalidType(_) => (NoticeLevel::Error, "ファイル形式が不正です"),
            OctScanError::NoFileSelected => (NoticeLevel::Warning, "ファイル未選択"),
            _ => (NoticeLevel::Error, "操作できません"),
        };
        Self {
            level,
            title: title.into(),
            description: err.to_string(),
        }
    }
}

pub trait AnalysisObserver: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// 通知を捨てる
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {
    fn notify(&self, _notice: &Notice) {}
}

/// 通知を `tracing` のイベントとして出す
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl AnalysisObserver for TracingObserver {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => info!(title = %notice.title, "{}", notice.description),
            NoticeLevel::Warning => warn!(title = %notice.title, "{}", notice.description),
            NoticeLevel::Error => error!(title = %notice.title, "{}", notice.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_complete_notice() {
        let result = AnalysisResult {
            disease: "DME".into(),
            is_oct_scan: Some(true),
            explanation: String::new(),
        };
        let notice = Notice::analysis_complete(&result);
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.description, "検出: DME");
    }

    #[test]
    fn test_analysis_failed_notice_carries_message() {
        let notice = Notice::analysis_failed(&OctScanError::Server { status: 502 });
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.description.contains("502"));
    }

    #[test]
    fn test_rejected_notice_levels() {
        let notice = Notice::rejected(&OctScanError::NoFileSelected);
        assert_eq!(notice.level, NoticeLevel::Warning);

        let notice = Notice::rejected(&OctScanError::InvalidType("text/plain".into()));
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.description.contains("text/plain"));
    }
}
