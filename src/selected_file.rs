//! 選択された画像ファイル
//!
//! セッションが保持する間だけ存在し、ディスクには保存しない。

use crate::error::{OctScanError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use oct_scan_common::{is_image_mime, mime_from_path, size_in_kb};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SelectedFile {
    name: String,
    mime_type: String,
    bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: Arc::from(bytes.into()),
        }
    }

    /// ディスク上のファイルを読み込む（MIMEタイプは拡張子から決める）
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(OctScanError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self::new(name, mime_from_path(path), bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }

    /// "scan.jpg (150 KB)" 形式の表示
    pub fn summary(&self) -> String {
        format!("{} ({} KB)", self.name, size_in_kb(self.size()))
    }

    /// プレビュー用のData URL
    pub fn preview_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_file() {
        let file = SelectedFile::new("scan.png", "image/png", vec![1u8, 2, 3]);
        assert_eq!(file.name(), "scan.png");
        assert_eq!(file.size(), 3);
        assert!(file.is_image());
    }

    #[test]
    fn test_non_image_file() {
        let file = SelectedFile::new("report.pdf", "application/pdf", b"%PDF".to_vec());
        assert!(!file.is_image());
    }

    #[test]
    fn test_preview_data_url() {
        let file = SelectedFile::new("a.png", "image/png", b"abc".to_vec());
        assert_eq!(file.preview_data_url(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_summary() {
        let file = SelectedFile::new("scan.jpg", "image/jpeg", vec![0u8; 150 * 1024]);
        assert_eq!(file.summary(), "scan.jpg (150 KB)");
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("retina.JPG");
        std::fs::write(&path, b"jpeg bytes").unwrap();

        let file = SelectedFile::from_path(&path).unwrap();
        assert_eq!(file.name(), "retina.JPG");
        assert_eq!(file.mime_type(), "image/jpeg");
        assert_eq!(file.bytes(), b"jpeg bytes");
    }

    #[test]
    fn test_from_path_missing() {
        let err = SelectedFile::from_path(Path::new("/nonexistent/scan.png")).unwrap_err();
        assert!(matches!(err, OctScanError::FileNotFound(_)));
    }
}
