//! MIMEタイプ判定
//!
//! 宣言されたMIMEタイプの接頭辞だけを見る。中身のバイト列は検査しない。

use std::path::Path;

/// 画像拡張子とMIMEタイプの対応表
const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

/// 不明な拡張子に割り当てるMIMEタイプ
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// MIMEタイプが `image/` で始まるか
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// ファイル拡張子からMIMEタイプを決める
pub fn mime_from_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension() else {
        return FALLBACK_MIME;
    };
    let ext = ext.to_string_lossy().to_lowercase();

    IMAGE_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_MIME)
}

/// バイト数をKB表示用に丸める
pub fn size_in_kb(size: u64) -> u64 {
    (size + 512) / 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/jpeg"));
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime("IMAGE/PNG"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn test_mime_from_path() {
        assert_eq!(mime_from_path(Path::new("scan.jpg")), "image/jpeg");
        assert_eq!(mime_from_path(Path::new("scan.JPEG")), "image/jpeg");
        assert_eq!(mime_from_path(Path::new("dir/scan.png")), "image/png");
        assert_eq!(mime_from_path(Path::new("scan.tif")), "image/tiff");
        assert_eq!(mime_from_path(Path::new("notes.txt")), FALLBACK_MIME);
        assert_eq!(mime_from_path(Path::new("README")), FALLBACK_MIME);
    }

    #[test]
    fn test_size_in_kb() {
        assert_eq!(size_in_kb(0), 0);
        assert_eq!(size_in_kb(511), 0);
        assert_eq!(size_in_kb(512), 1);
        assert_eq!(size_in_kb(1024), 1);
        assert_eq!(size_in_kb(150 * 1024), 150);
    }
}
