//! OCT Scan Common Library
//!
//! CLIと各フロントエンドで共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod mime;
pub mod parser;

pub use types::{AnalysisResult, DiseaseCategory, HealthStatus, ScanType, categorize};
pub use error::{Error, Result};
pub use mime::{is_image_mime, mime_from_path, size_in_kb};
pub use parser::{parse_analysis_response, parse_health_response};
