//! OCTスキャン解析クライアント
//!
//! 画像1枚を選択し、解析サービスに multipart/form-data で送信して
//! 疾患ラベル・スキャン種別・説明を受け取る。

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod observer;
pub mod render;
pub mod selected_file;
pub mod transport;
pub mod uploader;

pub use oct_scan_common::{AnalysisResult, DiseaseCategory, ScanType, categorize};
pub use error::{OctScanError, Result};
pub use selected_file::SelectedFile;
pub use transport::{AnalysisTransport, HttpTransport};
pub use uploader::{RequestState, Uploader};
