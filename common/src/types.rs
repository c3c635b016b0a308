//! 解析結果の型定義
//!
//! 解析サービスとの間でやり取りされる型:
//! - AnalysisResult: `POST /analyze` の成功レスポンス
//! - HealthStatus: `GET /health` のレスポンス
//! - DiseaseCategory / ScanType: 表示用の分類

use serde::{Deserialize, Serialize};

/// AI解析結果
///
/// `disease` と `explanation` は必須。欠けている場合はデシリアライズに失敗する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 疾患ラベル（NORMAL / DME / AMD など）
    pub disease: String,

    /// OCTスキャン画像かどうか（サーバーが省略することがある）
    #[serde(rename = "isOCTScan", default, skip_serializing_if = "Option::is_none")]
    pub is_oct_scan: Option<bool>,

    /// 判定理由
    pub explanation: String,
}

impl AnalysisResult {
    /// 疾患ラベルの表示区分
    pub fn category(&self) -> DiseaseCategory {
        categorize(&self.disease)
    }

    /// スキャン種別（`isOCTScan` がない場合はNone）
    pub fn scan_type(&self) -> Option<ScanType> {
        self.is_oct_scan.map(ScanType::from)
    }
}

/// 疾患ラベルの表示区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiseaseCategory {
    /// 正常
    Normal,
    /// 要注意（DME / AMD）
    Critical,
    /// その他のラベル
    Neutral,
}

impl DiseaseCategory {
    /// バッジ色の名前
    pub fn color_name(&self) -> &'static str {
        match self {
            DiseaseCategory::Normal => "green",
            DiseaseCategory::Critical => "red",
            DiseaseCategory::Neutral => "purple",
        }
    }
}

/// 疾患ラベルを表示区分に変換
///
/// 大文字小文字は区別しない。どんな文字列でも必ずいずれかの区分になる。
///
/// # Examples
/// ```
/// use oct_scan_common::{categorize, DiseaseCategory};
///
/// assert_eq!(categorize("NORMAL"), DiseaseCategory::Normal);
/// assert_eq!(categorize("amd"), DiseaseCategory::Critical);
/// assert_eq!(categorize("CNV"), DiseaseCategory::Neutral);
/// ```
pub fn categorize(disease: &str) -> DiseaseCategory {
    match disease.to_uppercase().as_str() {
        "NORMAL" => DiseaseCategory::Normal,
        "DME" | "AMD" => DiseaseCategory::Critical,
        _ => DiseaseCategory::Neutral,
    }
}

/// スキャン種別の確認結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanType {
    /// OCTスキャンと確認された
    Confirmed,
    /// OCTスキャンではない
    NotOct,
}

impl ScanType {
    pub fn label(&self) -> &'static str {
        match self {
            ScanType::Confirmed => "OCTスキャン確認済み",
            ScanType::NotOct => "OCTスキャンではありません",
        }
    }
}

impl From<bool> for ScanType {
    fn from(is_oct_scan: bool) -> Self {
        if is_oct_scan {
            ScanType::Confirmed
        } else {
            ScanType::NotOct
        }
    }
}

/// ヘルスチェック結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
