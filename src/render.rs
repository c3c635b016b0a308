//! 解析結果のターミナル表示

use colored::{ColoredString, Colorize};
use oct_scan_common::{AnalysisResult, DiseaseCategory, ScanType};

/// 疾患ラベルのバッジ（区分ごとに色分け）
pub fn disease_badge(disease: &str, category: DiseaseCategory) -> ColoredString {
    let label = format!(" {} ", disease);
    let label = label.as_str().bold().on_color(category.color_name());
    match category {
        DiseaseCategory::Normal => label.black(),
        DiseaseCategory::Critical | DiseaseCategory::Neutral => label.white(),
    }
}

fn scan_type_line(scan_type: ScanType, color: bool) -> String {
    let (mark, label) = match scan_type {
        ScanType::Confirmed => ("✔", scan_type.label()),
        ScanType::NotOct => ("⚠", scan_type.label()),
    };
    let mark = match (color, scan_type) {
        (false, _) => mark.to_string(),
        (true, ScanType::Confirmed) => mark.green().to_string(),
        (true, ScanType::NotOct) => mark.yellow().to_string(),
    };
    format!("スキャン種別: {} {}", mark, label)
}

/// 解析結果を表示用の文字列にする
pub fn render_result(result: &AnalysisResult, color: bool) -> String {
    let category = result.category();
    let badge = if color {
        disease_badge(&result.disease, category).to_string()
    } else {
        format!("[{}]", result.disease)
    };

    let mut lines = vec![format!("検出された疾患: {}", badge)];
    if let Some(scan_type) = result.scan_type() {
        lines.push(scan_type_line(scan_type, color));
    }
    lines.push(String::new());
    lines.push("解析の説明:".to_string());
    lines.push(result.explanation.clone());

    lines.join("\n")
}

pub fn render_failure(message: &str, color: bool) -> String {
    if color {
        format!("{} {}", "⚠".red(), message.red())
    } else {
        format!("⚠ {}", message)
    }
}
