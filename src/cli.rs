use crate::config::Config;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oct-scan")]
#[command(about = "OCTスキャン画像をAI解析サービスに送信して疾患を判定", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 解析サービスのURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// リクエストのタイムアウト秒数（0でタイムアウトなし）
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// 色付けしない
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を解析サービスに送信して結果を表示
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 解析サービスの稼働状況を確認
    Health,

    /// 設定を表示/編集
    Config {
        /// エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定（0で無効）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Cli {
    /// コマンドライン引数で設定を上書き
    pub fn apply_overrides(&self, config: &mut Config) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            config.set_endpoint(endpoint.clone())?;
        }
        if let Some(timeout) = self.timeout {
            config.set_timeout(timeout);
        }
        Ok(())
    }
}
