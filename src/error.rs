use thiserror::Error;

#[derive(Error, Debug)]
pub enum OctScanError {
    #[error("画像ファイルではありません: {0}（image/* のファイルを選択してください）")]
    InvalidType(String),

    #[error("ファイルが選択されていません。解析する画像を選択してください")]
    NoFileSelected,

    #[error("通信エラー: {0}")]
    Transport(String),

    #[error("タイムアウト: {0}秒以内にサーバーから応答がありませんでした")]
    Timeout(u64),

    #[error("サーバーエラー: ステータス {status} が返されました")]
    Server { status: u16 },

    #[error("レスポンスが不正です: {0}")]
    MalformedResponse(#[from] oct_scan_common::Error),

    #[error("新しいファイルが選択されたため結果を破棄しました")]
    Superseded,

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OctScanError>;
