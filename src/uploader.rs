//! アップローダー（状態コンテナ）
//!
//! 選択中のファイル、プレビュー、リクエスト状態を1つのセッションにまとめて保持する。
//! 状態の書き込みはすべてセッションのMutexを通す。送信ごとに単調増加のトークンを発行し、
//! 応答のトークンが最新でなければ状態に反映しない。

use crate::error::{OctScanError, Result};
use crate::observer::{AnalysisObserver, Notice, NoopObserver};
use crate::selected_file::SelectedFile;
use crate::transport::AnalysisTransport;
use oct_scan_common::AnalysisResult;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info};

/// リクエスト状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded(AnalysisResult),
    Failed(String),
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }
}

struct Session {
    file: Option<SelectedFile>,
    preview: Arc<watch::Sender<Option<String>>>,
    state: RequestState,
    /// 最後に発行したリクエストトークン（ファイル選択でも進める）
    latest_token: u64,
}

impl Default for Session {
    fn default() -> Self {
        let (preview, _) = watch::channel(None);
        Self {
            file: None,
            preview: Arc::new(preview),
            state: RequestState::Idle,
            latest_token: 0,
        }
    }
}

/// 画像1枚を解析サービスに送るアップローダー
///
/// クローンは同じセッションを共有する。
#[derive(Clone)]
pub struct Uploader {
    session: Arc<Mutex<Session>>,
    transport: Arc<dyn AnalysisTransport>,
    observer: Arc<dyn AnalysisObserver>,
}

impl Uploader {
    pub fn new(transport: impl AnalysisTransport + 'static) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::default())),
            transport: Arc::new(transport),
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn AnalysisObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// ファイルを選択する
    ///
    /// MIMEタイプが `image/` で始まらなければ `InvalidType` を返し、状態は変えない。
    /// 成功時は前回の結果・エラーを消して `Idle` に戻し、実行中のリクエストの応答を無効にする。
    /// プレビューはランタイム上で非同期に生成する。
    pub fn select_file(&self, file: SelectedFile) -> Result<()> {
        if !file.is_image() {
            let err = OctScanError::InvalidType(file.mime_type().to_string());
            self.observer.notify(&Notice::rejected(&err));
            return Err(err);
        }

        let (preview, _) = watch::channel(None);
        let preview = Arc::new(preview);
        {
            let mut session = self.lock();
            session.latest_token += 1;
            session.file = Some(file.clone());
            session.preview = Arc::clone(&preview);
            session.state = RequestState::Idle;
        }

        debug!(file = %file.summary(), "ファイルを選択");
        spawn_preview(file, preview);
        Ok(())
    }

    /// 選択中のファイルを解析サービスに送信する
    ///
    /// ファイル未選択、またはリクエスト実行中なら `NoFileSelected` を返し、送信しない。
    /// 応答が届く前に別のファイルが選択された場合は `Superseded` を返し、状態は変えない。
    pub async fn submit(&self) -> Result<AnalysisResult> {
        let submission = {
            let mut session = self.lock();
            let file = match &session.file {
                Some(file) if !session.state.is_in_flight() => Some(file.clone()),
                _ => None,
            };
            file.map(|file| {
                session.latest_token += 1;
                session.state = RequestState::InFlight;
                (file, session.latest_token)
            })
        };

        let Some((file, token)) = submission else {
            let err = OctScanError::NoFileSelected;
            self.observer.notify(&Notice::rejected(&err));
            return Err(err);
        };

        info!(file = %file.summary(), token, "解析中...");
        let mut in_flight = InFlightGuard {
            session: &self.session,
            token,
            armed: true,
        };
        let outcome = self.transport.analyze(&file).await;
        in_flight.armed = false;

        let mut session = self.lock();
        if session.latest_token != token {
            debug!(token, latest = session.latest_token, "古い応答を破棄");
            return Err(OctScanError::Superseded);
        }

        match outcome {
            Ok(result) => {
                session.state = RequestState::Succeeded(result.clone());
                drop(session);
                self.observer.notify(&Notice::analysis_complete(&result));
                Ok(result)
            }
            Err(err) => {
                session.state = RequestState::Failed(err.to_string());
                drop(session);
                self.observer.notify(&Notice::analysis_failed(&err));
                Err(err)
            }
        }
    }

    pub fn state(&self) -> RequestState {
        self.lock().state.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().state.is_in_flight()
    }

    pub fn selected_file(&self) -> Option<SelectedFile> {
        self.lock().file.clone()
    }

    pub fn result(&self) -> Option<AnalysisResult> {
        match &self.lock().state {
            RequestState::Succeeded(result) => Some(result.clone()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.lock().state {
            RequestState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// 生成済みのプレビュー（未生成ならNone）
    pub fn preview(&self) -> Option<String> {
        self.lock().preview.borrow().clone()
    }

    /// 選択中ファイルのプレビュー生成を待つ
    ///
    /// ファイル未選択、または待っている間に別のファイルが選択された場合はNone。
    pub async fn wait_for_preview(&self) -> Option<String> {
        let sender = {
            let session = self.lock();
            session.file.as_ref()?;
            Arc::clone(&session.preview)
        };
        let mut rx = sender.subscribe();

        let preview = rx.wait_for(Option::is_some).await.ok()?.clone();
        if self.is_current_preview(&sender) {
            preview
        } else {
            None
        }
    }

    fn is_current_preview(&self, sender: &Arc<watch::Sender<Option<String>>>) -> bool {
        Arc::ptr_eq(&self.lock().preview, sender)
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// 応答を反映する前に `submit` のFutureが破棄されたら `InFlight` を `Idle` に戻す
struct InFlightGuard<'a> {
    session: &'a Mutex<Session>,
    token: u64,
    armed: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        if session.latest_token == self.token && session.state.is_in_flight() {
            debug!(token = self.token, "応答を待たずに送信が中断されました");
            session.state = RequestState::Idle;
        }
    }
}

/// ランタイムがあれば別スレッドで、なければその場でプレビューを作る
fn spawn_preview(file: SelectedFile, preview: Arc<watch::Sender<Option<String>>>) {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn_blocking(move || {
                preview.send_replace(Some(file.preview_data_url()));
            });
        }
        Err(_) => {
            preview.send_replace(Some(file.preview_data_url()));
        }
    }
}
