use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// デフォルトのログフィルタ（`RUST_LOG` が優先）
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "oct_scan=debug,oct_scan_common=debug"
    } else {
        "oct_scan=info"
    }
}

/// tracingを初期化する
///
/// 標準出力は解析結果専用にするため、ログは標準エラーに出す。
pub fn init_tracing(verbose: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(verbose).into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
