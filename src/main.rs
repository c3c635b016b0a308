use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use oct_scan::{cli, config, logging, observer, render, HttpTransport, SelectedFile, Uploader};
use cli::{Cli, Commands};
use config::Config;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let color = !cli.no_color;

    match &cli.command {
        Commands::Analyze { image, json } => {
            let mut config = Config::load()?;
            cli.apply_overrides(&mut config)?;

            let transport = HttpTransport::new(&config)?;
            let uploader = Uploader::new(transport)
                .with_observer(Arc::new(observer::TracingObserver));

            let file = SelectedFile::from_path(image)?;
            if let Err(err) = uploader.select_file(file) {
                eprintln!("{}", render::render_failure(&err.to_string(), color));
                return Ok(ExitCode::FAILURE);
            }

            if let Some(file) = uploader.selected_file() {
                if !json {
                    println!("🩺 oct-scan - OCTスキャン解析\n");
                    println!("選択: {}", file.summary());
                }
            }
            if cli.verbose {
                if let Some(preview) = uploader.wait_for_preview().await {
                    tracing::debug!(len = preview.len(), "プレビュー生成済み");
                }
            }

            let progress = (!json).then(|| spinner("解析中..."));
            let outcome = uploader.submit().await;
            if let Some(progress) = progress {
                progress.finish_and_clear();
            }

            match outcome {
                Ok(result) => {
                    if *json {
                        println!("{}", serde_json::to_string_pretty(&result)?);
                    } else {
                        println!("{}\n", render::render_result(&result, color));
                        println!("✅ 解析完了");
                    }
                }
                Err(err) => {
                    eprintln!("{}", render::render_failure(&err.to_string(), color));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Commands::Health => {
            let mut config = Config::load()?;
            cli.apply_overrides(&mut config)?;

            let transport = HttpTransport::new(&config)?;
            match transport.health().await {
                Ok(status) if status.is_ok() => {
                    println!("✔ 解析サービス稼働中: {}", config.endpoint);
                }
                Ok(status) => {
                    eprintln!("⚠ 解析サービスの状態: {}", status.status);
                    return Ok(ExitCode::FAILURE);
                }
                Err(err) => {
                    eprintln!("{}", render::render_failure(&err.to_string(), color));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let path = Config::config_path()?;
            let mut config = Config::load_from(&path)?;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint.clone())?;
                config.save_to(&path)?;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(*seconds);
                config.save_to(&path)?;
                println!("✔ タイムアウトを設定しました");
            }

            if *show || (set_endpoint.is_none() && set_timeout.is_none()) {
                println!("設定:");
                println!("  ファイル: {}", path.display());
                println!("  エンドポイント: {}", config.endpoint);
                match config.timeout_seconds {
                    Some(seconds) => println!("  タイムアウト: {}秒", seconds),
                    None => println!("  タイムアウト: なし"),
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
