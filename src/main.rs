mod config;
mod error;
mod logging;
mod practicum;
mod telegram;
mod watcher;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use crate::config::Settings;
use crate::practicum::Client;
use crate::telegram::Notifier;
use crate::watcher::Watcher;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Practicum homework status watcher")]
struct Cli {
    #[arg(
        long,
        value_parser = reqwest::Url::parse,
        value_name = "URL",
        help = "Homework status endpoint",
        default_value_t = default_endpoint()
    )]
    endpoint: reqwest::Url,
    #[arg(
        long,
        value_name = "SECONDS",
        help = "Seconds to sleep between polls",
        default_value_t = 600
    )]
    interval: u64,
    #[arg(
        long,
        value_name = "PATH",
        help = "Append-only log file",
        default_value = "domashka.log"
    )]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let _log_guard = logging::init(&cli.log_file)?;

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!(error = %err, "Проблемы с переменными окружения");
            return Err(err);
        }
    };

    tracing::info!(endpoint = %cli.endpoint, interval = cli.interval, "Запуск бота");
    let api = Client::new(cli.endpoint, &settings.practicum_token)?;
    let notifier = Notifier::new(&settings.telegram_token, settings.chat.clone());
    let mut watcher = Watcher::new(api, notifier, Duration::from_secs(cli.interval));

    tokio::select! {
        _ = watcher.run() => {}
        result = tokio::signal::ctrl_c() => {
            result.context("failed to listen for the interrupt signal")?;
            println!("Выход из программы по команде Ctrl+C");
        }
    }
    Ok(())
}

fn default_endpoint() -> reqwest::Url {
    reqwest::Url::parse(practicum::ENDPOINT).expect("default endpoint must be a valid URL")
}
