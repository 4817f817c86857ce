mod builder;
mod config;
mod errors;
mod importer;
mod languages;
mod models;
mod output;
mod validate;
mod youtube;

#[cfg(test)]
mod testing;

use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use config::{ChannelConfig, LogFormat, Settings};
use errors::ChefError;
use youtube::YouTubeClient;

fn init_tracing(format: LogFormat) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer).with_target(false))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init(),
    }

    guard
}

async fn run(settings: Settings) -> Result<(), ChefError> {
    let client = YouTubeClient::new(reqwest::Client::new(), settings.api_key);
    let config = ChannelConfig::al_riyadiyat();

    let channel = builder::build_channel(&client, &config).await?;
    output::write_channel(&channel, settings.output_path.as_deref())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", ChefError::from(e));
            return ExitCode::FAILURE;
        }
    };

    let _guard = init_tracing(settings.log_format);

    match run(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
