#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eyre::Result;

use carepath_desktop::{commands, config, state::DesktopState};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    );
    if std::env::var_os("CAREPATH_LOG_JSON").is_some() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = config::load_or_default()?;
    let state = DesktopState::from_config(config)?;

    let info = commands::get_config(&state);
    tracing::info!(
        region = %info.region,
        model = %info.model_id,
        data_dir = %info.data_dir,
        "carepath started"
    );

    let archive = commands::open_archive(&state, None).await;
    tracing::info!(entries = archive.entries.len(), "archive ready");
    if let Some(latest) = archive.selected {
        println!("{}\n{}", latest.title, latest.content);
    }

    Ok(())
}
