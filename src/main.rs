use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod dictionary;
mod domain;
mod error;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use error::SyncError;
pub use services::export::default_export_dir;
pub use services::output::{notice, print_json, print_one, print_out};
pub use services::picker::{ArgPicker, FilePicker, PromptPicker};
pub use services::storage::{config_dir, load_history, load_settings, record, save_settings};
pub use services::sync::{preview, run_sync};
pub use services::vault::Vault;
pub use std::path::PathBuf;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("CDSYNC_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut settings = load_settings()?;

    if handle_settings_commands(&cli, &mut settings)? {
        return Ok(());
    }
    if handle_history(&cli)? {
        return Ok(());
    }
    if handle_runtime_commands(&cli, &settings)? {
        return Ok(());
    }

    Ok(())
}
