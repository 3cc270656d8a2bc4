//! Vita - a terminal academic profile viewer.
//!
//! # Usage
//!
//! ```bash
//! vita
//! vita --theme dark
//! vita --tab research
//! ```

use anyhow::{Context, Result};
use clap::Parser;

use vita::app::App;
use vita::config::{
    ConfigFlags, StartTab, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};

/// A terminal academic profile viewer
#[derive(Parser, Debug)]
#[command(name = "vita", version, about, long_about = None)]
struct Cli {
    /// Theme shown at launch (light or dark)
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Tab shown at launch
    #[arg(long, value_enum)]
    tab: Option<StartTab>,

    /// Disable mouse capture (keyboard only)
    #[arg(long)]
    no_mouse: bool,

    /// Save current command-line flags as defaults in the config file
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let app = App::new()
        .with_theme(effective.theme.unwrap_or(ThemeMode::Light))
        .with_start_tab(effective.tab.unwrap_or(StartTab::Home))
        .with_mouse_enabled(!effective.no_mouse)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
