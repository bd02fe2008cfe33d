mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{load_settings, ClientSettings};
use crossbeam_channel::bounded;
use eframe::egui;
use shared::domain::PageKind;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::events::UiEvent;
use crate::ui::ReadingApp;

/// Desktop form for horoscope and synastry readings.
#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured server URL.
    #[arg(long)]
    server_url: Option<String>,
    /// Which reading page to open.
    #[arg(long)]
    page: Option<PageKind>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = load_settings().unwrap_or_else(|err| {
        tracing::error!("failed to load client settings, using defaults: {err:#}");
        ClientSettings::default()
    });
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(page) = args.page {
        settings.page = page;
    }
    let page = settings.page;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    runtime::launch(settings, cmd_rx, ui_tx);

    let title = format!("Reading Client - {page}");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.as_str())
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ReadingApp::new(cmd_tx, ui_rx, page)))),
    )
}
