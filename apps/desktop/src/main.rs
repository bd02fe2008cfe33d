use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{
    fetch_examples, load_settings, DirectorySink, DownloadAction, ExamplesContent, ExamplesPanel,
    FormController, FormProfile, FormSnapshot, HttpReadingClient, ResultContent, UiText,
};
use shared::domain::PageKind;
use tracing_subscriber::EnvFilter;

/// Requests a horoscope or synastry reading from the reading server.
#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured server URL.
    #[arg(long)]
    server_url: Option<String>,
    /// Which reading page to emulate.
    #[arg(long)]
    page: Option<PageKind>,
    /// Form field as NAME=VALUE, e.g. --field hour=9. Repeatable.
    #[arg(long = "field", value_parser = parse_field)]
    fields: Vec<(String, String)>,
    /// Checkbox to tick, e.g. --check time_unknown or --check Quincunx. Repeatable.
    #[arg(long = "check")]
    checked: Vec<String>,
    /// Directory to save the reading into under the page's file name.
    #[arg(long)]
    output: Option<PathBuf>,
    /// List the published examples instead of submitting.
    #[arg(long)]
    examples: bool,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    if name.trim().is_empty() {
        return Err(format!("field name missing in '{raw}'"));
    }
    Ok((name.trim().to_string(), value.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings().context("failed to load client settings")?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(page) = args.page {
        settings.page = page;
    }
    let client = HttpReadingClient::new(&settings)?;
    let text = UiText::default();

    if args.examples {
        let mut panel = ExamplesPanel::new(&text);
        panel.apply(fetch_examples(&client).await, &text);
        println!("{}", panel.badge());
        match panel.content() {
            ExamplesContent::Cards(cards) => {
                for card in cards {
                    println!("\n> {}\n{}", card.user_message, card.body);
                }
            }
            ExamplesContent::Message(message) => println!("{message}"),
            ExamplesContent::Loading => {}
        }
        return Ok(());
    }

    let mut snapshot = FormSnapshot::new();
    for (name, value) in &args.fields {
        snapshot.set_value(name, value.as_str());
    }
    for name in &args.checked {
        snapshot.set_checked(name, true);
    }

    let profile = FormProfile::for_page(settings.page);
    let download = DownloadAction::new(profile.download_filename.clone());
    let mut controller = FormController::bind_page(profile, text);

    if controller.submit(&client, &snapshot).await.is_err() {
        let message = controller
            .elements()
            .error_box
            .as_ref()
            .map(|error_box| error_box.text().to_string())
            .unwrap_or_default();
        return Err(anyhow!(message));
    }

    if let Some(ResultContent::Preformatted(markdown)) = controller
        .elements()
        .result
        .as_ref()
        .map(|result| result.content())
    {
        println!("{markdown}");
    }

    if let (Some(dir), Some(button)) = (args.output, controller.elements().download_button.as_ref())
    {
        if let Some(path) = download.click(button, &mut DirectorySink::new(dir))? {
            eprintln!("saved {}", path.display());
        }
    }

    Ok(())
}
