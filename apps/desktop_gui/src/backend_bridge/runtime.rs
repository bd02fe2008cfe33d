//! Backend worker: owns the tokio runtime and the HTTP client, answers UI
//! commands with UI events.

use std::{sync::Arc, thread};

use client_core::{fetch_examples, fetch_reading, ClientSettings, HttpReadingClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        let client = match HttpReadingClient::new(&settings) {
            Ok(client) => Arc::new(client),
            Err(err) => {
                tracing::error!("failed to build reading client: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };
        tracing::info!(url = %client.generate_url(), "backend worker ready");

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                match cmd {
                    BackendCommand::Generate { input } => {
                        tokio::spawn(async move {
                            let outcome = fetch_reading(client.as_ref(), &input).await;
                            if ui_tx.send(UiEvent::GenerateFinished(outcome)).is_err() {
                                tracing::warn!("ui closed before reading arrived");
                            }
                        });
                    }
                    BackendCommand::LoadExamples => {
                        tokio::spawn(async move {
                            let fetched = fetch_examples(client.as_ref()).await;
                            if ui_tx.send(UiEvent::ExamplesLoaded(fetched)).is_err() {
                                tracing::warn!("ui closed before examples arrived");
                            }
                        });
                    }
                }
            }
            tracing::debug!("ui command queue closed; backend worker stopping");
        });
    });
}
