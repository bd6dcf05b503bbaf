//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{submit_form, PredictionService};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the prediction worker thread. Each submission runs as its own task,
/// so overlapping submissions resolve independently and in arrival order.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    service: Arc<dyn PredictionService>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    None,
                    format!("failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Prediction worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Submit { ticket, record } => {
                        let service = service.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let result = submit_form(service.as_ref(), &record).await;
                            if ui_tx
                                .try_send(UiEvent::PredictionSettled { ticket, result })
                                .is_err()
                            {
                                tracing::warn!(ticket, "ui event queue unavailable; prediction dropped");
                            }
                        });
                    }
                    BackendCommand::CheckBackend => {
                        let service = service.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let health = service
                                .health()
                                .await
                                .map_err(|err| UiError::from_submit(UiErrorContext::HealthCheck, &err));
                            let _ = ui_tx.try_send(UiEvent::BackendHealth(health));
                        });
                    }
                }
            }

            tracing::debug!("command queue closed; prediction worker stopping");
        });
    })
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
