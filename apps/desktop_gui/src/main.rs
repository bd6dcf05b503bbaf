use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use client_core::{load_settings, prepare_backend_url, PredictionClient, Profile, SubmissionPolicy};
use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{AttritionApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Employee attrition prediction form")]
struct Args {
    /// Overrides the configured prediction backend base URL.
    #[arg(long)]
    backend_url: Option<String>,
    /// classic, labeled or guarded.
    #[arg(long)]
    profile: Option<Profile>,
    /// last-write-wins or latest-request.
    #[arg(long)]
    submission_policy: Option<SubmissionPolicy>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.backend_url {
        settings.backend_url = url;
    }
    if let Some(profile) = args.profile {
        settings.profile = profile;
    }
    if let Some(policy) = args.submission_policy {
        settings.submission_policy = policy;
    }
    let backend_url = prepare_backend_url(&settings.backend_url)
        .with_context(|| format!("invalid backend url '{}'", settings.backend_url))?;
    tracing::info!(
        backend = %backend_url,
        profile = %settings.profile,
        policy = %settings.submission_policy,
        "starting attrition form"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let service = Arc::new(PredictionClient::new(&backend_url, settings.profile));
    backend_bridge::runtime::launch(cmd_rx, ui_tx, service);

    let startup = StartupConfig {
        backend_url: backend_url.to_string(),
        profile: settings.profile,
        submission_policy: settings.submission_policy,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Attrition Prediction")
            .with_inner_size([980.0, 900.0])
            .with_min_inner_size([640.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Attrition Prediction",
        options,
        Box::new(move |_cc| Ok(Box::new(AttritionApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop ui exited with error: {err}"))
}
