use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, prepare_backend_url, submit_form, PredictionClient, PredictionService, Profile,
    Settings,
};
use shared::{schema, FieldKind, FieldSpec, FormRecord, PredictionResult, Section};

#[derive(Parser, Debug)]
#[command(name = "attrition", about = "Attrition prediction form from the command line")]
struct Args {
    /// Overrides the configured prediction backend base URL.
    #[arg(long, global = true)]
    backend_url: Option<String>,
    /// classic, labeled or guarded.
    #[arg(long, global = true)]
    profile: Option<Profile>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists every form field grouped by section.
    Fields,
    /// Prints the default record as JSON.
    Defaults,
    /// Submits the default record with the given edits applied.
    Predict {
        /// Field assignment, e.g. `--set Age=42`. Repeatable.
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },
    /// Checks that the backend root answers.
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    match args.command {
        Command::Fields => print!("{}", render_fields()),
        Command::Defaults => println!(
            "{}",
            serde_json::to_string_pretty(&FormRecord::default())?
        ),
        Command::Predict { ref assignments } => {
            let record = build_record(assignments)?;
            for name in record.out_of_domain() {
                tracing::warn!(field = name, "value outside the form's declared domain");
            }
            let client = connect(&args)?;
            let result = submit_form(&client, &record).await;
            print!("{}", render_result(&result));
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Ping => {
            let client = connect(&args)?;
            println!("{}", ping(&client).await?);
        }
    }
    Ok(())
}

fn resolve(args: &Args) -> Settings {
    let mut settings = load_settings();
    if let Some(url) = &args.backend_url {
        settings.backend_url = url.clone();
    }
    if let Some(profile) = args.profile {
        settings.profile = profile;
    }
    settings
}

fn connect(args: &Args) -> Result<PredictionClient> {
    let settings = resolve(args);
    let url = prepare_backend_url(&settings.backend_url)
        .with_context(|| format!("invalid backend url '{}'", settings.backend_url))?;
    Ok(PredictionClient::new(&url, settings.profile))
}

async fn ping(client: &PredictionClient) -> Result<String> {
    let banner = client
        .health()
        .await
        .with_context(|| format!("backend at {} did not answer", client.base_url()))?;
    Ok(banner.trim().to_string())
}

fn build_record(assignments: &[String]) -> Result<FormRecord> {
    let mut record = FormRecord::default();
    for assignment in assignments {
        record
            .apply_assignment(assignment)
            .with_context(|| format!("cannot apply '{assignment}'"))?;
    }
    Ok(record)
}

fn describe(spec: &FieldSpec) -> String {
    match spec.kind {
        FieldKind::Categorical { options, default } => {
            format!("one of {} (default {default})", options.join(" | "))
        }
        FieldKind::Numeric { min, max, default } => {
            format!("{min}..={max} (default {default})")
        }
    }
}

fn render_fields() -> String {
    let mut out = String::new();
    for section in Section::ALL {
        out.push_str(&format!("{} {}\n", section.icon(), section.title()));
        for spec in schema::fields_in(section) {
            out.push_str(&format!(
                "  {:<24} {:<28} {}\n",
                spec.name,
                spec.label,
                describe(spec)
            ));
        }
    }
    out
}

fn render_result(result: &PredictionResult) -> String {
    let mut out = String::new();
    if let Some(display) = result.display() {
        out.push_str(display.headline());
        out.push('\n');
    }
    if let Some(probability) = result.probability() {
        out.push_str(&format!("Probability of leaving: {:.1}%\n", probability * 100.0));
    }
    if let PredictionResult::Failed { kind, detail } = result {
        out.push_str(&format!("  ({}: {detail})\n", kind.label()));
    }
    out
}
