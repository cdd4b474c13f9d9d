//! DeepScan intake CLI
//!
//! Interprets one client message and prints the structured request and its
//! follow-up questions as JSON on stdout. Logs go to stderr.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use deepscan_config::{load_settings_from, InterpreterSettings};
use deepscan_core::ParsedRequest;
use deepscan_text_processing::{acknowledgement, RequestInterpreter};

#[derive(Debug, Parser)]
#[command(name = "deepscan-intake", version, about = "Interpret a pentest request message")]
struct Args {
    /// Message text; read from --file or stdin when omitted
    text: Option<String>,

    /// Read the message from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Configuration directory holding default.* and {env}.* files
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Environment-specific config layer (also read from DEEPSCAN_ENV)
    #[arg(long, env = "DEEPSCAN_ENV")]
    env: Option<String>,

    /// Include the intake acknowledgement message
    #[arg(long)]
    ack: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    request: &'a ParsedRequest,
    questions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    acknowledgement: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Priority: env vars > config/{env}.* > config/default.* > defaults
    let settings = load_settings_from(&args.config_dir, args.env.as_deref())
        .context("failed to load interpreter settings")?;

    init_tracing(&settings);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?settings.environment,
        config_dir = %args.config_dir.display(),
        "Configuration loaded"
    );

    let interpreter =
        RequestInterpreter::from_settings(&settings).context("failed to build interpreter")?;

    let text = read_message(&args)?;
    let interpretation = interpreter.interpret(&text);

    let output = Output {
        request: &interpretation.request,
        questions: interpretation.questions.clone(),
        acknowledgement: args.ack.then(|| acknowledgement(&interpretation.request)),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}

fn read_message(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read message from {}", path.display()));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read message from stdin")?;
    Ok(text)
}

fn init_tracing(settings: &InterpreterSettings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("deepscan={}", level).into()
    });

    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
