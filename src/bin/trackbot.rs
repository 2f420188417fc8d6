//! Console relay for the trackbot conversation engine.
//!
//! Usage:
//!
//! ```text
//! trackbot [--config <path>]
//! ```
//!
//! Each line on standard input is `<chat id> <message text>`, for example:
//!
//! ```text
//! 100 /start
//! 100 Ivan Petrov
//! 100 /accept 42
//! ```
//!
//! Every reply is written to standard output as one JSON object. Rendered
//! reports are stored in the configured output directory. Logs go to
//! standard error.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use clap::Parser;
use mockable::DefaultClock;
use tokio::io::{AsyncBufReadExt, BufReader};

use trackbot::config::RelayConfig;
use trackbot::conversation::{
    adapters::{
        json_lines::JsonLinesSink,
        memory::{InMemoryAuthorizedRegistry, InMemorySessionStore},
    },
    domain::ChatId,
    services::{ConversationEngine, Dispatcher},
};
use trackbot::report::{adapters::SvgBarChartRenderer, services::ReportService};
use trackbot::telemetry::init_tracing;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "trackbot", version, about = "Relay chat messages to an issue tracker")]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long, short, env = "TRACKBOT_CONFIG")]
    config: Option<Utf8PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => RelayConfig::load(path)?,
        None => RelayConfig::default(),
    };
    init_tracing(&config.logging.filter)?;
    tracing::info!(
        users = config.directory.users.len(),
        output = ?config.output.directory,
        "relay starting"
    );

    let reports = ReportService::new(Arc::new(SvgBarChartRenderer::new()), Arc::new(DefaultClock))
        .with_title_template(config.report.title_template.clone());
    let engine = ConversationEngine::new(
        Arc::new(config.seeded_tracker()),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(InMemoryAuthorizedRegistry::new()),
        reports,
    )
    .with_replies(config.replies.clone());

    let sink = match &config.output.directory {
        Some(path) => JsonLinesSink::new(std::io::stdout()).with_image_dir(open_output_dir(path)?),
        None => JsonLinesSink::new(std::io::stdout()),
    };
    let dispatcher = Dispatcher::new(Arc::new(engine), Arc::new(sink));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_number: usize = 0;
    while let Some(line) = lines.next_line().await? {
        line_number = line_number.saturating_add(1);
        if line.trim().is_empty() {
            continue;
        }
        let Some((chat_id, text)) = parse_line(&line) else {
            tracing::warn!(line = line_number, "expected '<chat id> <text>', skipping");
            continue;
        };
        dispatcher.dispatch(chat_id, text).await?;
    }

    tracing::info!(lines = line_number, "input closed, relay stopping");
    Ok(())
}

/// Splits an input line into the chat identifier and the message text.
fn parse_line(line: &str) -> Option<(ChatId, &str)> {
    let trimmed = line.trim_start();
    let (id, text) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let chat_id = id.parse::<i64>().ok()?;
    Some((ChatId::new(chat_id), text))
}

fn open_output_dir(path: &Utf8Path) -> std::io::Result<Dir> {
    Dir::create_ambient_dir_all(path, ambient_authority())?;
    Dir::open_ambient_dir(path, ambient_authority())
}
