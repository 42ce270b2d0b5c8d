// File: crates/chat/src/main.rs
// Summary: `datachat` CLI: interactive chat REPL, one-shot render, demo prompts, and table inspection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use datachat::{logging, ChatSession, Config, Preset, SkiaRenderer, TurnOutcome};
use extract_core::ChartSpec;

#[derive(Parser)]
#[command(name = "datachat", version, about = "Turn free-text data into charts")]
struct Cli {
    /// Config file (defaults to $DATACHAT_CONFIG, then ./datachat.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the processing delay in milliseconds.
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Override the chart PNG output path.
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Override the chart theme (pink, dark, light).
    #[arg(long, global = true)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive chat; one message per line, /quit to exit.
    Chat,
    /// Run a single message through the chat pipeline.
    Render { text: String },
    /// Run one of the built-in example prompts.
    Example {
        #[arg(value_enum)]
        preset: Preset,
    },
    /// Print the extracted table without rendering.
    Inspect {
        text: String,
        /// Emit CSV instead of an aligned table.
        #[arg(long)]
        csv: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(ms) = cli.delay_ms {
        config.chat.processing_delay_ms = ms;
    }
    if let Some(out) = cli.out {
        config.render.output = out;
    }
    if let Some(theme) = cli.theme {
        config.render.theme = theme;
    }

    logging::init_cli(&config.chat.log_level);

    match cli.command {
        Command::Chat => run_chat(&config).await,
        Command::Render { text } => run_once(&config, &text).await,
        Command::Example { preset } => run_once(&config, preset.prompt()).await,
        Command::Inspect { text, csv } => inspect(&text, csv),
    }
}

fn new_session(config: &Config) -> ChatSession<SkiaRenderer> {
    let renderer = SkiaRenderer::new(config.render.options(), config.render.output.clone());
    ChatSession::with_delay(renderer, config.chat.processing_delay())
}

fn print_new(session: &ChatSession<SkiaRenderer>, from: usize) {
    for msg in session.transcript().since(from) {
        println!("{msg}");
    }
}

fn report(session: &ChatSession<SkiaRenderer>, outcome: &TurnOutcome) {
    if let (TurnOutcome::Charted(_), Some(chart)) = (outcome, session.chart()) {
        let (w, h) = chart.size();
        println!("   [chart {}x{} written to {}]", w, h, chart.output().display());
    }
}

async fn run_once(config: &Config, text: &str) -> Result<()> {
    let mut session = new_session(config);
    if let Some(outcome) = session.send_message(text).await {
        print_new(&session, 0);
        report(&session, &outcome);
    }
    Ok(())
}

async fn run_chat(config: &Config) -> Result<()> {
    let mut session = new_session(config);
    info!(output = %config.render.output.display(), "chat started");
    println!("Paste or describe your data. /resize W H resizes the chart, /quit exits.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            println!();
            break;
        };
        let line = line.trim();
        if line == "/quit" {
            break;
        }
        if let Some(args) = line.strip_prefix("/resize") {
            resize(&mut session, args);
            continue;
        }

        let seen = session.transcript().len();
        let Some(pending) = session.submit(line) else { continue };
        println!("bot> ...");
        let pending = pending.ready().await;
        let outcome = session.complete(pending);
        // the user line was echoed by the terminal already
        print_new(&session, seen + 1);
        report(&session, &outcome);
    }
    Ok(())
}

fn resize(session: &mut ChatSession<SkiaRenderer>, args: &str) {
    let dims: Vec<i32> = args.split_whitespace().filter_map(|s| s.parse().ok()).collect();
    let &[w, h] = dims.as_slice() else {
        println!("usage: /resize WIDTH HEIGHT");
        return;
    };
    if !session.chart_visible() {
        println!("no chart to resize");
        return;
    }
    match session.resize(w, h) {
        Ok(()) => println!("   [chart resized to {w}x{h}]"),
        Err(e) => println!("resize failed: {e}"),
    }
}

fn inspect(text: &str, csv: bool) -> Result<()> {
    let spec = ChartSpec::from_text(text).context("no chart data in input")?;
    if csv {
        datachat::export::write_csv(&spec, std::io::stdout().lock()).context("failed to write CSV")?;
        return Ok(());
    }
    println!("kind: {}", spec.kind());
    let width = spec.labels().iter().map(String::len).max().unwrap_or(0);
    for (label, value) in spec.rows() {
        println!("  {label:<width$}  {value}");
    }
    Ok(())
}
