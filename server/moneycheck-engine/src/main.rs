//! Binary entrypoint: read one JSON request from stdin, write one JSON
//! response to stdout.
//!
//! On a rejected request an ErrorOutput is written instead and the process
//! exits with status 1. Logs go to stderr so stdout stays machine-readable.

use chrono::Utc;
use clap::Parser;
use moneycheck_engine::request::{self, RespondOptions};
use moneycheck_engine::{Config, Engine, EngineError, Locale};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
  name = "moneycheck-engine",
  about = "Score a MoneyCheck submission read from stdin",
  version
)]
struct Cli {
  /// Produce the detailed (paid) result; requires an active entitlement
  #[arg(long)]
  detailed: bool,
  /// Language of feedback, actions, and advice
  #[arg(long, env = "MONEYCHECK_LOCALE", default_value = "en")]
  locale: Locale,
  /// Include a social share caption in the response
  #[arg(long)]
  share: bool,
  /// Pretty-print the JSON output
  #[arg(long)]
  pretty: bool,
}

fn main() {
  let cli = Cli::parse();
  init_tracing();

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  let code = match run(&cli, &mut out) {
    Ok(()) => 0,
    Err(e) => {
      tracing::warn!(error = %e, "request rejected");
      let err = request::error_output(&e);
      let _ = serde_json::to_writer(&mut out, &err);
      let _ = writeln!(out);
      1
    }
  };

  let _ = out.flush();
  std::process::exit(code);
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), EngineError> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let req = request::parse_request(&raw)?;

  let engine = Engine::new(Config::with_locale(cli.locale));
  let options = RespondOptions {
    detailed: cli.detailed,
    share: cli.share,
  };
  let response = request::respond(&engine, &req, options, Utc::now())?;

  if cli.pretty {
    serde_json::to_writer_pretty(&mut *out, &response)?;
  } else {
    serde_json::to_writer(&mut *out, &response)?;
  }
  writeln!(out)?;
  Ok(())
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .compact()
    .with_ansi(false)
    .try_init();
}
