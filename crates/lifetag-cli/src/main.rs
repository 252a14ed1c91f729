//! `lifetag` — encode and decode offline emergency tokens.
//!
//! # Usage
//!
//! ```
//! lifetag encode --card card.json --children
//! lifetag encode --card card.json --token-only
//! lifetag decode 'https://lifetag.app/card/children#eyJuIjoi...'
//! ```

use std::{io::Read as _, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lifetag_core::{SystemClock, project, record::MedicalCard};
use lifetag_token::{CardRoute, NoLocation, fragment, smart_poster_url};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "lifetag",
  about = "Offline emergency-data tokens for NFC tags and shareable links"
)]
struct Args {
  /// Path to a TOML config file (base_url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Project a medical-card JSON file and print the smart-poster URL.
  Encode {
    /// Medical-card JSON file; reads stdin when omitted.
    #[arg(long, value_name = "FILE")]
    card: Option<PathBuf>,

    /// Base URL used verbatim before the fragment.
    #[arg(long, value_name = "URL")]
    base: Option<String>,

    /// Use the simplified children route instead of the standard card view.
    #[arg(long)]
    children: bool,

    /// Print only the token, without a URL around it.
    #[arg(long)]
    token_only: bool,
  },

  /// Decode a token (or a full URL carrying one) and print the payload.
  Decode {
    /// Token, or a URL whose fragment carries one.
    input: String,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  base_url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  match args.command {
    Command::Encode { card, base, children, token_only } => {
      encode_command(card, base, children, token_only, &file_cfg)
    }
    Command::Decode { input } => decode_command(&input),
  }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

fn encode_command(
  card: Option<PathBuf>,
  base: Option<String>,
  children: bool,
  token_only: bool,
  file_cfg: &ConfigFile,
) -> Result<()> {
  let raw = read_card(card.as_deref())?;
  let card: MedicalCard =
    serde_json::from_str(&raw).context("parsing medical-card JSON")?;
  let data = project(&card, &SystemClock);

  if token_only {
    let token = lifetag_token::encode(&data)?;
    tracing::debug!(len = token.len(), "encoded token");
    println!("{token}");
    return Ok(());
  }

  // CLI flag overrides config file, which overrides the built-in default.
  let base = base.or_else(|| {
    (!file_cfg.base_url.is_empty()).then(|| file_cfg.base_url.clone())
  });
  let route = if children { CardRoute::Children } else { CardRoute::Standard };

  let url = smart_poster_url(&data, base.as_deref(), route, &NoLocation)?;
  tracing::debug!(len = url.len(), "smart-poster URL");
  println!("{url}");
  Ok(())
}

fn decode_command(input: &str) -> Result<()> {
  // Accept a bare token as well as a full scanned URL.
  let token = fragment(input).unwrap_or(input);
  match lifetag_token::decode(token) {
    Some(data) => {
      println!("{}", serde_json::to_string_pretty(&data)?);
      Ok(())
    }
    None => bail!("no offline emergency data in input"),
  }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn read_card(path: Option<&std::path::Path>) -> Result<String> {
  match path {
    Some(path) => std::fs::read_to_string(path)
      .with_context(|| format!("reading medical card {}", path.display())),
    None => {
      let mut raw = String::new();
      std::io::stdin()
        .read_to_string(&mut raw)
        .context("reading medical card from stdin")?;
      Ok(raw)
    }
  }
}
