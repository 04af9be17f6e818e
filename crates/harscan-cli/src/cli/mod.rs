//! CLI for harscan.

mod commands;
mod render;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use harscan_core::config::{self, HarscanConfig};
use harscan_core::filter::{ContentTypeLocation, FilterCriteria};

use commands::{run_completions, run_interactive, run_scan};

/// Top-level CLI for harscan.
#[derive(Debug, Parser)]
#[command(name = "harscan")]
#[command(about = "harscan: search HAR captures for matching HTTP transactions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scan one HAR file and print matching transactions.
    Scan(ScanArgs),

    /// Prompt for file, method, search string, and content type in a loop.
    Interactive,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// HAR file path, or a bare name looked up in the configured `har_dir`.
    pub path: String,

    /// Substring to find in the query string, request headers, or bodies.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Substring required in the content type (e.g. application/json).
    #[arg(short = 't', long, value_name = "TYPE")]
    pub content_type: Option<String>,

    /// Only consider this HTTP method (case-insensitive).
    #[arg(short, long)]
    pub method: Option<String>,

    /// Which content type the filter applies to: request, response, or both.
    #[arg(long, value_name = "WHERE")]
    pub location: Option<ContentTypeLocation>,

    /// Report the fields each search match was found in.
    #[arg(long, overrides_with = "no_sources")]
    pub sources: bool,

    /// Do not report match sources, even if the config enables it.
    #[arg(long, overrides_with = "sources")]
    pub no_sources: bool,

    /// Also search response header names and values.
    #[arg(long, overrides_with = "no_response_headers")]
    pub response_headers: bool,

    /// Search request headers only, even if the config widens the scope.
    #[arg(long, overrides_with = "response_headers")]
    pub no_response_headers: bool,

    /// Print matches as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    /// Merge flags over config defaults.
    pub fn criteria(&self, cfg: &HarscanConfig) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            content_type: self.content_type.clone(),
            method: self.method.clone(),
            location: self.location.unwrap_or(cfg.default_location),
            report_match_sources: flag(self.sources, self.no_sources, cfg.report_match_sources),
            search_response_headers: flag(
                self.response_headers,
                self.no_response_headers,
                cfg.search_response_headers,
            ),
        }
    }
}

/// `--x` / `--no-x` pair over a config default; the last flag given wins.
fn flag(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Scan(args) => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_scan(&cfg, &args)?;
            }
            CliCommand::Interactive => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_interactive(&cfg)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
