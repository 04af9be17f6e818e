//! `harscan interactive` – prompt loop over HAR files until `q`.

use anyhow::Result;
use harscan_core::config::HarscanConfig;
use harscan_core::filter::{self, FilterCriteria};
use harscan_core::har;
use std::io::{self, BufRead, Write};

use crate::cli::render;

const PATH_PROMPT: &str = "Enter the HAR file path (or 'q' to quit): ";
const METHOD_PROMPT: &str =
    "Enter HTTP method to filter (POST/GET), or leave blank to search all methods: ";
const SEARCH_PROMPT: &str =
    "Enter the search string (leave blank to filter by content type only): ";
const CONTENT_TYPE_PROMPT: &str =
    "Enter content type to filter (e.g., image/jpeg, application/json) or leave blank to skip: ";

pub fn run_interactive(cfg: &HarscanConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    interactive_loop(cfg, &mut stdin.lock(), &mut stdout.lock())
}

/// Runs until `q` or end of input. Load failures are printed and the loop continues.
pub(crate) fn interactive_loop<R: BufRead, W: Write>(
    cfg: &HarscanConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let denylist = cfg.denylist();

    loop {
        let Some(name) = prompt(input, out, PATH_PROMPT)? else {
            break;
        };
        if name.eq_ignore_ascii_case("q") {
            break;
        }

        let Some(method) = prompt(input, out, METHOD_PROMPT)? else {
            break;
        };
        if !matches!(method.to_ascii_lowercase().as_str(), "post" | "get" | "") {
            writeln!(
                out,
                "Invalid method. Please enter POST, GET, or leave blank for no filter."
            )?;
            continue;
        }

        let Some(search) = prompt(input, out, SEARCH_PROMPT)? else {
            break;
        };
        let Some(content_type) = prompt(input, out, CONTENT_TYPE_PROMPT)? else {
            break;
        };

        let criteria = FilterCriteria {
            search: Some(search),
            content_type: Some(content_type),
            method: Some(method),
            location: cfg.default_location,
            report_match_sources: cfg.report_match_sources,
            search_response_headers: cfg.search_response_headers,
        };

        let path = har::resolve_har_path(&name, cfg.har_dir.as_deref());
        match har::load_har(&path) {
            Ok(log) => {
                let outcome = filter::filter(&log, &criteria, &denylist);
                render::write_text(out, &outcome)?;
            }
            Err(err) => {
                tracing::warn!("interactive scan of {} failed: {}", path.display(), err);
                writeln!(out, "Error: {err}")?;
            }
        }
    }

    Ok(())
}

/// Print `message`, read one line, and trim it. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
