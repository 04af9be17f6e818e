//! `harscan scan <path>` – one scan with flags.

use anyhow::Result;
use harscan_core::config::HarscanConfig;
use harscan_core::{filter, har};
use std::io::{self, Write};

use crate::cli::render;
use crate::cli::ScanArgs;

pub fn run_scan(cfg: &HarscanConfig, args: &ScanArgs) -> Result<()> {
    let path = har::resolve_har_path(&args.path, cfg.har_dir.as_deref());
    let log = har::load_har(&path)?;
    let criteria = args.criteria(cfg);
    tracing::info!(
        "scan path={} entries={} criteria={:?}",
        path.display(),
        log.len(),
        criteria
    );

    let outcome = filter::filter(&log, &criteria, &cfg.denylist());
    tracing::info!("scan found {} matches", outcome.matches().len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        render::write_json(&mut out, &outcome.into_matches())?;
    } else {
        render::write_text(&mut out, &outcome)?;
    }
    out.flush()?;
    Ok(())
}
