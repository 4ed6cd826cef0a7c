use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, info_span};

use bell_prompt::{PromptRequest, Selection, SlotLocks, render, spin};
use bell_standards::{NONE_CODE, ParsedStandards, StandardsCatalog, parse_file};

use crate::cli::{CheckArgs, PromptArgs, SpinArgs};

/// Parse outcome of `bellringers check`.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub path: PathBuf,
    #[serde(flatten)]
    pub parsed: ParsedStandards,
    /// The document yielded no indicators, so the catalog would fall back
    /// to the built-in standards.
    pub has_errors: bool,
}

pub fn run_standards(standards_file: &Path) -> StandardsCatalog {
    let span = info_span!("standards", path = %standards_file.display());
    let _guard = span.enter();
    StandardsCatalog::load(standards_file)
}

pub fn run_describe(standards_file: &Path, code: &str) -> String {
    let catalog = run_standards(standards_file);
    catalog.description_for(code).to_string()
}

pub fn run_check(standards_file: &Path, args: &CheckArgs) -> Result<CheckResult> {
    let path = args
        .file
        .clone()
        .unwrap_or_else(|| standards_file.to_path_buf());
    let span = info_span!("check", path = %path.display());
    let _guard = span.enter();

    let start = Instant::now();
    let parsed = parse_file(&path).context("check standards document")?;
    let has_errors = parsed.indicators.is_empty();
    info!(
        domains = parsed.report.domains,
        standards = parsed.report.standards,
        indicators = parsed.indicators.len(),
        issues = parsed.report.issues.len(),
        duration_ms = start.elapsed().as_millis(),
        "check complete"
    );
    Ok(CheckResult {
        path,
        parsed,
        has_errors,
    })
}

pub fn run_spin(args: &SpinArgs) -> Selection {
    let locks = SlotLocks {
        topic: args.topic.clone(),
        format: args.format.clone(),
        constraint: args.constraint.clone(),
    };
    match args.seed {
        Some(seed) => spin(&locks, &mut StdRng::seed_from_u64(seed)),
        None => spin(&locks, &mut rand::thread_rng()),
    }
}

pub fn run_prompt(standards_file: &Path, args: &PromptArgs) -> Result<String> {
    let request = PromptRequest::new(
        args.topic.as_str(),
        args.format.as_str(),
        args.constraint.as_str(),
    );
    render_with_standard(standards_file, request, args.standard.as_deref())
}

/// Render the generation prompt for a spun selection.
pub fn run_spin_prompt(
    standards_file: &Path,
    selection: &Selection,
    standard: Option<&str>,
) -> Result<String> {
    let request = PromptRequest::from_selection(selection);
    render_with_standard(standards_file, request, standard)
}

fn render_with_standard(
    standards_file: &Path,
    request: PromptRequest,
    standard: Option<&str>,
) -> Result<String> {
    let catalog = run_standards(standards_file);
    let request = request.with_standard(&catalog, standard.unwrap_or(NONE_CODE));
    render(&request).context("render prompt")
}
