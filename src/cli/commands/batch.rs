//! Batch command - Audit a JSON array of drafts
//!
//! Drafts are audited in parallel; results keep the order of the input file.

use colored::Colorize;
use rayon::prelude::*;
use tracing::info;

use super::{load_engine, write_output, BatchArgs, BatchFormat};
use crate::cli::exit_codes;
use crate::cli::output::{BatchEntry, BatchRenderer, JsonOutput, TerminalOutput};
use crate::cli::GlobalOptions;
use crate::draft::Draft;
use crate::error::{ContentGuardError, InputError};
use crate::rules::constants::filter_valid_categories;
use crate::rules::engine::RulesEngine;

/// Execute the batch command
///
/// # Returns
///
/// An exit code: 0 when no draft has a violation, 1 otherwise
pub fn execute(args: BatchArgs, options: &GlobalOptions) -> Result<i32, ContentGuardError> {
    let mut engine = load_engine(options)?;

    if let Some(only) = args.only {
        let valid = filter_valid_categories(only);
        if valid.is_empty() {
            eprintln!("{} No valid category left in --only", "Error:".red().bold());
            return Ok(exit_codes::INVALID_ARGS);
        }
        engine.set_only_categories(valid);
    }
    if let Some(skip) = args.skip {
        engine.set_skip_categories(filter_valid_categories(skip));
    }

    let raw = std::fs::read_to_string(&args.input).map_err(|e| {
        ContentGuardError::Input(InputError::FileRead {
            path: args.input.display().to_string(),
            source: e,
        })
    })?;
    let mut drafts = parse_drafts(&raw)?;
    if let Some(platform) = &engine.config().default_platform {
        apply_default_platform(&mut drafts, platform);
    }

    let entries = audit_all(&engine, &drafts);
    let flagged = entries.iter().filter(|e| e.report.has_violations()).count();
    info!(
        drafts = entries.len(),
        flagged = flagged,
        "Batch audit complete"
    );

    let renderer: Box<dyn BatchRenderer> = match args.format {
        BatchFormat::Terminal => Box::new(TerminalOutput::new()),
        BatchFormat::Json => Box::new(JsonOutput::new(false)),
    };
    let rendered = renderer.render_batch(&entries)?;
    write_output(args.output.as_deref(), &rendered)?;

    Ok(if flagged > 0 {
        exit_codes::VIOLATIONS
    } else {
        exit_codes::SUCCESS
    })
}

/// Parse a JSON array of drafts
pub fn parse_drafts(raw: &str) -> Result<Vec<Draft>, ContentGuardError> {
    serde_json::from_str(raw).map_err(|e| ContentGuardError::Input(InputError::InvalidBatch(e)))
}

/// Give drafts without a platform label the configured default
pub fn apply_default_platform(drafts: &mut [Draft], platform: &str) {
    for draft in drafts.iter_mut().filter(|d| d.platform.is_empty()) {
        draft.platform = platform.to_string();
    }
}

/// Audit every draft in parallel, keeping input order.
///
/// Drafts without an id are named after their position (`#1`, `#2`, ...).
pub fn audit_all(engine: &RulesEngine, drafts: &[Draft]) -> Vec<BatchEntry> {
    drafts
        .par_iter()
        .enumerate()
        .map(|(index, draft)| BatchEntry {
            id: draft
                .id
                .clone()
                .unwrap_or_else(|| format!("#{}", index + 1)),
            report: engine.audit(draft),
        })
        .collect()
}
