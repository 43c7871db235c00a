//! `pagecraft run` without the argument parsing

use crate::status::RunStatus;
use anyhow::Context;
use pagecraft_core::{run_pipeline, PipelineConfig, PipelineContext};
use pagecraft_product::RawProductInput;
use std::path::PathBuf;

/// Everything `pagecraft run` needs
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input: PathBuf,
    pub config: PipelineConfig,
    pub status_file: Option<PathBuf>,
}

/// Resolve the effective configuration
///
/// A config file, when given, is loaded first; explicit directories
/// override it.
///
/// # Errors
/// The config file cannot be read or parsed.
pub fn resolve_config(
    config_file: Option<&PathBuf>,
    out_dir: Option<&PathBuf>,
    schema_dir: Option<&PathBuf>,
) -> anyhow::Result<PipelineConfig> {
    let mut config = match config_file {
        Some(path) => PipelineConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(dir) = out_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(dir) = schema_dir {
        config = config.with_schema_dir(dir);
    }
    Ok(config)
}

fn run_once(request: &RunRequest) -> anyhow::Result<PipelineContext> {
    let raw = RawProductInput::from_path(&request.input)
        .with_context(|| format!("reading input {}", request.input.display()))?;
    let ctx = run_pipeline(raw, &request.config)?;
    Ok(ctx)
}

/// Run the pipeline once and build its status record
///
/// Pipeline failures are captured in the record, not returned. The record is
/// written to `status_file` when one is set.
///
/// # Errors
/// Only if the status record itself cannot be written.
pub fn execute(request: &RunRequest) -> anyhow::Result<(RunStatus, Option<PipelineContext>)> {
    let status = RunStatus::start();
    tracing::info!(run_id = %status.run_id, input = %request.input.display(), "run started");

    let (status, ctx) = match run_once(request) {
        Ok(ctx) => (
            status.succeeded(ctx.artifacts().to_vec(), ctx.summary()),
            Some(ctx),
        ),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "run failed");
            (status.failed(&err), None)
        }
    };

    if let Some(path) = &request.status_file {
        status.write(path)?;
    }
    tracing::info!(
        run_id = %status.run_id,
        exit_code = status.exit_code,
        duration_ms = status.duration_ms,
        "run finished"
    );
    Ok((status, ctx))
}
