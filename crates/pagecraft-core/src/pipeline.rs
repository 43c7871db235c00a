//! Standard pipeline wiring
//!
//! ```text
//! parse_product
//! gen_questions      <- parse_product
//! gen_product_b      <- parse_product
//! build_faq          <- parse_product, gen_questions
//! build_product_page <- parse_product
//! build_comparison   <- parse_product, gen_product_b
//! write_json         <- build_faq, build_product_page, build_comparison
//! validate_outputs   <- write_json
//! ```

use crate::config::PipelineConfig;
use crate::context::PipelineContext;
use crate::error::PipelineError;
use crate::serializer::{write_artifact, PersistedArtifact};
use pagecraft_certify::certify_outputs;
use pagecraft_content::{
    generate_questions, ArtifactKind, AssemblyInputs, ComparisonPageAssembler, FaqPageAssembler,
    PageAssembler, ProductPageAssembler,
};
use pagecraft_dag::{GraphError, RunError, TaskGraph};
use pagecraft_product::{generate_counterpart, normalize, NormalizedProduct, RawProductInput};
use std::path::{Path, PathBuf};

/// Node ids of the standard pipeline
pub mod nodes {
    pub const PARSE_PRODUCT: &str = "parse_product";
    pub const GEN_QUESTIONS: &str = "gen_questions";
    pub const GEN_PRODUCT_B: &str = "gen_product_b";
    pub const BUILD_FAQ: &str = "build_faq";
    pub const BUILD_PRODUCT_PAGE: &str = "build_product_page";
    pub const BUILD_COMPARISON: &str = "build_comparison";
    pub const WRITE_JSON: &str = "write_json";
    pub const VALIDATE_OUTPUTS: &str = "validate_outputs";
}

/// Task graph over the pipeline context
pub type PipelineGraph = TaskGraph<PipelineContext, PipelineError>;

fn require_product(
    ctx: &PipelineContext,
    node: &'static str,
) -> Result<NormalizedProduct, PipelineError> {
    ctx.product.clone().ok_or(PipelineError::Prerequisite {
        node,
        missing: "the normalized product",
    })
}

fn parse_product(mut ctx: PipelineContext) -> Result<PipelineContext, PipelineError> {
    let raw = ctx.raw.as_ref().ok_or(PipelineError::Prerequisite {
        node: nodes::PARSE_PRODUCT,
        missing: "the raw input record",
    })?;
    ctx.product = Some(normalize(raw)?);
    Ok(ctx)
}

fn gen_questions(mut ctx: PipelineContext) -> Result<PipelineContext, PipelineError> {
    let product = require_product(&ctx, nodes::GEN_QUESTIONS)?;
    ctx.questions = Some(generate_questions(&product));
    Ok(ctx)
}

fn gen_product_b(mut ctx: PipelineContext) -> Result<PipelineContext, PipelineError> {
    ctx.counterpart = Some(generate_counterpart());
    Ok(ctx)
}

fn assemble_with(
    mut ctx: PipelineContext,
    assembler: &dyn PageAssembler,
) -> Result<PipelineContext, PipelineError> {
    let draft = {
        let mut inputs = AssemblyInputs::default();
        inputs.product = ctx.product.as_ref();
        inputs.counterpart = ctx.counterpart.as_ref();
        inputs.questions = ctx.questions.as_ref();
        assembler.assemble(&inputs)?
    };
    ctx.drafts.insert(draft.kind(), draft);
    Ok(ctx)
}

fn write_json(mut ctx: PipelineContext, output_dir: &Path) -> Result<PipelineContext, PipelineError> {
    for kind in ArtifactKind::ALL {
        let draft = ctx.drafts.get(&kind).ok_or(PipelineError::Prerequisite {
            node: nodes::WRITE_JSON,
            missing: match kind {
                ArtifactKind::ProductPage => "the product page draft",
                ArtifactKind::Faq => "the FAQ draft",
                ArtifactKind::Comparison => "the comparison draft",
            },
        })?;
        let record = write_artifact(&PersistedArtifact::from_draft(draft), output_dir)?;
        ctx.artifacts.push(record);
    }
    Ok(ctx)
}

fn validate_outputs(mut ctx: PipelineContext) -> Result<PipelineContext, PipelineError> {
    let product = require_product(&ctx, nodes::VALIDATE_OUTPUTS)?;
    let written: Vec<(ArtifactKind, PathBuf)> = ctx
        .artifacts
        .iter()
        .map(|record| (record.kind, record.path.clone()))
        .collect();
    ctx.report = Some(certify_outputs(&product, &written, &ctx.schema_paths)?);
    Ok(ctx)
}

/// Record the node in the context trail, then run it
fn traced<F>(
    node: &'static str,
    f: F,
) -> impl Fn(PipelineContext) -> Result<PipelineContext, PipelineError>
where
    F: Fn(PipelineContext) -> Result<PipelineContext, PipelineError>,
{
    move |mut ctx: PipelineContext| {
        ctx.trail.push(node.to_string());
        f(ctx)
    }
}

/// Build the standard pipeline for a configuration
///
/// # Errors
/// [`GraphError`] if the wiring is inconsistent.
pub fn build_pipeline(config: &PipelineConfig) -> Result<PipelineGraph, GraphError> {
    use nodes::{
        BUILD_COMPARISON, BUILD_FAQ, BUILD_PRODUCT_PAGE, GEN_PRODUCT_B, GEN_QUESTIONS,
        PARSE_PRODUCT, VALIDATE_OUTPUTS, WRITE_JSON,
    };

    let faq = FaqPageAssembler::new().with_faq_limit(config.faq_limit);
    let output_dir = config.output_dir.clone();

    let mut graph = PipelineGraph::new();
    graph.register(PARSE_PRODUCT, traced(PARSE_PRODUCT, parse_product), Vec::<&str>::new())?;
    graph.register(GEN_QUESTIONS, traced(GEN_QUESTIONS, gen_questions), [PARSE_PRODUCT])?;
    graph.register(GEN_PRODUCT_B, traced(GEN_PRODUCT_B, gen_product_b), [PARSE_PRODUCT])?;
    graph.register(
        BUILD_FAQ,
        traced(BUILD_FAQ, move |ctx| assemble_with(ctx, &faq)),
        [PARSE_PRODUCT, GEN_QUESTIONS],
    )?;
    graph.register(
        BUILD_PRODUCT_PAGE,
        traced(BUILD_PRODUCT_PAGE, |ctx| {
            assemble_with(ctx, &ProductPageAssembler::new())
        }),
        [PARSE_PRODUCT],
    )?;
    graph.register(
        BUILD_COMPARISON,
        traced(BUILD_COMPARISON, |ctx| {
            assemble_with(ctx, &ComparisonPageAssembler::new())
        }),
        [PARSE_PRODUCT, GEN_PRODUCT_B],
    )?;
    graph.register(
        WRITE_JSON,
        traced(WRITE_JSON, move |ctx| write_json(ctx, &output_dir)),
        [BUILD_FAQ, BUILD_PRODUCT_PAGE, BUILD_COMPARISON],
    )?;
    graph.register(
        VALIDATE_OUTPUTS,
        traced(VALIDATE_OUTPUTS, validate_outputs),
        [WRITE_JSON],
    )?;
    Ok(graph)
}

/// Run the standard pipeline over an already-parsed input record
///
/// # Errors
/// [`RunError::Graph`] for wiring errors (nothing runs), otherwise
/// [`RunError::NodeFailed`] with the first failing node.
pub fn run_pipeline(
    raw: RawProductInput,
    config: &PipelineConfig,
) -> Result<PipelineContext, RunError<PipelineError>> {
    let graph = build_pipeline(config)?;
    let ctx = PipelineContext::new(raw, config.schema_paths());
    let ctx = graph.run(ctx)?;
    tracing::info!(
        artifacts = ctx.artifacts.len(),
        output_dir = %config.output_dir.display(),
        "pipeline finished"
    );
    Ok(ctx)
}
