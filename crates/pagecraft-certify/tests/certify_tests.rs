//! Certification against the bundled schema documents

use pagecraft_certify::{certify_outputs, CertifyError, SchemaValidator, ValidationReport};
use pagecraft_content::{
    generate_questions, ArtifactDraft, ArtifactKind, AssemblyInputs, ComparisonPageAssembler,
    FaqPageAssembler, PageAssembler, ProductPageAssembler,
};
use pagecraft_test_utils::{sample_counterpart, sample_product, schema_dir};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn drafts() -> Vec<ArtifactDraft> {
    let product = sample_product();
    let counterpart = sample_counterpart();
    let questions = generate_questions(&product);
    let inputs = AssemblyInputs::new(&product)
        .with_counterpart(&counterpart)
        .with_questions(&questions);
    vec![
        FaqPageAssembler::new().assemble(&inputs).unwrap(),
        ProductPageAssembler::new().assemble(&inputs).unwrap(),
        ComparisonPageAssembler::new().assemble(&inputs).unwrap(),
    ]
}

fn write(dir: &Path, kind: ArtifactKind, value: &Value) -> PathBuf {
    let path = dir.join(kind.file_name());
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn schemas() -> BTreeMap<ArtifactKind, PathBuf> {
    ArtifactKind::ALL
        .iter()
        .map(|k| (*k, schema_dir().join(k.schema_file_name())))
        .collect()
}

#[test]
fn bundled_schemas_compile() {
    for path in schemas().values() {
        SchemaValidator::load(path).unwrap();
    }
}

#[test]
fn assembled_drafts_certify() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts: Vec<(ArtifactKind, PathBuf)> = drafts()
        .iter()
        .map(|d| (d.kind(), write(dir.path(), d.kind(), &d.to_value())))
        .collect();

    let report = certify_outputs(&sample_product(), &artifacts, &schemas()).unwrap();
    assert_eq!(report, ValidationReport::passed());
    assert!(report.errors.is_empty());
}

#[test]
fn schema_pass_runs_before_fact_pass() {
    let dir = tempfile::tempdir().unwrap();
    let mut page = drafts()[1].to_value();
    page["hero"]["title"] = json!(123);
    page["pricing"]["amount"] = json!(1);
    let path = write(dir.path(), ArtifactKind::ProductPage, &page);

    let err = certify_outputs(
        &sample_product(),
        &[(ArtifactKind::ProductPage, path.clone())],
        &schemas(),
    )
    .unwrap_err();
    match err {
        CertifyError::SchemaValidation { file, path: at, message } => {
            assert_eq!(file, path);
            assert_eq!(at, "/hero/title");
            assert!(message.contains("is not of type \"string\""), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_ingredient_in_faq_answer_is_a_content_violation() {
    let dir = tempfile::tempdir().unwrap();
    let mut page = drafts()[0].to_value();
    page["faqs"][0]["answer"] = json!("Key ingredients: Vitamin C, Z");
    let path = write(dir.path(), ArtifactKind::Faq, &page);

    let err = certify_outputs(&sample_product(), &[(ArtifactKind::Faq, path)], &schemas())
        .unwrap_err();
    match err {
        CertifyError::ContentViolation { detail, .. } => assert!(detail.contains("'Z'"), "{detail}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unfictional_counterpart_fails_the_schema() {
    let dir = tempfile::tempdir().unwrap();
    let mut page = drafts()[2].to_value();
    page["meta"]["product_b_fictional"] = json!(false);
    let path = write(dir.path(), ArtifactKind::Comparison, &page);

    let err = certify_outputs(
        &sample_product(),
        &[(ArtifactKind::Comparison, path)],
        &schemas(),
    )
    .unwrap_err();
    assert!(matches!(err, CertifyError::SchemaValidation { .. }));
}

#[test]
fn defective_schema_file_is_invalid_schema() {
    let dir = tempfile::tempdir().unwrap();
    let schema = dir.path().join("bad.schema.json");
    std::fs::write(&schema, r#"{"type": 12}"#).unwrap();
    let artifact = write(dir.path(), ArtifactKind::ProductPage, &drafts()[1].to_value());

    let err = certify_outputs(
        &sample_product(),
        &[(ArtifactKind::ProductPage, artifact)],
        &BTreeMap::from([(ArtifactKind::ProductPage, schema)]),
    )
    .unwrap_err();
    assert!(matches!(err, CertifyError::InvalidSchema { .. }), "{err}");
}
