//! Command handlers against a mocked vendor API

use std::path::PathBuf;

use clap::Parser;
use podpublish_common::Credential;
use podpublish_domain::{AppConfig, PublishError};
use podpublish_lib::commands::execute;
use podpublish_lib::utils::logging::find_publish_error;
use podpublish_lib::{AppContext, Cli};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_vendor() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shops.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5432, "title": "Tees Inc", "sales_channel": "etsy"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalog/blueprints.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 145, "title": "Unisex Softstyle T-Shirt", "brand": "Gildan", "model": "64000"},
            {"id": 6, "title": "Unisex Heavy Cotton Tee", "brand": "Gildan", "model": "5000"},
            {"id": 77, "title": "Mug 11oz"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalog/blueprints/145/print_providers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "title": "SwiftPOD"},
            {"id": 29, "title": "Monster Digital"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalog/blueprints/145/print_providers/29/variants.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"variants": [
            {"id": 11, "title": "Black / S", "options": {"color": "Black", "size": "S"}},
            {"id": 12, "title": "Black / M", "options": {"color": "Black", "size": "M"}},
            {"id": 21, "title": "Navy / S", "options": {"color": "Navy", "size": "S"}, "is_available": false}
        ]})))
        .mount(&server)
        .await;

    server
}

fn vendor_config(server: &MockServer) -> AppConfig {
    let mut config = AppConfig::default();
    config.api.base_url = server.uri();
    config.api.backoff_ms = 1;
    config
}

/// Parse `args`, layer the command's flags over `config` and run it.
async fn run(mut config: AppConfig, args: &[&str]) -> (anyhow::Result<()>, String) {
    let cli = Cli::try_parse_from(std::iter::once("podpublish").chain(args.iter().copied()))
        .expect("arguments should parse");
    cli.command.apply(&mut config.publish);

    let credential = Credential::from_raw("tok_integration").expect("token");
    let ctx = AppContext::new(config, credential).expect("context");
    let mut out = Vec::new();
    let result = execute(&ctx, &cli.command, &mut out).await;
    (result, String::from_utf8(out).expect("utf8"))
}

fn design_dir(names: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    for name in names {
        std::fs::write(dir.path().join(name), [0x89, b'P', b'N', b'G']).expect("write design");
    }
    dir
}

#[tokio::test]
async fn verify_lists_shops() {
    let server = mock_vendor().await;
    let (result, out) = run(vendor_config(&server), &["verify"]).await;

    result.expect("verify should pass");
    assert!(out.starts_with("Token OK. 1 shop(s) linked:"));
    assert!(out.contains("Tees Inc (ID 5432, etsy)"));
}

#[tokio::test]
async fn verify_without_shops_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (result, _) = run(vendor_config(&server), &["verify"]).await;

    let err = result.expect_err("no shops is a failure");
    assert!(matches!(find_publish_error(&err), Some(PublishError::NoShops)));
}

#[tokio::test]
async fn rejected_token_surfaces_credential_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shops.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthenticated."})))
        .mount(&server)
        .await;

    let (result, out) = run(vendor_config(&server), &["verify"]).await;

    let err = result.expect_err("401 must fail");
    assert!(find_publish_error(&err).is_some_and(PublishError::is_credential_error));
    assert!(format!("{err:#}").starts_with("Verifying token: Unauthenticated (HTTP 401)"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn blueprint_search_filters_by_brand_and_title() {
    let server = mock_vendor().await;
    let (result, out) = run(vendor_config(&server), &["blueprints", "--search", "gildan"]).await;

    result.expect("blueprints should pass");
    assert!(out.contains("145  Unisex Softstyle T-Shirt [Gildan 64000]"));
    assert!(out.contains("6  Unisex Heavy Cotton Tee [Gildan 5000]"));
    assert!(!out.contains("Mug"));
    assert!(out.ends_with("2 blueprint(s)\n"));
}

#[tokio::test]
async fn providers_mark_configured_selection() {
    let server = mock_vendor().await;
    let (result, out) = run(vendor_config(&server), &["providers"]).await;

    result.expect("providers should pass");
    assert!(out.contains("*    29  Monster Digital"));
    assert!(out.contains("      3  SwiftPOD"));
}

#[tokio::test]
async fn colors_hide_out_of_stock() {
    let server = mock_vendor().await;
    let mut config = vendor_config(&server);
    config.publish.sizes = vec!["S".into(), "M".into()];

    let (result, out) = run(config, &["colors"]).await;

    result.expect("colors should pass");
    assert_eq!(out, "Colors offered in sizes S, M:\n  Black\n");
}

#[tokio::test]
async fn dry_run_plans_without_uploading() {
    let server = mock_vendor().await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/(uploads|shops)/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let dir = design_dir(&["sunset.png", "wave.jpg"]);
    let mut config = vendor_config(&server);
    config.publish.sizes = vec!["S".into(), "M".into()];

    let files = dir.path().to_string_lossy().into_owned();
    let (result, out) = run(config, &["publish", &files, "--dry-run"]).await;

    result.expect("dry run should pass");
    assert!(out.contains("Shop: Tees Inc (ID 5432, etsy)"));
    assert!(out.contains("Blueprint 145 via Monster Digital (#29): 2 variant(s)"));
    assert!(out.contains("[dry-run] sunset.png -> \"sunset - Gildan 64000\" (2 variants at $29.99)"));
    assert!(out.contains("[dry-run] wave.jpg -> \"wave - Gildan 64000\""));
}

#[tokio::test]
async fn failed_design_fails_the_command_after_the_batch() {
    let server = mock_vendor().await;
    Mock::given(method("POST"))
        .and(path("/uploads/images.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": "bad image"})))
        .mount(&server)
        .await;
    let dir = design_dir(&["a.png"]);
    let file: PathBuf = dir.path().join("a.png");
    let file = file.to_string_lossy().into_owned();

    let (result, out) = run(vendor_config(&server), &["publish", &file, "--size", "S"]).await;

    let err = result.expect_err("a failed design fails the command");
    assert_eq!(err.to_string(), "1 of 1 design(s) failed to publish: a.png");
    // Navy S is out of stock, so only Black S remains in size S.
    assert!(out.contains("Blueprint 145 via Monster Digital (#29): 1 variant(s)"));
    assert!(out.contains("  Sizes:  S\n"));
    assert!(out.contains("FAIL  a.png: upload failed: HTTP 422"));
    assert!(out.contains("Done: 0 published, 1 failed"));
}

#[tokio::test]
async fn batch_reports_each_file_and_names_failures() {
    let server = mock_vendor().await;
    Mock::given(method("POST"))
        .and(path("/uploads/images.json"))
        .and(body_partial_json(json!({"file_name": "a.png"})))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/uploads/images.json"))
        .and(body_partial_json(json!({"file_name": "b.png"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "img-b"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/shops/5432/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "prod-b"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/shops/5432/products/prod-b/publish.json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let dir = design_dir(&["a.png", "b.png"]);
    let files: Vec<String> = ["a.png", "b.png"]
        .iter()
        .map(|name| dir.path().join(name).to_string_lossy().into_owned())
        .collect();

    let (result, out) = run(vendor_config(&server), &["publish", &files[0], &files[1]]).await;

    let err = result.expect_err("one failed design fails the command");
    assert_eq!(err.to_string(), "1 of 2 design(s) failed to publish: a.png");
    let fail = out.find("FAIL  a.png: upload failed: HTTP 500").expect("failure line");
    let ok = out.find("OK    b.png: published \"b - Gildan 64000\" as prod-b").expect("success line");
    let done = out.find("Done: 1 published, 1 failed").expect("summary line");
    assert!(fail < ok && ok < done, "outcomes print in file order before the summary:\n{out}");
}

#[tokio::test]
async fn unsupported_design_is_rejected_before_any_call() {
    let server = MockServer::start().await;
    let dir = design_dir(&["notes.txt"]);
    let file = dir.path().join("notes.txt").to_string_lossy().into_owned();

    let (result, _) = run(vendor_config(&server), &["publish", &file]).await;

    let err = result.expect_err("txt is not a design");
    assert!(matches!(find_publish_error(&err), Some(PublishError::InvalidInput(_))));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
