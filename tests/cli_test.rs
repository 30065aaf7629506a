use httpmock::prelude::*;
use shopping_list_connector::Product;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shopping-list-connector"))
        .args(args)
        .env_remove("SHOPPING_LIST_ENDPOINT")
        .env_remove("SHOPPING_LIST_TIMEOUT")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run shopping-list-connector")
}

#[test]
fn test_cli_prints_products_as_json() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/all_products");
        then.status(200).json_body(serde_json::json!([
            {"name": "Milk", "price": 2.5},
            {"name": "Bread", "price": 1.19}
        ]));
    });

    let output = run_cli(&["--endpoint", &server.url("/all_products"), "--output", "json"]);

    api_mock.assert();
    assert!(output.status.success());
    let products: Vec<Product> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        products,
        vec![Product::new("Milk", 2.5), Product::new("Bread", 1.19)]
    );
}

#[test]
fn test_cli_prints_debug_listing_by_default() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/all_products");
        then.status(200)
            .json_body(serde_json::json!([{"name": "Milk", "price": 2.5}]));
    });

    let output = run_cli(&["--endpoint", &server.url("/all_products")]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), r#"[Product { name: "Milk", price: 2.5 }]"#);
}

#[test]
fn test_cli_fails_without_output_on_server_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/all_products");
        then.status(500).body("oops");
    });

    let output = run_cli(&["--endpoint", &server.url("/all_products")]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("500"));
}

#[test]
fn test_cli_validation_failure_exit_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/all_products");
        then.status(200).body(r#"[{"name": "Bread"}]"#);
    });

    let output = run_cli(&["--endpoint", &server.url("/all_products")]);

    assert_eq!(output.status.code(), Some(4));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_rejects_bad_endpoint_before_requesting() {
    let output = run_cli(&["--endpoint", "not a url"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
