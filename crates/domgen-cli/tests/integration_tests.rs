//! Integration tests for domgen-cli.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const OUTPUTS: [&str; 5] = [
    "ProductDTO.java",
    "Product.java",
    "ProductController.java",
    "ProductService.java",
    "ProductRepository.java",
];

/// A `domgen` command isolated from the user's config and environment.
fn domgen(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("domgen").unwrap();
    cmd.current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env("HOME", cwd)
        .env("NO_COLOR", "1")
        .env_remove("DOMGEN_TEMPLATES_DIR")
        .env_remove("DOMGEN_LOG_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn java_package(temp: &TempDir) -> PathBuf {
    let dir = temp.path().join("shop/src/main/java/com/example/demo");
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    domgen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("kinds"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    domgen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_writes_five_files() {
    let temp = TempDir::new().unwrap();
    let pkg = java_package(&temp);

    domgen(temp.path())
        .args(["generate", "product", "--path"])
        .arg(&pkg)
        .assert()
        .success()
        .stdout(predicate::str::contains("5 component(s) generated in"));

    let out = pkg.join("Product");
    for name in OUTPUTS {
        let content = fs::read_to_string(out.join(name)).unwrap();
        assert!(content.contains("package com.example.demo.Product;"), "{name}");
        assert!(!content.contains("{{"), "{name}");
    }
    let controller = fs::read_to_string(out.join("ProductController.java")).unwrap();
    assert!(controller.contains("productService"));
}

#[test]
fn test_generate_from_active_file() {
    let temp = TempDir::new().unwrap();
    let pkg = java_package(&temp);
    let file = pkg.join("Application.java");
    fs::write(&file, "class Application {}").unwrap();

    domgen(temp.path())
        .args(["g", "order", "--file"])
        .arg(&file)
        .assert()
        .success();

    assert!(pkg.join("Order/OrderService.java").is_file());
}

#[test]
fn test_generate_defaults_to_cwd() {
    let temp = TempDir::new().unwrap();
    let pkg = java_package(&temp);

    domgen(&pkg)
        .args(["generate", "invoice"])
        .assert()
        .success();

    assert!(pkg.join("Invoice/Invoice.java").is_file());
}

#[test]
fn test_rerun_overwrites() {
    let temp = TempDir::new().unwrap();
    let pkg = java_package(&temp);
    let entity = pkg.join("Product/Product.java");

    domgen(temp.path())
        .args(["generate", "product", "--path"])
        .arg(&pkg)
        .assert()
        .success();
    fs::write(&entity, "edited").unwrap();

    domgen(temp.path())
        .args(["generate", "product", "--path"])
        .arg(&pkg)
        .assert()
        .success();

    assert_ne!(fs::read_to_string(&entity).unwrap(), "edited");
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let pkg = java_package(&temp);

    domgen(temp.path())
        .args(["generate", "product", "--dry-run", "--path"])
        .arg(&pkg)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("ProductRepository.java"));

    assert!(!pkg.join("Product").exists());
}

#[test]
fn test_json_report() {
    let temp = TempDir::new().unwrap();
    let pkg = java_package(&temp);

    let assert = domgen(temp.path())
        .args(["generate", "product", "--format", "json", "--path"])
        .arg(&pkg)
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["namespace"], "com.example.demo");
    assert_eq!(report["written"].as_array().unwrap().len(), 5);
    assert!(report["failed"].as_array().unwrap().is_empty());
    assert!(report["run_id"].is_string());
    assert_eq!(report["written"][0]["kind"], "DTO");
}

#[test]
fn test_custom_marker() {
    let temp = TempDir::new().unwrap();
    let pkg = temp.path().join("app/src/main/kotlin/io/shop");
    fs::create_dir_all(&pkg).unwrap();

    domgen(temp.path())
        .args(["generate", "cart", "--marker", "src/main/kotlin", "--path"])
        .arg(&pkg)
        .assert()
        .success();

    let dto = fs::read_to_string(pkg.join("Cart/CartDTO.java")).unwrap();
    assert!(dto.contains("package io.shop.Cart;"));
}

#[test]
fn test_marker_from_environment() {
    let temp = TempDir::new().unwrap();
    let pkg = temp.path().join("app/src/main/kotlin/io/shop");
    fs::create_dir_all(&pkg).unwrap();

    domgen(temp.path())
        .env("DOMGEN__GENERATION__MARKER", "src/main/kotlin")
        .args(["generate", "cart", "--path"])
        .arg(&pkg)
        .assert()
        .success();

    assert!(pkg.join("Cart/CartController.java").is_file());
}

#[test]
fn test_templates_directory_override() {
    let temp = TempDir::new().unwrap();
    let pkg = java_package(&temp);
    let templates = temp.path().join("my-templates");
    fs::create_dir_all(&templates).unwrap();
    for kind in ["DTO", "Entity", "Controller", "Service", "Repository"] {
        fs::write(
            templates.join(format!("{kind}.java.hbs")),
            format!("// {kind} {{{{basePackage}}}} {{{{capitalizedDomainName}}}} {{{{lowerCaseDomainName}}}}"),
        )
        .unwrap();
    }

    domgen(temp.path())
        .args(["generate", "lineItem", "--templates"])
        .arg(&templates)
        .arg("--path")
        .arg(&pkg)
        .assert()
        .success();

    let service = fs::read_to_string(pkg.join("LineItem/LineItemService.java")).unwrap();
    assert_eq!(service, "// Service com.example.demo LineItem lineItem");
}

#[test]
fn test_empty_template_is_skipped_with_warning() {
    let temp = TempDir::new().unwrap();
    let pkg = java_package(&temp);
    let templates = temp.path().join("my-templates");
    fs::create_dir_all(&templates).unwrap();
    for kind in ["Entity", "Controller", "Service", "Repository"] {
        fs::write(templates.join(format!("{kind}.java.hbs")), "// {{capitalizedDomainName}}").unwrap();
    }
    fs::write(templates.join("DTO.java.hbs"), "").unwrap();

    domgen(temp.path())
        .args(["generate", "product", "--templates"])
        .arg(&templates)
        .arg("--path")
        .arg(&pkg)
        .assert()
        .success()
        .stdout(predicate::str::contains("DTO: template is empty, skipped"))
        .stdout(predicate::str::contains("4 component(s) generated in"));

    assert!(!pkg.join("Product/ProductDTO.java").exists());
    assert!(pkg.join("Product/ProductService.java").is_file());
}

#[test]
fn test_init_with_templates_then_generate_uses_them() {
    let temp = TempDir::new().unwrap();
    let pkg = java_package(&temp);

    domgen(temp.path())
        .args(["init", "--local", "--with-templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 template(s) written"));

    assert!(temp.path().join(".domgen.toml").is_file());
    fs::write(
        temp.path().join("templates/Entity.java.hbs"),
        "// custom {{capitalizedDomainName}}",
    )
    .unwrap();

    domgen(temp.path())
        .args(["generate", "product", "--path"])
        .arg(&pkg)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(pkg.join("Product/Product.java")).unwrap(),
        "// custom Product"
    );
}

#[test]
fn test_kinds_csv() {
    let temp = TempDir::new().unwrap();

    domgen(temp.path())
        .args(["kinds", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kind,template,output,available"))
        .stdout(predicate::str::contains("Entity,Entity.java.hbs,Example.java,true"))
        .stdout(predicate::str::contains("DTO,DTO.java.hbs,ExampleDTO.java,true"));
}

#[test]
fn test_kinds_reports_missing_templates() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("partial");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("DTO.java.hbs"), "x").unwrap();

    domgen(temp.path())
        .args(["ls", "--format", "json", "--templates"])
        .arg(&templates)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"available\": false"));
}

#[test]
fn test_config_get_and_path() {
    let temp = TempDir::new().unwrap();

    domgen(temp.path())
        .args(["config", "get", "generation.marker"])
        .assert()
        .success()
        .stdout(predicate::str::diff("src/main/java\n"));

    fs::write(
        temp.path().join(".domgen.toml"),
        "[generation]\nmarker = \"src/main/groovy\"\n",
    )
    .unwrap();

    domgen(temp.path())
        .args(["config", "get", "generation.marker"])
        .assert()
        .success()
        .stdout(predicate::str::diff("src/main/groovy\n"));

    domgen(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".domgen.toml"));
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    domgen(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("domgen"));
}
