mod common;

use std::fs;

use predicates::prelude::*;

use common::TestFixture;

#[test]
fn render_writes_page_with_list_and_chart() {
    let fixture = TestFixture::new();
    let pubs = fixture.sample_pubs();
    let output = fixture.path().join("publications.html");

    pubpage!()
        .arg("render")
        .arg(&pubs)
        .arg("--output")
        .arg(&output)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 3 publication(s)"));

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("Showing 3 publication(s)."));
    assert!(page.contains("A Systems Paper"));
    assert!(page.contains("<svg"));
    // Two valid years: 2024 and 2023; the "n/a" record charts nothing
    assert_eq!(page.matches("<rect").count(), 2);
    // Filter options: all + paper + talk
    assert_eq!(page.matches("<option").count(), 3);
}

#[test]
fn render_applies_initial_filter_to_list_only() {
    let fixture = TestFixture::new();
    let pubs = fixture.sample_pubs();
    let output = fixture.path().join("filtered.html");

    pubpage!()
        .arg("render")
        .arg(&pubs)
        .arg("--output")
        .arg(&output)
        .arg("--filter")
        .arg("paper")
        .arg("--no-config")
        .assert()
        .success();

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("Showing 1 publication(s)."));
    assert!(!page.contains("An Invited Talk"));
    // Chart always reflects the full dataset
    assert_eq!(page.matches("<rect").count(), 2);
}

#[test]
fn render_missing_source_is_a_data_error() {
    let fixture = TestFixture::new();

    pubpage!()
        .arg("render")
        .arg(fixture.path().join("absent.json"))
        .arg("--no-config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn render_non_array_document_is_a_data_error() {
    let fixture = TestFixture::new();
    let pubs = fixture.create_file("pubs.json", r#"{"publications": []}"#);

    pubpage!()
        .arg("render")
        .arg(&pubs)
        .arg("--no-config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must be a JSON array"));
}

#[test]
fn render_uses_config_highlighting() {
    let fixture = TestFixture::new();
    let pubs = fixture.sample_pubs();
    let config = fixture.create_file(
        "pubpage.toml",
        r#"
        [list]
        highlight_authors = ["ada lovelace"]
        "#,
    );
    let output = fixture.path().join("highlighted.html");

    pubpage!()
        .arg("render")
        .arg(&pubs)
        .arg("--output")
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("<strong>Ada Lovelace</strong>"));
    assert!(!page.contains("<strong>Charles Babbage</strong>"));
}

#[test]
fn render_quiet_suppresses_stdout() {
    let fixture = TestFixture::new();
    let pubs = fixture.sample_pubs();
    let output = fixture.path().join("quiet.html");

    pubpage!()
        .arg("render")
        .arg(&pubs)
        .arg("--output")
        .arg(&output)
        .arg("--quiet")
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(output.exists());
}

#[test]
fn render_custom_template_missing_region_is_a_config_error() {
    let fixture = TestFixture::new();
    let pubs = fixture.sample_pubs();
    let template = fixture.create_file("host.html", "<html><!-- region:status --></html>");
    let config_content = format!("[page]\ntemplate = {:?}\n", template.display().to_string());
    let config = fixture.create_file("pubpage.toml", &config_content);

    pubpage!()
        .arg("render")
        .arg(&pubs)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing output region"));
}

#[test]
fn render_escapes_malicious_fields_end_to_end() {
    let fixture = TestFixture::new();
    let pubs = fixture.create_file(
        "evil.json",
        r#"[{"title": "<script>alert(1)</script>", "year": 2020}]"#,
    );
    let output = fixture.path().join("escaped.html");

    pubpage!()
        .arg("render")
        .arg(&pubs)
        .arg("--output")
        .arg(&output)
        .arg("--no-config")
        .assert()
        .success();

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!page.contains("<script>alert(1)</script>"));
}

#[test]
fn render_empty_array_shows_no_match_and_chart_fallback() {
    let fixture = TestFixture::new();
    let pubs = fixture.create_file("empty.json", "[]");
    let output = fixture.path().join("empty.html");

    pubpage!()
        .arg("render")
        .arg(&pubs)
        .arg("--output")
        .arg(&output)
        .arg("--no-config")
        .assert()
        .success();

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.contains("No publications match this filter."));
    assert!(page.contains("No year data found."));
    assert_eq!(page.matches("<rect").count(), 0);
}
