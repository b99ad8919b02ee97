mod common;

use std::fs;

use predicates::prelude::*;

use common::TestFixture;

#[test]
fn init_creates_config_file() {
    let fixture = TestFixture::new();
    let output = fixture.path().join("pubpage.toml");

    pubpage!()
        .arg("init")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("[page]"));
    assert!(content.contains("[list]"));
    assert!(content.contains("[chart]"));
    assert!(content.contains("highlight_authors"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let fixture = TestFixture::new();
    let output = fixture.create_file("pubpage.toml", "# existing");

    pubpage!()
        .arg("init")
        .arg("--output")
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "# existing");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    let output = fixture.create_file("pubpage.toml", "# existing");

    pubpage!()
        .arg("init")
        .arg("--output")
        .arg(&output)
        .arg("--force")
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("[page]"));
}

#[test]
fn generated_config_is_loadable_by_render() {
    let fixture = TestFixture::new();
    let config = fixture.path().join("pubpage.toml");

    pubpage!()
        .arg("init")
        .arg("--output")
        .arg(&config)
        .assert()
        .success();

    let pubs = fixture.sample_pubs();
    let page_out = fixture.path().join("out.html");

    pubpage!()
        .arg("render")
        .arg(&pubs)
        .arg("--output")
        .arg(&page_out)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(page_out.exists());
}
