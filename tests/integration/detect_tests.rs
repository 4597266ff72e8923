//! Integration tests for the detection gate.

use yarn_start_buildpack::config::DetectOptions;
use yarn_start_buildpack::detect::{detect, DetectOutcome, Requirement};

use crate::integration::fixtures::{config, start_scripts, TestProject};

#[test]
fn test_detects_yarn_project_in_custom_path() {
    let project = TestProject::new();
    project.write_yarn_lock("custom");
    project.write_package_json("custom", &start_scripts());

    let cfg = config(&[("BP_NODE_PROJECT_PATH", "custom")]).unwrap();
    let outcome = detect(&project.path(), &cfg, DetectOptions::default()).unwrap();

    assert_eq!(
        outcome,
        DetectOutcome::Pass(vec![
            Requirement::launch("node"),
            Requirement::launch("yarn"),
            Requirement::launch("node_modules"),
        ])
    );
}

#[test]
fn test_detects_watchexec_under_live_reload() {
    let project = TestProject::new();
    project.write_yarn_lock("");
    project.write_package_json("", &start_scripts());

    let cfg = config(&[("BP_LIVE_RELOAD_ENABLED", "1")]).unwrap();
    let outcome = detect(&project.path(), &cfg, DetectOptions::default()).unwrap();

    match outcome {
        DetectOutcome::Pass(reqs) => {
            assert_eq!(reqs.last(), Some(&Requirement::launch("watchexec")));
            assert_eq!(reqs.len(), 4);
        }
        other => panic!("expected pass, got {other:?}"),
    }
}

#[test]
fn test_no_yarn_lock_is_not_an_error() {
    let project = TestProject::new();
    project.write_package_json("", &start_scripts());

    let outcome = detect(&project.path(), &config(&[]).unwrap(), DetectOptions::default()).unwrap();
    assert!(!outcome.passed());
}

#[test]
fn test_yarn_lock_outside_project_path_does_not_count() {
    let project = TestProject::new();
    project.write_yarn_lock("");
    project.write_package_json("custom", &start_scripts());

    let cfg = config(&[("BP_NODE_PROJECT_PATH", "custom")]).unwrap();
    let outcome = detect(&project.path(), &cfg, DetectOptions::default()).unwrap();
    assert!(!outcome.passed());
}

#[test]
fn test_missing_project_path_is_an_error() {
    let project = TestProject::new();
    project.write_yarn_lock("");

    let cfg = config(&[("BP_NODE_PROJECT_PATH", "nope")]).unwrap();
    let err = detect(&project.path(), &cfg, DetectOptions::default()).unwrap_err();
    assert!(err.to_string().contains("[nope]"));
}
