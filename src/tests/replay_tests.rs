//! Tests for script replay.

use zoop_view::{ViewError, ViewWindow};

use crate::config::ZoopConfig;
use crate::contact::PointerId;
use crate::error::ZoopError;
use crate::replay::{run_script, ReplayScript};

const DRAG_THEN_WHEEL: &str = r#"{
    "view_box": "0 0 100 100",
    "displayed": { "width": 100.0, "height": 100.0 },
    "events": [
        { "type": "pointer_down", "id": 1,
          "offset": { "x": 60.0, "y": 50.0 }, "client": { "x": 60.0, "y": 50.0 } },
        { "type": "pointer_move", "id": 1,
          "offset": { "x": 50.0, "y": 50.0 }, "client": { "x": 50.0, "y": 50.0 } },
        { "type": "pointer_up", "id": 1 },
        { "type": "pointer_up", "id": 7 },
        { "type": "wheel", "delta_y": 1.0, "offset": { "x": 50.0, "y": 50.0 } }
    ]
}"#;

#[test]
fn test_replay_records_each_step() {
    let script = ReplayScript::from_json(DRAG_THEN_WHEEL).unwrap();
    let report = run_script(&script, &ZoopConfig::default()).unwrap();

    let kinds: Vec<_> = report.steps.iter().map(|step| step.kind).collect();
    assert_eq!(
        kinds,
        vec!["pointer_down", "pointer_move", "pointer_up", "pointer_up", "wheel"]
    );

    assert_eq!(report.steps[0].window, ViewWindow::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(report.steps[1].window, ViewWindow::new(10.0, 0.0, 100.0, 100.0));
    assert_eq!(report.steps[3].unknown_contact, Some(PointerId(7)));
    assert_eq!(report.final_window, ViewWindow::new(12.5, 2.5, 95.0, 95.0));
}

#[test]
fn test_replay_uses_given_zoom_step() {
    let script = ReplayScript::from_json(DRAG_THEN_WHEEL).unwrap();
    let config = ZoopConfig {
        zoom_step: 0.5,
        ..ZoopConfig::default()
    };

    let report = run_script(&script, &config).unwrap();
    assert_eq!(report.final_window, ViewWindow::new(35.0, 25.0, 50.0, 50.0));
}

#[test]
fn test_replay_rejects_invalid_start() {
    let mut script = ReplayScript::from_json(DRAG_THEN_WHEEL).unwrap();
    script.view_box = "0 0 100".to_string();

    let result = run_script(&script, &ZoopConfig::default());
    assert!(matches!(
        result,
        Err(ZoopError::View(ViewError::TokenCount { found: 3 }))
    ));
}

#[test]
fn test_malformed_script_is_reported() {
    let result = ReplayScript::from_json(r#"{ "view_box": "0 0 1 1" }"#);
    assert!(matches!(result, Err(ZoopError::Script(_))));
}

#[test]
fn test_embedded_config_is_parsed() {
    let script = ReplayScript::from_json(
        r#"{
            "view_box": "0 0 10 10",
            "displayed": { "width": 10.0, "height": 10.0 },
            "config": { "version": 1, "min_extent": 9.6 },
            "events": []
        }"#,
    )
    .unwrap();

    let config = script.config.clone().unwrap();
    assert_eq!(config.min_extent, Some(9.6));

    let report = run_script(&script, &config).unwrap();
    assert!(report.steps.is_empty());
    assert_eq!(report.final_window, ViewWindow::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_bundled_demo_runs() {
    let script = ReplayScript::from_json(include_str!("../../demos/drag_and_pinch.json")).unwrap();
    let config = script.config.clone().unwrap_or_default();
    let report = run_script(&script, &config).unwrap();

    assert_eq!(report.steps.len(), script.events.len());
    assert!(report.final_window.validate().is_ok());
    assert!(report.steps.iter().all(|step| step.unknown_contact.is_none()));
}
