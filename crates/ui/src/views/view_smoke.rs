use drill_core::model::{GridRange, OperatorSet, PracticeDefaults, ProblemSettings};

use super::test_harness::{ViewKind, setup_view_harness};

fn seeded_defaults(ops: &str) -> PracticeDefaults {
    PracticeDefaults {
        problems: ProblemSettings::new(4, 1, 10, OperatorSet::parse(ops).unwrap()).unwrap(),
        seed: Some(17),
        ..PracticeDefaults::default()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn problems_view_smoke_renders_settings() {
    let mut harness = setup_view_harness(ViewKind::Problems, seeded_defaults("+"), false);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Generate"), "missing generate button in {html}");
    assert!(html.contains("Addition"), "missing operator toggle in {html}");
    assert!(html.contains("00:00.00"), "missing timer in {html}");
    assert!(!html.contains("class=\"problem-row\""), "unexpected rows in {html}");
    assert!(!html.contains("nearest hundredth"), "unexpected hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn problems_view_smoke_renders_generated_batch() {
    let mut harness = setup_view_harness(ViewKind::Problems, seeded_defaults("*/"), true);
    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("class=\"problem-row\"").count(), 4, "{html}");
    assert!(html.contains("id=\"problem-3\""), "missing last input in {html}");
    assert!(html.contains("nearest hundredth"), "missing division hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn table_view_smoke_renders_grid() {
    let defaults = PracticeDefaults {
        grid: GridRange::new(2, 5).unwrap(),
        ..PracticeDefaults::default()
    };
    let mut harness = setup_view_harness(ViewKind::Table, defaults, false);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Multiplication table"), "missing title in {html}");
    assert_eq!(html.matches("id=\"cell-").count(), 9, "{html}");
    assert!(html.contains("id=\"cell-5-5\""), "missing last cell in {html}");
    assert!(!html.contains("id=\"cell-2-"), "corner row rendered in {html}");
}
