mod common;

use chart_inference::{
    chart::ChartType,
    session::{ChartSession, OverrideMode},
};

use common::{category_revenue, monthly_engagement, views_downloads};

#[test]
fn new_result_clears_override() {
    let mut session = ChartSession::new();
    session.receive(category_revenue(5));
    assert!(session.set_override(ChartType::Bar));
    assert_eq!(session.override_type(), Some(ChartType::Bar));

    session.receive(monthly_engagement(5));
    assert_eq!(session.override_type(), None);
    assert_eq!(session.mode(), OverrideMode::Auto);
    let plan = session.plan().expect("chart");
    assert_eq!(plan.chart_type, ChartType::Area);
}

#[test]
fn override_persists_across_renders_of_the_same_result() {
    let mut session = ChartSession::new();
    session.receive(category_revenue(5));
    assert!(session.set_override(ChartType::Donut));
    for _ in 0..3 {
        let plan = session.plan().expect("chart");
        assert_eq!(plan.chart_type, ChartType::Donut);
        assert_eq!(plan.selection.auto_type, ChartType::Pie);
    }
    assert_eq!(session.override_type(), Some(ChartType::Donut));
}

#[test]
fn reset_restores_automatic_choice() {
    let mut session = ChartSession::new();
    session.receive(views_downloads(10));
    assert!(session.set_override(ChartType::StackedBar));
    session.reset();
    assert_eq!(session.mode(), OverrideMode::Auto);
    assert_eq!(session.plan().expect("chart").chart_type, ChartType::Scatter);
}

#[test]
fn structurally_identical_results_each_reset() {
    let mut session = ChartSession::new();
    let first = session.receive(category_revenue(5));
    assert!(session.set_override(ChartType::Line));
    let second = session.receive(category_revenue(5));
    assert!(second > first);
    assert_eq!(session.result_id(), Some(second));
    assert_eq!(session.override_type(), None);
}

#[test]
fn unavailable_override_is_rejected() {
    let mut session = ChartSession::new();
    session.receive(category_revenue(5));
    assert!(!session.set_override(ChartType::Scatter));
    assert!(!session.set_override(ChartType::Radar));
    assert_eq!(session.mode(), OverrideMode::Auto);
    assert_eq!(session.plan().expect("chart").chart_type, ChartType::Pie);
}

#[test]
fn scatter_override_switches_value_columns() {
    let mut session = ChartSession::new();
    session.receive(views_downloads(4));
    assert!(session.set_override(ChartType::Bar));
    let plan = session.plan().expect("chart");
    assert_eq!(plan.selection.value_columns, vec!["VIEWS", "DOWNLOADS"]);
    assert_eq!(plan.selection.label_column, "VIEWS");
    assert_eq!(plan.records[1].label, "3");
}
