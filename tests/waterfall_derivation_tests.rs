use approx::assert_relative_eq;
use rust_decimal::Decimal;
use waterfall_chart::ChartError;
use waterfall_chart::api::{BarLabels, WaterfallChart};
use waterfall_chart::core::{BarKind, StepSeries};

fn sample_chart() -> WaterfallChart {
    WaterfallChart::new(vec![80.0, 70.0, 90.0, 85.0, 60.0, 50.0]).expect("valid series")
}

#[test]
fn series_rejects_fewer_than_two_values() {
    let err = StepSeries::new(vec![42.0]).expect_err("single value must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));

    let err = WaterfallChart::new(Vec::new()).expect_err("empty series must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn series_rejects_non_finite_values() {
    let err = StepSeries::new(vec![1.0, f64::NAN, 3.0]).expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn series_rejects_changes_that_overflow() {
    let err = WaterfallChart::new(vec![-1e308, 1e308]).expect_err("inf delta must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));

    let err = StepSeries::new(vec![0.0, 1e308, -1e308]).expect_err("-inf delta must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn deltas_match_reference_example() {
    let chart = sample_chart();
    assert_eq!(chart.deltas(), vec![-10.0, 20.0, -5.0, -25.0, -10.0]);
}

#[test]
fn bars_follow_start_steps_end_layout() {
    let bars = sample_chart().bars().expect("bars");
    assert_eq!(bars.len(), 7);

    let start = &bars[0];
    assert_eq!(start.kind, BarKind::Start);
    assert_eq!((start.bottom, start.top), (0.0, 80.0));

    let end = &bars[6];
    assert_eq!(end.kind, BarKind::End);
    assert_eq!((end.bottom, end.top), (0.0, 50.0));
    assert_eq!(end.name, "Final Value");

    let extents: Vec<(f64, f64)> = bars[1..6].iter().map(|b| (b.bottom, b.top)).collect();
    assert_eq!(
        extents,
        vec![(70.0, 80.0), (70.0, 90.0), (85.0, 90.0), (60.0, 85.0), (50.0, 60.0)]
    );

    let kinds: Vec<BarKind> = bars[1..6].iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BarKind::Decrease,
            BarKind::Increase,
            BarKind::Decrease,
            BarKind::Decrease,
            BarKind::Decrease,
        ]
    );
}

#[test]
fn zero_delta_counts_as_increase() {
    let bars = WaterfallChart::new(vec![10.0, 10.0])
        .expect("chart")
        .bars()
        .expect("bars");
    assert_eq!(bars[1].kind, BarKind::Increase);
    assert_eq!(bars[1].height(), 0.0);
}

#[test]
fn negative_boundary_values_extend_below_baseline() {
    let bars = WaterfallChart::new(vec![-20.0, 5.0])
        .expect("chart")
        .bars()
        .expect("bars");
    assert_eq!((bars[0].bottom, bars[0].top), (-20.0, 0.0));
    assert_eq!((bars[2].bottom, bars[2].top), (0.0, 5.0));
}

#[test]
fn default_names_are_positional_indices() {
    let chart = sample_chart();
    assert_eq!(chart.step_names(), ["0", "1", "2", "3", "4", "5"]);
    assert_eq!(chart.metric_name(), "Value");
    assert_eq!(chart.last_step_label(), "Final Value");
}

#[test]
fn custom_names_and_labels_are_applied() {
    let chart = WaterfallChart::new(vec![100.0, 120.0, 90.0])
        .expect("chart")
        .with_step_names(["Q1", "Q2", "Q3"])
        .expect("names")
        .with_metric_name("Revenue")
        .with_last_step_label("Total");

    let bars = chart.bars().expect("bars");
    let names: Vec<&str> = bars.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Q1", "Q2", "Q3", "Total"]);
    assert_eq!(chart.metric_name(), "Revenue");
}

#[test]
fn empty_overrides_keep_defaults() {
    let chart = sample_chart()
        .with_step_names(Vec::<String>::new())
        .expect("empty names")
        .with_metric_name("")
        .with_last_step_label("");
    assert_eq!(chart.step_names()[0], "0");
    assert_eq!(chart.metric_name(), "Value");
    assert_eq!(chart.last_step_label(), "Final Value");
}

#[test]
fn step_name_count_must_match_values() {
    let err = sample_chart()
        .with_step_names(["a", "b"])
        .expect_err("short name list must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn default_value_labels_format_deltas_and_totals() {
    let bars = sample_chart()
        .labeled_bars(&BarLabels::Values, 0)
        .expect("labels");
    let labels: Vec<&str> = bars.iter().filter_map(|b| b.label.as_deref()).collect();
    assert_eq!(labels, ["80", "-10", "20", "-5", "-25", "-10", "50"]);
}

#[test]
fn fractional_deltas_round_to_label_precision() {
    let chart = WaterfallChart::new(vec![0.0, -10.7]).expect("series");

    let bars = chart.labeled_bars(&BarLabels::Values, 0).expect("labels");
    let labels: Vec<&str> = bars.iter().filter_map(|b| b.label.as_deref()).collect();
    assert_eq!(labels, ["0", "-11", "-11"]);

    let bars = chart.labeled_bars(&BarLabels::Values, 1).expect("labels");
    let labels: Vec<&str> = bars.iter().filter_map(|b| b.label.as_deref()).collect();
    assert_eq!(labels, ["0.0", "-10.7", "-10.7"]);
}

#[test]
fn label_modes_cover_fixed_hidden_and_custom() {
    let chart = sample_chart();

    let hidden = chart.labeled_bars(&BarLabels::Hidden, 0).expect("hidden");
    assert!(hidden.iter().all(|b| b.label.is_none()));

    let fixed = chart
        .labeled_bars(&BarLabels::from("n/a"), 0)
        .expect("fixed");
    assert!(fixed.iter().all(|b| b.label.as_deref() == Some("n/a")));

    let custom: Vec<String> = (0..7).map(|i| format!("#{i}")).collect();
    let labeled = chart
        .labeled_bars(&BarLabels::Custom(custom), 0)
        .expect("custom");
    assert_eq!(labeled[6].label.as_deref(), Some("#6"));

    let err = chart
        .labeled_bars(&BarLabels::Custom(vec!["x".to_owned()]), 0)
        .expect_err("wrong label count must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn decimal_inputs_are_converted() {
    let chart = WaterfallChart::from_decimals(&[
        Decimal::new(1_050, 1),
        Decimal::new(1_125, 1),
        Decimal::new(990, 1),
    ])
    .expect("decimal chart");

    let deltas = chart.deltas();
    assert_relative_eq!(deltas[0], 7.5, epsilon = 1e-9);
    assert_relative_eq!(deltas[1], -13.5, epsilon = 1e-9);
}

#[test]
fn series_json_round_trip_enforces_minimum_length() {
    let series: StepSeries = serde_json::from_str("[1.0, 2.5, 4.0]").expect("valid series json");
    assert_eq!(series.values(), [1.0, 2.5, 4.0]);

    assert!(serde_json::from_str::<StepSeries>("[1.0]").is_err());
}

#[test]
fn only_first_and_appended_bars_are_boundaries() {
    let bars = sample_chart().bars().expect("bars");
    let boundaries: Vec<usize> = bars
        .iter()
        .filter(|bar| bar.kind.is_boundary())
        .map(|bar| bar.index)
        .collect();
    assert_eq!(boundaries, vec![0, 6]);
}
