use approx::assert_relative_eq;
use waterfall_chart::ChartError;
use waterfall_chart::api::{
    Axes, BarLabels, BarStyle, ColorConfig, DEFAULT_TITLE_FONT_SIZE_PX, LineStyle, PlotOptions,
    TextArtist, WaterfallChart,
};
use waterfall_chart::core::{BarKind, Viewport};
use waterfall_chart::render::{Color, LineStrokeStyle, TextHAlign, TextVAlign};

fn sample_chart() -> WaterfallChart {
    WaterfallChart::new(vec![80.0, 70.0, 90.0, 85.0, 60.0, 50.0]).expect("valid series")
}

#[test]
fn plot_without_surface_creates_one() {
    let axes = sample_chart()
        .plot(None, &PlotOptions::default().with_title("Funnel"))
        .expect("plot");

    assert_eq!(axes.bars().len(), 7);
    assert_eq!(axes.lines().len(), 6);
    assert_eq!(axes.texts().len(), 7);
    assert_eq!(axes.title(), "Funnel");
    assert_eq!(axes.y_label(), "Value");

    let tick_names: Vec<&str> = axes.x_ticks().iter().map(|(_, n)| n.as_str()).collect();
    assert_eq!(tick_names, ["0", "1", "2", "3", "4", "5", "Final Value"]);
}

#[test]
fn plot_sets_waterfall_limits() {
    let axes = sample_chart()
        .plot(None, &PlotOptions::default())
        .expect("plot");

    assert_eq!(axes.x_limits(), (-0.5, 6.5));
    let (low, high) = axes.y_limits();
    assert_eq!(low, 0.0);
    assert_relative_eq!(high, 99.0, epsilon = 1e-9);
}

#[test]
fn connectors_run_between_bar_centers_at_running_total() {
    let axes = sample_chart()
        .plot(None, &PlotOptions::default())
        .expect("plot");

    let segments: Vec<(f64, f64, f64, f64)> = axes
        .lines()
        .iter()
        .map(|l| (l.x1, l.y1, l.x2, l.y2))
        .collect();
    assert_eq!(
        segments,
        vec![
            (0.0, 80.0, 1.0, 80.0),
            (1.0, 70.0, 2.0, 70.0),
            (2.0, 90.0, 3.0, 90.0),
            (3.0, 85.0, 4.0, 85.0),
            (4.0, 60.0, 5.0, 60.0),
            (5.0, 50.0, 6.0, 50.0),
        ]
    );
    assert!(
        axes.lines()
            .iter()
            .all(|l| l.stroke == LineStrokeStyle::Dashed)
    );
}

#[test]
fn value_labels_sit_above_running_total() {
    let axes = sample_chart()
        .plot(None, &PlotOptions::default())
        .expect("plot");

    let first = &axes.texts()[0];
    assert_eq!(first.text, "80");
    assert_relative_eq!(first.y, 81.6, epsilon = 1e-9);
    assert_eq!(first.h_align, TextHAlign::Center);
    assert_eq!(first.v_align, TextVAlign::Baseline);

    let decrease = &axes.texts()[1];
    assert_eq!(decrease.text, "-10");
    assert_eq!(
        decrease.color,
        ColorConfig::default_text_color(BarKind::Decrease)
    );
}

#[test]
fn hidden_labels_emit_no_texts() {
    let axes = sample_chart()
        .plot(None, &PlotOptions::default().with_bar_labels(false))
        .expect("plot");
    assert!(axes.texts().is_empty());
}

#[test]
fn default_palette_matches_bar_roles() {
    let axes = sample_chart()
        .plot(None, &PlotOptions::default())
        .expect("plot");
    let fills: Vec<Color> = axes.bars().iter().map(|b| b.fill_color).collect();

    assert_eq!(fills[0], Color::rgb(0.0, 0.75, 0.75));
    assert_eq!(fills[1], Color::named("salmon").expect("salmon"));
    assert_eq!(fills[2], Color::named("seagreen").expect("seagreen"));
    assert_eq!(fills[6], Color::named("grey").expect("grey"));
}

#[test]
fn category_color_wins_over_generic_bar_color() {
    let red = Color::named("red").expect("red");
    let blue = Color::named("blue").expect("blue");
    let options = PlotOptions::default()
        .with_colors(ColorConfig {
            bar_positive: Some(blue),
            ..ColorConfig::default()
        })
        .with_bar_style(BarStyle {
            color: Some(red),
            ..BarStyle::default()
        });

    let axes = sample_chart().plot(None, &options).expect("plot");
    let fills: Vec<Color> = axes.bars().iter().map(|b| b.fill_color).collect();

    assert_eq!(fills[2], blue, "increase uses its category override");
    assert_eq!(fills[1], red, "decrease falls back to the generic color");
    assert_eq!(fills[0], red, "start falls back to the generic color");
    assert_eq!(fills[6], red, "end falls back to the generic color");
}

#[test]
fn bar_and_line_style_are_forwarded() {
    let options = PlotOptions::default()
        .with_bar_style(BarStyle {
            width: 0.8,
            edge_color: Some(Color::named("black").expect("black")),
            edge_width: 1.5,
            alpha: Some(0.5),
            ..BarStyle::default()
        })
        .with_line_style(LineStyle {
            color: Color::named("navy").expect("navy"),
            stroke: LineStrokeStyle::Dotted,
            width: 2.0,
            alpha: None,
        });

    let axes = sample_chart().plot(None, &options).expect("plot");
    let bar = axes.bars()[3];
    assert_eq!(bar.width, 0.8);
    assert_eq!(bar.edge_width, 1.5);
    assert_eq!(bar.fill_color.alpha, 0.5);

    let line = axes.lines()[0];
    assert_eq!(line.stroke, LineStrokeStyle::Dotted);
    assert_eq!(line.width_px, 2.0);
    assert_eq!(line.color, Color::named("navy").expect("navy"));
}

#[test]
fn plot_on_existing_surface_appends() {
    let mut axes = Axes::default();
    axes.add_text(TextArtist {
        x: 0.0,
        y: 10.0,
        text: "note".to_owned(),
        color: Color::rgb(0.0, 0.0, 0.0),
        font_size_px: 10.0,
        h_align: TextHAlign::Left,
        v_align: TextVAlign::Baseline,
    })
    .expect("add text");

    let chart = sample_chart();
    chart
        .plot_on(&mut axes, &PlotOptions::default())
        .expect("first plot");
    assert_eq!(axes.texts()[0].text, "note");
    assert_eq!(axes.texts().len(), 8);

    let axes = chart
        .plot(Some(axes), &PlotOptions::default())
        .expect("second plot");
    assert_eq!(axes.bars().len(), 14);
    assert_eq!(axes.lines().len(), 12);
}

#[test]
fn returned_surface_accepts_further_drawing() {
    let mut axes = sample_chart()
        .plot(None, &PlotOptions::default())
        .expect("plot");
    axes.set_title("Updated", 20.0).expect("title");
    axes.set_grid(true);

    assert_eq!(axes.title(), "Updated");
    assert!(axes.grid());
}

#[test]
fn plotting_twice_on_fresh_surfaces_is_identical() {
    let chart = sample_chart();
    let options = PlotOptions::default().with_title("Same");

    let first = chart.plot(None, &options).expect("first");
    let second = chart.plot(None, &options).expect("second");
    assert_eq!(first, second);
}

#[test]
fn failed_plot_leaves_surface_untouched() {
    let chart = sample_chart();
    let mut axes = chart
        .plot(None, &PlotOptions::default())
        .expect("plot");
    let before = axes.clone();

    let bad_labels = PlotOptions::default()
        .with_title("should not apply")
        .with_bar_labels(BarLabels::Custom(vec!["only one".to_owned()]));
    let err = chart
        .plot_on(&mut axes, &bad_labels)
        .expect_err("label count mismatch");
    assert!(matches!(err, ChartError::InvalidInput(_)));
    assert_eq!(axes, before);

    let bad_width = PlotOptions::default().with_bar_style(BarStyle {
        width: 0.0,
        ..BarStyle::default()
    });
    let err = chart
        .plot_on(&mut axes, &bad_width)
        .expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidInput(_)));
    assert_eq!(axes, before);
}

#[test]
fn overflowing_value_limits_leave_surface_untouched() {
    let mut axes = Axes::default();
    axes.set_title("keep", 20.0).expect("title");
    axes.set_y_label("units");
    let before = axes.clone();

    let chart = WaterfallChart::new(vec![0.0, 1.7e308]).expect("finite deltas");
    let err = chart
        .plot_on(&mut axes, &PlotOptions::default().with_title("replaced"))
        .expect_err("1.1x headroom overflows");
    assert!(matches!(err, ChartError::InvalidInput(_)));
    assert_eq!(axes, before);
    assert_eq!(axes.title(), "keep");
    assert!(axes.is_empty());
}

#[test]
fn large_finite_values_plot_and_render() {
    let axes = WaterfallChart::new(vec![-1e300, 1e300])
        .expect("series")
        .plot(None, &PlotOptions::default())
        .expect("plot");

    assert!(axes.texts().iter().all(|text| text.y.is_finite()));
    let frame = axes
        .build_render_frame(Viewport::new(1000, 500))
        .expect("frame");
    assert!(frame.validate().is_ok());
}

#[test]
fn plot_resets_title_size_to_default() {
    let mut axes = Axes::default();
    axes.set_title("big", 20.0).expect("title");

    sample_chart()
        .plot_on(&mut axes, &PlotOptions::default().with_title("Funnel"))
        .expect("plot");
    assert_eq!(axes.title(), "Funnel");
    assert_eq!(axes.title_font_size_px(), DEFAULT_TITLE_FONT_SIZE_PX);
}
