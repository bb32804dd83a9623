use proptest::prelude::*;
use waterfall_chart::api::{PlotOptions, WaterfallChart};
use waterfall_chart::core::{BarKind, Viewport};

proptest! {
    #[test]
    fn bar_count_is_values_plus_one(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 2..64)
    ) {
        let n = values.len();
        let chart = WaterfallChart::new(values).expect("valid series");
        let bars = chart.bars().expect("bars");

        prop_assert_eq!(bars.len(), n + 1);
        prop_assert_eq!(bars[0].kind, BarKind::Start);
        prop_assert_eq!(bars[n].kind, BarKind::End);
        prop_assert_eq!(chart.deltas().len(), n - 1);
    }

    #[test]
    fn intermediate_deltas_sum_to_total_change(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 2..64)
    ) {
        let first = values[0];
        let last = values[values.len() - 1];
        let chart = WaterfallChart::new(values).expect("valid series");

        let sum: f64 = chart.deltas().iter().sum();
        let tolerance = 1e-6 * (1.0 + first.abs().max(last.abs())) * chart.deltas().len() as f64;
        prop_assert!((sum - (last - first)).abs() <= tolerance);
    }

    #[test]
    fn classification_and_extents_follow_deltas(
        values in prop::collection::vec(-10_000.0f64..10_000.0, 2..64)
    ) {
        let chart = WaterfallChart::new(values.clone()).expect("valid series");
        let bars = chart.bars().expect("bars");

        for (i, bar) in bars.iter().enumerate().skip(1).take(values.len() - 1) {
            let (previous, current) = (values[i - 1], values[i]);
            let expected = if current - previous >= 0.0 {
                BarKind::Increase
            } else {
                BarKind::Decrease
            };
            prop_assert_eq!(bar.kind, expected);
            prop_assert_eq!(bar.bottom, previous.min(current));
            prop_assert_eq!(bar.top, previous.max(current));
            prop_assert_eq!(bar.cumulative, current);
        }
        prop_assert!(bars.iter().all(|bar| bar.bottom <= bar.top));
    }

    #[test]
    fn rendered_frames_are_deterministic_and_valid(
        values in prop::collection::vec(-5_000.0f64..5_000.0, 2..48)
    ) {
        let chart = WaterfallChart::new(values).expect("valid series");
        let options = PlotOptions::default();
        let viewport = Viewport::new(1280, 720);

        let first = chart
            .plot(None, &options)
            .expect("first plot")
            .build_render_frame(viewport)
            .expect("first frame");
        let second = chart
            .plot(None, &options)
            .expect("second plot")
            .build_render_frame(viewport)
            .expect("second frame");

        prop_assert!(first.validate().is_ok());
        prop_assert_eq!(&first, &second);
    }
}
