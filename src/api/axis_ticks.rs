pub(super) const AXIS_VALUE_TARGET_SPACING_PX: f64 = 48.0;
pub(super) const AXIS_VALUE_MIN_TICKS: usize = 2;
pub(super) const AXIS_VALUE_MAX_TICKS: usize = 10;

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Rounds a raw step up to 1, 2 or 5 times a power of ten.
pub(super) fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick values inside `[low, high]` on a nice step with roughly `target_count` ticks.
pub(super) fn value_ticks(low: f64, high: f64, target_count: usize) -> (Vec<f64>, f64) {
    if !low.is_finite() || !high.is_finite() || high <= low || target_count < 2 {
        return (Vec::new(), 1.0);
    }
    let span = high - low;
    if !span.is_finite() {
        return (Vec::new(), 1.0);
    }
    let step = nice_step(span / (target_count - 1) as f64);
    let first = (low / step).ceil();
    let last = (high / step).floor();
    if !(last - first).is_finite() || last - first > (target_count * 4) as f64 {
        return (Vec::new(), step);
    }
    let ticks = (first as i64..=last as i64)
        .map(|index| {
            let value = index as f64 * step;
            if value == 0.0 { 0.0 } else { value }
        })
        .collect();
    (ticks, step)
}

/// Decimal places needed to print ticks on `step` without noise.
pub(super) fn step_precision(step: f64) -> u8 {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    (-step.log10().floor()).clamp(0.0, 12.0) as u8
}
