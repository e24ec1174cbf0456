use smallvec::SmallVec;

/// Tick values of one axis; axes rarely carry more than a dozen.
pub type TickValues = SmallVec<[f64; 16]>;

// Thresholds between the 1, 2, 5 and 10 step multipliers: sqrt(50), sqrt(10), sqrt(2).
const E10: f64 = 7.071_067_811_865_476;
const E5: f64 = 3.162_277_660_168_379_5;
const E2: f64 = 1.414_213_562_373_095_1;

/// `(first index, last index, increment)`; a negative increment means the
/// step is `1 / -increment`, which keeps sub-unit ticks exact.
fn tick_range(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inverse = 10f64.powf(-power) / factor;
        i1 = (start * inverse).round();
        i2 = (stop * inverse).round();
        if i1 / inverse < start {
            i1 += 1.0;
        }
        if i2 / inverse > stop {
            i2 -= 1.0;
        }
        inc = -inverse;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round();
        i2 = (stop / step).round();
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        inc = step;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Evenly spaced "nice" values (1, 2 or 5 times a power of ten) covering
/// `[start, stop]`, aiming for roughly `count` ticks.
///
/// A degenerate range yields the single value `start`.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> TickValues {
    let mut ticks = TickValues::new();
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return ticks;
    }
    if start == stop {
        ticks.push(start);
        return ticks;
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_range(lo, hi, count as f64);
    if !(i2 >= i1) || !inc.is_finite() {
        return ticks;
    }

    let n = (i2 - i1 + 1.0) as usize;
    for i in 0..n {
        let index = i1 + i as f64;
        ticks.push(if inc < 0.0 { index / -inc } else { index * inc });
    }
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Distance between consecutive [`nice_ticks`] values.
#[must_use]
pub fn nice_tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_range(lo, hi, count as f64);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

/// Number of fraction digits needed to print multiples of `step` exactly.
#[must_use]
pub fn precision_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    // Scientific notation gives the decimal exponent without log10 rounding.
    let text = format!("{:e}", step.abs());
    let exponent = text
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse::<i32>().ok())
        .unwrap_or(0);
    usize::try_from(-exponent).unwrap_or(0)
}

/// Formats an axis tick with thousands grouping and fixed precision.
#[must_use]
pub fn format_tick_label(value: f64, precision: usize) -> String {
    let text = format!("{:.precision$}", value.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3 + 1);
    let negative = value < 0.0 && text.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
    if negative {
        grouped.push('-');
    }
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{format_tick_label, nice_tick_step, nice_ticks, precision_for_step};

    #[test]
    fn ticks_use_two_thousand_step_for_price_range() {
        let ticks = nice_ticks(0.0, 25_000.0, 10);
        let expected: Vec<f64> = (0..=12).map(|i| f64::from(i) * 2_000.0).collect();
        assert_eq!(ticks.as_slice(), expected.as_slice());
        assert_eq!(nice_tick_step(0.0, 25_000.0, 10), 2_000.0);
    }

    #[test]
    fn sub_unit_ticks_are_exact() {
        let ticks = nice_ticks(0.0, 1.0, 10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
        assert_eq!(precision_for_step(nice_tick_step(0.0, 1.0, 10)), 1);
    }

    #[test]
    fn degenerate_range_yields_single_tick() {
        assert_eq!(nice_ticks(0.0, 0.0, 10).as_slice(), &[0.0]);
        assert!(nice_ticks(0.0, 10.0, 0).is_empty());
    }

    #[test]
    fn labels_group_thousands() {
        assert_eq!(format_tick_label(0.0, 0), "0");
        assert_eq!(format_tick_label(2_000.0, 0), "2,000");
        assert_eq!(format_tick_label(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_tick_label(0.5, 1), "0.5");
        assert_eq!(format_tick_label(-12_500.0, 0), "-12,500");
    }
}
