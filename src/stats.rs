//! Descriptive statistics over a single series.
//!
//! Every function borrows the series and returns a [`StatsError`] instead of
//! panicking on empty input. Sums go through [`fsum`], which rounds the exact
//! sum once, so `mean` and `variance` do not drift with the input order.

use thiserror::Error;

/// Failure of a statistic on an unsuitable series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("cannot compute a statistic over an empty series")]
    EmptyInput,
    #[error("series of length 1 has no degrees of freedom (division by zero)")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, StatsError>;

// ---------------------------------------------------------------------------
// Exact summation
// ---------------------------------------------------------------------------

/// Correctly rounded floating-point sum.
///
/// Keeps a list of non-overlapping partial sums (Shewchuk) so no low-order
/// bits are lost, then rounds the exact total once, including the
/// round-half-even correction on the last two partials.
///
/// Non-finite inputs make the exact sum meaningless; in that case the plain
/// IEEE sum of the non-finite values is returned so `inf` and `NaN` propagate
/// as usual. A partial sum that overflows counts as such a value, so the
/// result is `±inf` rather than `NaN`.
pub fn fsum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut partials: Vec<f64> = Vec::new();
    let mut special = 0.0_f64;
    let mut non_finite = false;

    'values: for mut x in values {
        if !x.is_finite() {
            non_finite = true;
            special += x;
            continue;
        }
        let mut i = 0;
        for j in 0..partials.len() {
            let mut y = partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            if !hi.is_finite() {
                // intermediate overflow; partials are no longer exact
                non_finite = true;
                special += hi;
                continue 'values;
            }
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[i] = lo;
                i += 1;
            }
            x = hi;
        }
        partials.truncate(i);
        partials.push(x);
    }

    if non_finite {
        return special;
    }

    let mut n = partials.len();
    if n == 0 {
        return 0.0;
    }
    n -= 1;
    let mut hi = partials[n];
    let mut lo = 0.0;
    while n > 0 {
        let x = hi;
        n -= 1;
        let y = partials[n];
        hi = x + y;
        let yr = hi - x;
        lo = y - yr;
        if lo != 0.0 {
            break;
        }
    }
    // Half-way case: the remaining partials push the rounding one way.
    if n > 0 && ((lo < 0.0 && partials[n - 1] < 0.0) || (lo > 0.0 && partials[n - 1] > 0.0)) {
        let y = lo * 2.0;
        let x = hi + y;
        let yr = x - hi;
        if y == yr {
            hi = x;
        }
    }
    hi
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Minimum and maximum of the series. The first occurrence wins on ties.
pub fn range_of<T: PartialOrd + Copy>(series: &[T]) -> Result<(T, T)> {
    let (&first, rest) = series.split_first().ok_or(StatsError::EmptyInput)?;
    let mut min = first;
    let mut max = first;
    for &v in rest {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Ok((min, max))
}

/// Arithmetic mean, `fsum(series) / n`.
pub fn mean(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(fsum(series.iter().copied()) / series.len() as f64)
}

/// Most frequent value. Ties go to whichever value appeared first.
pub fn mode<T: PartialEq + Clone>(series: &[T]) -> Result<T> {
    // (value, count) in first-seen order
    let mut counts: Vec<(&T, usize)> = Vec::new();
    for v in series {
        match counts.iter_mut().find(|(seen, _)| *seen == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }

    let mut best: Option<(&T, usize)> = None;
    for &(v, n) in &counts {
        if best.map_or(true, |(_, m)| n > m) {
            best = Some((v, n));
        }
    }
    best.map(|(v, _)| v.clone()).ok_or(StatsError::EmptyInput)
}

/// Median of a sorted copy of the series.
///
/// Odd length takes the middle element; even length averages the two middle
/// elements. The caller's order does not matter.
pub fn median(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok(midpoint(sorted[n / 2 - 1], sorted[n / 2]))
    }
}

/// `(a + b) / 2` without overflowing for large operands.
fn midpoint(a: f64, b: f64) -> f64 {
    const HI: f64 = f64::MAX / 2.0;
    if a.abs() <= HI && b.abs() <= HI {
        (a + b) / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

// ---------------------------------------------------------------------------
// Dispersion
// ---------------------------------------------------------------------------

/// `Σ(xᵢ − mean)²`, not normalized.
pub fn sum_squared_deviations(series: &[f64]) -> Result<f64> {
    let m = mean(series)?;
    Ok(fsum(series.iter().map(|&x| {
        let d = x - m;
        d * d
    })))
}

/// The report's "variance": the un-normalized sum of squared deviations.
///
/// Divide by `n - 1` (see [`sample_variance`]) or `n` for a conventional
/// variance.
pub fn variance(series: &[f64]) -> Result<f64> {
    sum_squared_deviations(series)
}

/// Unbiased sample variance, `sum_squared_deviations / (n − 1)`.
pub fn sample_variance(series: &[f64]) -> Result<f64> {
    let ss = sum_squared_deviations(series)?;
    Ok(ss / degrees_of_freedom(series)?)
}

/// Legacy standard deviation, `sqrt(sum_squared_deviations) / (n − 1)`.
///
/// This is not the textbook sample standard deviation (the square root is
/// taken before dividing). Existing reports depend on these numbers; use
/// [`sample_stdev`] for the conventional value.
pub fn stdev(series: &[f64]) -> Result<f64> {
    let ss = sum_squared_deviations(series)?;
    Ok(ss.sqrt() / degrees_of_freedom(series)?)
}

/// Sample standard deviation, `sqrt(sample_variance)`.
pub fn sample_stdev(series: &[f64]) -> Result<f64> {
    sample_variance(series).map(f64::sqrt)
}

fn degrees_of_freedom(series: &[f64]) -> Result<f64> {
    match series.len() {
        0 => Err(StatsError::EmptyInput),
        1 => Err(StatsError::DivisionByZero),
        n => Ok((n - 1) as f64),
    }
}
