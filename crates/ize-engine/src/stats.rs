//! Small numeric helpers shared by the engines.

/// Binary entropy in bits. 0 at `p = 0` and `p = 1`.
pub fn binary_entropy(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }
    -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
}

/// `numerator / denominator`, or 0 when the denominator is 0.
#[inline]
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// `part / whole * 100`, or 0 for an empty whole.
#[inline]
pub fn percentage(part: usize, whole: usize) -> f64 {
    ratio(part, whole) * 100.0
}
