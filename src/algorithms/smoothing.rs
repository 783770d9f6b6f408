use crate::core::vector::NumVector;

/// Centered simple moving average with zero padding.
///
/// The window size is forced odd (even sizes get +1) with half-width `h`; the
/// vector is conceptually zero-padded by `h` on each side, and every output
/// element is the mean of the `window_size` padded values centered on it.
/// Padding zeros stay in the divisor, so values near the edges are pulled
/// toward zero — the behavior the score reduction relies on.
pub fn sma(vector: &NumVector, window_size: usize) -> NumVector {
    let window_size = if window_size % 2 == 0 {
        window_size + 1
    } else {
        window_size
    };
    let half = window_size / 2;
    let len = vector.len();

    let mut result = NumVector::zeros(len);
    for t in 0..len {
        let lo = t.saturating_sub(half);
        let hi = (t + half).min(len.saturating_sub(1));
        let mut sum = 0.0;
        for k in lo..=hi {
            sum += vector.get(k);
        }
        result.set(t, sum / window_size as f64);
    }
    result
}

/// Exponential moving average: `s[0] = v[0]`, `s[i] = alpha*v[i] + (1-alpha)*s[i-1]`.
pub fn ema(vector: &NumVector, alpha: f64) -> NumVector {
    let mut result = NumVector::zeros(vector.len());
    for i in 0..vector.len() {
        if i == 0 {
            result.set(0, vector.get(0));
        } else {
            result.set(i, alpha * vector.get(i) + (1.0 - alpha) * result.get(i - 1));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_constant_interior_is_conserved() {
        // Window 7 (half-width 3) over a 20-element constant vector: every
        // position at least 3 away from both edges must keep the value.
        let c = 4.2;
        let v = NumVector::filled(20, c);
        let smoothed = sma(&v, 7);
        for t in 3..17 {
            assert!(
                (smoothed.get(t) - c).abs() < 1e-10,
                "interior position {t} biased: {}",
                smoothed.get(t)
            );
        }
        // Edges are pulled down by the zero padding
        assert!((smoothed.get(0) - c * 4.0 / 7.0).abs() < 1e-10);
        assert!((smoothed.get(19) - c * 4.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_sma_even_window_forced_odd() {
        let v = NumVector::filled(20, 1.0);
        let even = sma(&v, 6);
        let odd = sma(&v, 7);
        assert_eq!(even, odd);
    }

    #[test]
    fn test_sma_single_spike() {
        let mut v = NumVector::zeros(9);
        v.set(4, 7.0);
        let smoothed = sma(&v, 7);
        // The spike spreads to every position within half-width 3
        for t in 1..=7 {
            assert!((smoothed.get(t) - 1.0).abs() < 1e-10);
        }
        assert!((smoothed.get(0) - 0.0).abs() < 1e-10);
        assert!((smoothed.get(8) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_ema() {
        let v = NumVector::from_values(vec![1.0, 2.0, 3.0]);
        let s = ema(&v, 0.5);
        assert!((s.get(0) - 1.0).abs() < 1e-10);
        assert!((s.get(1) - 1.5).abs() < 1e-10);
        assert!((s.get(2) - 2.25).abs() < 1e-10);
    }
}
