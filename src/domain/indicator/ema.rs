//! Exponentially weighted mean, seeded from the first value.
//!
//! alpha = 2/(span+1); ema[0] = x[0], ema[i] = alpha*x[i] + (1-alpha)*ema[i-1].
//! No bias adjustment, no warmup: defined for every entry from the first.

pub fn ewm_mean(values: &[f64], span: usize) -> Vec<f64> {
    if values.is_empty() || span == 0 {
        return Vec::new();
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut ema = values[0];
    out.push(ema);

    for &x in &values[1..] {
        ema = x * alpha + ema * (1.0 - alpha);
        out.push(ema);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn seeded_from_first_value() {
        let out = ewm_mean(&[10.0, 20.0, 30.0], 3);
        assert_relative_eq!(out[0], 10.0);
    }

    #[test]
    fn recurrence() {
        let out = ewm_mean(&[10.0, 20.0, 30.0], 3);
        let alpha = 0.5;
        let e1 = 20.0 * alpha + 10.0 * (1.0 - alpha);
        let e2 = 30.0 * alpha + e1 * (1.0 - alpha);
        assert_relative_eq!(out[1], e1);
        assert_relative_eq!(out[2], e2);
    }

    #[test]
    fn constant_input_is_fixed_point() {
        let out = ewm_mean(&[100.0; 10], 12);
        for v in out {
            assert_relative_eq!(v, 100.0);
        }
    }

    #[test]
    fn span_one_tracks_input() {
        let input = [5.0, 7.0, 9.0];
        let out = ewm_mean(&input, 1);
        assert_eq!(out, input.to_vec());
    }

    #[test]
    fn empty_input() {
        assert!(ewm_mean(&[], 12).is_empty());
    }

    #[test]
    fn zero_span() {
        assert!(ewm_mean(&[1.0, 2.0], 0).is_empty());
    }
}
