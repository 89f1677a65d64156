//! Frequency-domain mask that turns a two-sided spectrum into the
//! one-sided spectrum of the analytic signal
//!
//! DC (and Nyquist, when the length is even) keep weight 1, positive
//! frequencies are doubled and negative frequencies are zeroed.

/// Per-bin weights for an `m`-point spectrum
///
/// # Arguments
/// * `m` - Number of complex bins
///
/// # Returns
/// Vector of `m` weights drawn from {0, 1, 2}
pub fn bin_weights(m: usize) -> Vec<f64> {
    let mut weights = vec![0.0; m];
    if m == 0 {
        return weights;
    }

    weights[0] = 1.0;

    // First bin past the positive half (exclusive bound of the doubled range)
    let middle = if m % 2 == 0 {
        weights[m / 2] = 1.0;
        m / 2
    } else {
        (m + 1) / 2
    };

    for w in weights.iter_mut().take(middle).skip(1) {
        *w = 2.0;
    }

    weights
}

/// Interleaved filter vector for an `m`-point spectrum
///
/// Both the real and imaginary slot of bin `k` hold the same weight, so
/// the vector can be multiplied element-wise against an interleaved
/// spectrum (`re` at `2k`, `im` at `2k+1`).
///
/// # Returns
/// Vector of `2m` weights
pub fn analytic_filter(m: usize) -> Vec<f64> {
    bin_weights(m)
        .into_iter()
        .flat_map(|w| [w, w])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter() {
        assert!(bin_weights(0).is_empty());
        assert!(analytic_filter(0).is_empty());
    }

    #[test]
    fn test_even_length_weights() {
        let m = 8;
        let w = bin_weights(m);

        assert_eq!(w[0], 1.0);
        assert_eq!(w[m / 2], 1.0);
        for k in 1..m / 2 {
            assert_eq!(w[k], 2.0, "bin {}", k);
        }
        for k in m / 2 + 1..m {
            assert_eq!(w[k], 0.0, "bin {}", k);
        }
    }

    #[test]
    fn test_odd_length_weights() {
        let m = 7;
        let w = bin_weights(m);

        assert_eq!(w[0], 1.0);
        for k in 1..=(m - 1) / 2 {
            assert_eq!(w[k], 2.0, "bin {}", k);
        }
        for k in (m + 1) / 2..m {
            assert_eq!(w[k], 0.0, "bin {}", k);
        }
    }

    #[test]
    fn test_small_lengths() {
        assert_eq!(bin_weights(1), vec![1.0]);
        assert_eq!(bin_weights(2), vec![1.0, 1.0]);
        assert_eq!(bin_weights(3), vec![1.0, 2.0, 0.0]);
        assert_eq!(bin_weights(4), vec![1.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_interleaved_layout() {
        for m in 0..33 {
            let weights = bin_weights(m);
            let filter = analytic_filter(m);

            assert_eq!(filter.len(), 2 * m);
            for (k, &w) in weights.iter().enumerate() {
                assert_eq!(filter[2 * k], w);
                assert_eq!(filter[2 * k + 1], w);
            }
            assert!(filter.iter().all(|&v| v == 0.0 || v == 1.0 || v == 2.0));
        }
    }

    #[test]
    fn test_weights_preserve_total_energy_split() {
        // Doubled positives plus DC/Nyquist account for every bin once
        for m in 1..40 {
            let total: f64 = bin_weights(m).iter().sum();
            assert_eq!(total, m as f64, "m = {}", m);
        }
    }
}
