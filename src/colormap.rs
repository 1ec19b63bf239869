//! Time-rank color scale for markers.

/// Evenly spaced scalars over [0, 1], one per rank. A single row gets 0.
pub fn rank_scalars(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}

/// Maps a scalar through the plasma palette (dark purple to yellow) to `#RRGGBB`.
///
/// Channels are interpolated and rounded, so they can differ by one from a
/// truncating 256-entry lookup (0.5 gives `#CB4678`, not `#CB4777`).
pub fn plasma_hex(scalar: f64) -> String {
    let color = colorous::PLASMA.eval_continuous(scalar.clamp(0.0, 1.0));
    rgb_to_hex(color.r, color.g, color.b)
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_span_zero_to_one_uniformly() {
        let scalars = rank_scalars(5);
        assert_eq!(scalars, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let three = rank_scalars(3);
        assert_eq!(three, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn scalars_strictly_increase() {
        let scalars = rank_scalars(17);
        assert_eq!(scalars.first(), Some(&0.0));
        assert_eq!(scalars.last(), Some(&1.0));
        assert!(scalars.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn degenerate_sizes() {
        assert!(rank_scalars(0).is_empty());
        assert_eq!(rank_scalars(1), vec![0.0]);
    }

    #[test]
    fn hex_is_uppercase_two_digits_per_channel() {
        assert_eq!(rgb_to_hex(0, 10, 255), "#000AFF");
        assert_eq!(rgb_to_hex(171, 205, 239), "#ABCDEF");
    }

    #[test]
    fn plasma_runs_from_purple_to_yellow() {
        let low = plasma_hex(0.0);
        let high = plasma_hex(1.0);
        assert_eq!(low.len(), 7);
        assert!(low.starts_with('#'));
        assert_ne!(low, high);

        let channel = |hex: &str, i: usize| u8::from_str_radix(&hex[1 + 2 * i..3 + 2 * i], 16).unwrap();
        // Dark purple: blue dominates red and green
        assert!(channel(&low, 2) > channel(&low, 0));
        assert!(channel(&low, 2) > channel(&low, 1));
        // Yellow: red and green dominate blue
        assert!(channel(&high, 0) > channel(&high, 2));
        assert!(channel(&high, 1) > channel(&high, 2));
    }

    #[test]
    fn midpoint_is_rounded_interpolation() {
        assert_eq!(plasma_hex(0.5), "#CB4678");
    }

    #[test]
    fn mapping_is_deterministic() {
        for s in rank_scalars(9) {
            assert_eq!(plasma_hex(s), plasma_hex(s));
        }
    }
}
