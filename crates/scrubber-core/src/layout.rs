//! Book-label decluttering along the scrubber track.
//!
//! Labels start at their book's midpoint fraction and are relaxed in two passes
//! so that neighbours sit at least `min_gap_px` apart once multiplied by the
//! track height. Order is never changed. When the labels need more room than
//! the track offers, the result spills outside `[0, 1]` and the host pads the
//! label panel by the reported overshoot.

/// Converts a pixel gap to a track fraction. Unknown or empty tracks give 0.
pub fn min_gap_fraction(min_gap_px: f32, track_height_px: f32) -> f32 {
    if track_height_px.is_finite()
        && track_height_px > 0.0
        && min_gap_px.is_finite()
        && min_gap_px > 0.0
    {
        min_gap_px / track_height_px
    } else {
        0.0
    }
}

/// Two-pass relaxation of non-decreasing `fractions` to a minimum spacing.
pub fn spread_fractions(fractions: &[f32], min_gap_fraction: f32) -> Vec<f32> {
    let mut spread = fractions.to_vec();
    let count = spread.len();
    if count < 2 {
        return spread;
    }

    for i in 1..count {
        let floor = spread[i - 1] + min_gap_fraction;
        if spread[i] < floor {
            spread[i] = floor;
        }
    }

    if spread[count - 1] > 1.0 {
        spread[count - 1] = 1.0;
    }

    for i in (0..count - 1).rev() {
        let ceiling = spread[i + 1] - min_gap_fraction;
        if spread[i] > ceiling {
            spread[i] = ceiling;
        }
    }

    spread
}

/// Result of laying out one column of labels against a track.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub fractions: Vec<f32>,
    pub min_gap_fraction: f32,
    /// Pixels the stack extends above the top of the track.
    pub overshoot_top_px: f32,
    /// Pixels the stack extends below the bottom of the track.
    pub overshoot_bottom_px: f32,
}

impl LabelLayout {
    pub fn compute(mid_fractions: &[f32], min_gap_px: f32, track_height_px: f32) -> Self {
        let gap = min_gap_fraction(min_gap_px, track_height_px);
        let fractions = spread_fractions(mid_fractions, gap);
        let height = if track_height_px.is_finite() {
            track_height_px.max(0.0)
        } else {
            0.0
        };
        let (overshoot_top_px, overshoot_bottom_px) = overshoot_px(&fractions, 0.0, height);
        Self {
            fractions,
            min_gap_fraction: gap,
            overshoot_top_px,
            overshoot_bottom_px,
        }
    }

    /// Vertical offset that moves label `focused` onto the thumb. Applied to the
    /// whole stack so spacing is preserved.
    pub fn alignment_shift_px(&self, focused: usize, thumb_fraction: f32, track_height_px: f32) -> f32 {
        match self.fractions.get(focused) {
            Some(fraction) if track_height_px.is_finite() => {
                (thumb_fraction - fraction) * track_height_px
            }
            _ => 0.0,
        }
    }
}

/// Overshoot above and below the track for `fractions` after shifting the
/// stack by `shift_px`.
pub fn overshoot_px(fractions: &[f32], shift_px: f32, track_height_px: f32) -> (f32, f32) {
    if fractions.is_empty() {
        return (0.0, 0.0);
    }
    let min = fractions.iter().copied().fold(f32::INFINITY, f32::min);
    let max = fractions.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let top = (-(min * track_height_px + shift_px)).max(0.0);
    let bottom = (max * track_height_px + shift_px - track_height_px).max(0.0);
    (top, bottom)
}

/// Size multiplier for a label: hovered labels are largest, then labels whose
/// midpoint is close to the thumb.
pub fn label_scale(mid_fraction: f32, thumb_fraction: f32, hovered: bool) -> f32 {
    if hovered {
        return 2.0;
    }
    let distance = (mid_fraction - thumb_fraction).abs();
    if distance < 0.02 {
        1.6
    } else if distance < 0.05 {
        1.3
    } else if distance < 0.1 {
        1.1
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::book_ranges;

    const EPSILON: f32 = 1e-5;

    fn assert_min_spacing(fractions: &[f32], gap: f32) {
        for pair in fractions.windows(2) {
            assert!(
                pair[1] - pair[0] >= gap - EPSILON,
                "labels {pair:?} closer than {gap}"
            );
        }
    }

    // Deterministic xorshift so the property test needs no extra crates.
    fn pseudo_random_sorted(seed: u32, count: usize) -> Vec<f32> {
        let mut state = seed.max(1);
        let mut values: Vec<f32> = (0..count)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state % 10_000) as f32 / 10_000.0
            })
            .collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values
    }

    #[test]
    fn book_midpoints_are_spaced_on_a_typical_track() {
        let mids: Vec<f32> = book_ranges().iter().map(|r| r.mid_fraction()).collect();
        let layout = LabelLayout::compute(&mids, 12.0, 1000.0);
        assert_eq!(layout.fractions.len(), 66);
        assert_min_spacing(&layout.fractions, layout.min_gap_fraction);
    }

    #[test]
    fn random_inputs_respect_min_spacing() {
        for seed in 1..40u32 {
            let mids = pseudo_random_sorted(seed, 5 + seed as usize);
            let gap = 0.01 * (seed % 7) as f32;
            let spread = spread_fractions(&mids, gap);
            assert_eq!(spread.len(), mids.len());
            assert_min_spacing(&spread, gap);
        }
    }

    #[test]
    fn identical_fractions_are_spaced_evenly_from_the_first() {
        let spread = spread_fractions(&[0.5; 5], 0.1);
        let expected = [0.5, 0.6, 0.7, 0.8, 0.9];
        for (got, want) in spread.iter().zip(expected) {
            assert!((got - want).abs() < EPSILON, "{spread:?}");
        }
    }

    #[test]
    fn crowded_labels_overflow_the_top_with_exact_spacing() {
        // 66 labels * 20px on a 600px track cannot fit.
        let layout = LabelLayout::compute(&[0.5; 66], 20.0, 600.0);
        let gap = layout.min_gap_fraction;
        for pair in layout.fractions.windows(2) {
            assert!((pair[1] - pair[0] - gap).abs() < 1e-4);
        }
        assert_eq!(*layout.fractions.last().unwrap(), 1.0);
        assert!(layout.fractions[0] < 0.0);
        assert!((layout.overshoot_top_px - 65.0 * 20.0 + 600.0).abs() < 0.1);
        assert_eq!(layout.overshoot_bottom_px, 0.0);
    }

    #[test]
    fn zero_and_single_labels_are_untouched() {
        assert!(spread_fractions(&[], 0.2).is_empty());
        assert_eq!(spread_fractions(&[1.4], 0.2), vec![1.4]);
    }

    #[test]
    fn unknown_track_height_disables_spacing() {
        let mids = [0.1, 0.1, 0.2];
        let layout = LabelLayout::compute(&mids, 12.0, 0.0);
        assert_eq!(layout.min_gap_fraction, 0.0);
        assert_eq!(layout.fractions, mids.to_vec());
        assert_eq!(min_gap_fraction(12.0, f32::NAN), 0.0);
    }

    #[test]
    fn layout_never_reorders() {
        let mids = pseudo_random_sorted(7, 30);
        let spread = spread_fractions(&mids, 0.05);
        assert!(spread.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn alignment_shift_moves_focused_label_onto_thumb() {
        let layout = LabelLayout::compute(&[0.2, 0.21, 0.22], 10.0, 100.0);
        let shift = layout.alignment_shift_px(1, 0.5, 100.0);
        let focused_y = layout.fractions[1] * 100.0 + shift;
        assert!((focused_y - 50.0).abs() < 1e-3);
        assert_eq!(layout.alignment_shift_px(9, 0.5, 100.0), 0.0);
    }

    #[test]
    fn shifted_stack_reports_overshoot_below() {
        let (top, bottom) = overshoot_px(&[0.8, 0.9, 1.0], 50.0, 100.0);
        assert_eq!(top, 0.0);
        assert!((bottom - 50.0).abs() < 1e-4);
    }

    #[test]
    fn scale_favours_hover_then_proximity() {
        assert_eq!(label_scale(0.9, 0.1, true), 2.0);
        assert_eq!(label_scale(0.5, 0.51, false), 1.6);
        assert_eq!(label_scale(0.5, 0.54, false), 1.3);
        assert_eq!(label_scale(0.5, 0.58, false), 1.1);
        assert_eq!(label_scale(0.5, 0.9, false), 1.0);
    }
}
