//! Board positioning math shared by renderers.
//!
//! Offsets are percentages of the board extent so that any surface (terminal
//! cells, pixels) can scale them.

/// Offset of row or column `index` on a board of `size` cells.
pub fn offset_percent(index: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    index * 100 / size
}

/// Extent of one tile on a board of `size` cells.
pub fn tile_size_percent(size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    100 / size
}

/// Fractional counterpart of [`offset_percent`] for tiles in flight.
pub fn offset_percent_f32(index: f32, size: usize) -> f32 {
    if size == 0 {
        return 0.0;
    }
    index * 100.0 / size as f32
}

/// Linear interpolation between two cell indices, `t` clamped to `0..=1`.
pub fn interpolate(from: usize, to: usize, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    from as f32 + (to as f32 - from as f32) * t
}

/// Scales a percentage onto a surface `extent` units long.
pub fn scale(percent: f32, extent: u16) -> u16 {
    (f32::from(extent) * percent / 100.0).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_by_four_offsets() {
        let offsets: Vec<_> = (0..4).map(|i| offset_percent(i, 4)).collect();
        assert_eq!(offsets, [0, 25, 50, 75]);
        assert_eq!(tile_size_percent(4), 25);
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(offset_percent(1, 3), 33);
        assert_eq!(offset_percent(2, 3), 66);
        assert_eq!(tile_size_percent(3), 33);
    }

    #[test]
    fn zero_size_is_harmless() {
        assert_eq!(offset_percent(3, 0), 0);
        assert_eq!(tile_size_percent(0), 0);
        assert_eq!(offset_percent_f32(1.5, 0), 0.0);
    }

    #[test]
    fn interpolation_moves_both_ways() {
        assert_eq!(interpolate(0, 3, 0.0), 0.0);
        assert_eq!(interpolate(0, 3, 1.0), 3.0);
        assert_eq!(interpolate(3, 1, 0.5), 2.0);
        assert_eq!(interpolate(2, 2, 0.7), 2.0);
        assert_eq!(interpolate(0, 4, 2.0), 4.0);
    }

    #[test]
    fn scale_rounds_to_nearest_unit() {
        assert_eq!(scale(25.0, 40), 10);
        assert_eq!(scale(offset_percent_f32(1.5, 4), 40), 15);
    }
}
