//! Pyramid level arithmetic

use crate::deepzoom::geometry::types::LevelDimensions;

/// Index of the full-resolution level: `ceil(log2(max(width, height)))`.
///
/// A 1x1 image has a single level, 0.
pub fn max_level(width: u32, height: u32) -> u32 {
    let longest = width.max(height);
    longest
        .saturating_sub(1)
        .checked_ilog2()
        .map_or(0, |bits| bits + 1)
}

/// Halve one dimension, rounding up.
pub fn halve(dimension: u32) -> u32 {
    dimension.div_ceil(2)
}

/// Dimensions of every level, from `max_level` (the source size) down to 0.
pub fn level_dimensions(width: u32, height: u32) -> Vec<LevelDimensions> {
    let top = max_level(width, height);
    let mut levels = Vec::with_capacity(top as usize + 1);
    let (mut w, mut h) = (width, height);

    for level in (0..=top).rev() {
        levels.push(LevelDimensions {
            level,
            width: w,
            height: h,
        });
        w = halve(w);
        h = halve(h);
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level_values() {
        assert_eq!(max_level(1, 1), 0);
        assert_eq!(max_level(2, 1), 1);
        assert_eq!(max_level(3, 2), 2);
        assert_eq!(max_level(256, 256), 8);
        assert_eq!(max_level(257, 10), 9);
        assert_eq!(max_level(300, 300), 9);
        assert_eq!(max_level(100, 4000), 12);
    }

    #[test]
    fn test_single_pixel_has_one_level() {
        let levels = level_dimensions(1, 1);
        assert_eq!(
            levels,
            vec![LevelDimensions {
                level: 0,
                width: 1,
                height: 1
            }]
        );
    }

    #[test]
    fn test_power_of_two_has_no_duplicate_top_level() {
        let levels = level_dimensions(256, 256);
        assert_eq!(levels.len(), 9);
        assert_eq!((levels[0].level, levels[0].width, levels[0].height), (8, 256, 256));
        assert_eq!((levels[1].level, levels[1].width, levels[1].height), (7, 128, 128));
        assert_eq!((levels[8].level, levels[8].width, levels[8].height), (0, 1, 1));
    }

    #[test]
    fn test_reaches_one_by_one_exactly_at_level_zero() {
        let sizes = [
            (1, 1),
            (2, 2),
            (3, 1),
            (300, 300),
            (260, 100),
            (1025, 7),
            (4096, 4097),
            (12345, 678),
        ];

        for (width, height) in sizes {
            let levels = level_dimensions(width, height);
            assert_eq!(levels.len() as u32, max_level(width, height) + 1);
            assert_eq!((levels[0].width, levels[0].height), (width, height));

            let (last, earlier) = levels.split_last().unwrap();
            assert_eq!((last.level, last.width, last.height), (0, 1, 1));
            for level in earlier {
                assert!(level.width > 1 || level.height > 1, "{width}x{height}");
            }
        }
    }

    #[test]
    fn test_odd_dimensions_round_up() {
        let levels = level_dimensions(301, 5);
        let dims: Vec<(u32, u32)> = levels.iter().map(|l| (l.width, l.height)).collect();
        assert_eq!(
            dims,
            vec![
                (301, 5),
                (151, 3),
                (76, 2),
                (38, 1),
                (19, 1),
                (10, 1),
                (5, 1),
                (3, 1),
                (2, 1),
                (1, 1)
            ]
        );
    }
}
