//! Perspective tiling of the sea and ground bands.
//!
//! Both walks fake depth with row heights that scale with distance from
//! the horizon: sea bands compress as they recede toward it, ground rows
//! shrink as they climb toward it. The tuning constants are empirical and
//! matter only for the look; termination rests on the minimum row height
//! plus a hard row cap.

use rand::Rng;

use crate::figures::layout::{CLIP_GROUND, CLIP_SEA, Horizon};
use crate::palette;
use crate::scene::{Shape, ShapeRole, pt};

/// Base sea band height in pixels at the horizon.
const SEA_BAND_BASE: f32 = 4.0;
/// Sea band height gained per pixel of distance from the horizon.
const SEA_BAND_GROWTH: f32 = 0.12;
/// Fraction of a band's height the walk advances per row; bands overlap.
const SEA_BAND_ADVANCE: f32 = 0.8;
/// Ground row height per pixel of distance to the horizon.
const GROUND_ROW_FACTOR: f32 = 0.15;
/// Facet width per unit of row height.
const FACET_ASPECT: f32 = 2.5;
/// Floor for any row or band height; keeps both walks advancing.
const MIN_ROW_HEIGHT: f32 = 3.0;
/// Hard cap on rows per walk. With the height floor a 5000px canvas
/// finishes in well under 1700 rows; the cap makes termination provable.
const MAX_ROWS: usize = 2048;

/// Emits the horizontal sea bands, walking down from the horizon.
///
/// Each row is split into 1-4 segments of random width, each with its own
/// sea-palette fill, all clipped to the sea region.
pub fn sea_bands<R: Rng>(horizon: &Horizon, width: f32, height: f32, rng: &mut R) -> Vec<Shape> {
    let mut shapes = Vec::new();
    let mut y = horizon.sea_y;
    let bottom = horizon.ground_bottom();

    for row in 0..MAX_ROWS {
        if y >= bottom {
            break;
        }
        let distance = y - horizon.sea_y;
        let jitter = rng.random_range(-1.0..3.0);
        let band_height =
            (SEA_BAND_BASE + distance * SEA_BAND_GROWTH + jitter).max(MIN_ROW_HEIGHT);

        let segments = rng.random_range(1..=4);
        let mut cuts = Vec::with_capacity(segments + 1);
        cuts.push(0.0);
        for _ in 1..segments {
            cuts.push(rng.random_range(0.0..width));
        }
        cuts.push(width);
        cuts.sort_by(|a: &f32, b: &f32| a.total_cmp(b));

        for (seg, pair) in cuts.windows(2).enumerate() {
            let (x0, x1) = (pair[0], pair[1]);
            if x1 - x0 < 1.0 {
                continue;
            }
            let y1 = (y + band_height).min(height);
            shapes.push(
                Shape::new(
                    format!("sea-band-{row}-{seg}"),
                    ShapeRole::SeaBand,
                    vec![pt(x0, y), pt(x1, y), pt(x1, y1), pt(x0, y1)],
                    palette::pick(palette::SEA, rng),
                    rng.random_range(0.3..0.7),
                )
                .with_clip(CLIP_SEA),
            );
        }

        y += band_height * SEA_BAND_ADVANCE;
    }

    shapes
}

/// Emits the faceted ground rows, walking up from the canvas bottom.
///
/// Facet corners jitter so the grid reads as laid stone rather than
/// tiling; every point is clamped into the canvas, so rows touching the
/// horizon overshoot it by less than one row height at most.
pub fn ground_facets<R: Rng>(horizon: &Horizon, width: f32, height: f32, rng: &mut R) -> Vec<Shape> {
    let mut shapes = Vec::new();
    let mut y = height;
    let top = horizon.ground_top();

    for row in 0..MAX_ROWS {
        if y <= top {
            break;
        }
        let distance = y - top;
        let row_height = (distance * GROUND_ROW_FACTOR).max(MIN_ROW_HEIGHT);
        let facet_width = row_height * FACET_ASPECT;
        let jitter = row_height * 0.3;
        let row_top = y - row_height;

        let mut x = -facet_width * rng.random_range(0.0..1.0);
        let mut col = 0;
        while x < width {
            let w = facet_width * rng.random_range(0.8..1.2);
            let corners = [
                pt(x + rng.random_range(-jitter..jitter), row_top + rng.random_range(-jitter..jitter)),
                pt(x + w + rng.random_range(-jitter..jitter), row_top + rng.random_range(-jitter..jitter)),
                pt(x + w + rng.random_range(-jitter..jitter), y + rng.random_range(-jitter..jitter)),
                pt(x + rng.random_range(-jitter..jitter), y + rng.random_range(-jitter..jitter)),
            ];
            shapes.push(
                Shape::new(
                    format!("ground-facet-{row}-{col}"),
                    ShapeRole::GroundFacet,
                    corners.iter().map(|p| p.clamped(width, height)).collect(),
                    palette::pick(palette::GROUND, rng),
                    rng.random_range(0.5..0.9),
                )
                .with_clip(CLIP_GROUND),
            );
            x += w;
            col += 1;
        }

        y -= row_height;
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn horizon_for(height: f32, seed: u64) -> Horizon {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Horizon::roll(height, &mut rng)
    }

    #[test]
    fn test_sea_bands_fill_the_band() {
        let horizon = horizon_for(600.0, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let shapes = sea_bands(&horizon, 800.0, 600.0, &mut rng);

        assert!(!shapes.is_empty());
        for shape in &shapes {
            assert_eq!(shape.role, ShapeRole::SeaBand);
            assert_eq!(shape.clip_path_id.as_deref(), Some(CLIP_SEA));
            assert!(shape.points.len() >= 3);
            // Band tops start at or below the horizon.
            assert!(shape.points[0].y >= horizon.sea_y - 0.01);
        }
    }

    #[test]
    fn test_bands_grow_away_from_horizon() {
        let horizon = horizon_for(1200.0, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let shapes = sea_bands(&horizon, 800.0, 1200.0, &mut rng);

        let height_of = |s: &Shape| s.points[2].y - s.points[0].y;
        let first = shapes.first().unwrap();
        let last = shapes.last().unwrap();
        assert!(
            height_of(last) > height_of(first),
            "bands should expand toward the viewer: {} vs {}",
            height_of(last),
            height_of(first)
        );
    }

    #[test]
    fn test_facets_stay_on_canvas() {
        let horizon = horizon_for(600.0, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let shapes = ground_facets(&horizon, 800.0, 600.0, &mut rng);

        assert!(!shapes.is_empty());
        for shape in &shapes {
            assert_eq!(shape.role, ShapeRole::GroundFacet);
            assert_eq!(shape.clip_path_id.as_deref(), Some(CLIP_GROUND));
            for p in &shape.points {
                assert!(p.x >= 0.0 && p.x <= 800.0, "{}: x={}", shape.id, p.x);
                assert!(p.y >= 0.0 && p.y <= 600.0, "{}: y={}", shape.id, p.y);
            }
        }
    }

    #[test]
    fn test_facet_rows_shrink_toward_horizon() {
        let horizon = horizon_for(1000.0, 7);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let shapes = ground_facets(&horizon, 800.0, 1000.0, &mut rng);

        let row_of = |s: &Shape| {
            s.id
                .strip_prefix("ground-facet-")
                .and_then(|rest| rest.split('-').next())
                .and_then(|n| n.parse::<usize>().ok())
                .unwrap()
        };
        let last_row = shapes.iter().map(|s| row_of(s)).max().unwrap();
        // Bottom rows are tall and few; several rows must have fit.
        assert!(last_row >= 3, "only {} rows", last_row + 1);
    }

    #[test]
    fn test_walks_terminate_across_heights() {
        for height in [100.0_f32, 480.0, 1200.0, 3000.0, 5000.0] {
            let horizon = horizon_for(height, 11);
            let mut rng = ChaCha8Rng::seed_from_u64(12);

            let bands = sea_bands(&horizon, 800.0, height, &mut rng);
            let facets = ground_facets(&horizon, 800.0, height, &mut rng);

            // Row indices are bounded by the cap, far below the property
            // budget of 10,000 iterations.
            assert!(!bands.is_empty(), "height {height}: no sea bands");
            assert!(!facets.is_empty(), "height {height}: no facets");
            assert!(bands.len() < 10_000);
            assert!(facets.len() < 100_000, "height {height}: {}", facets.len());
        }
    }
}
