//! Horizon geometry, clip regions, base fills and sky variation for the
//! figures landscape.

use rand::Rng;

use crate::palette;
use crate::scene::{Band, BlendMode, Region, Shape, ShapeRole, pt};

/// Ground band depth as a fraction of canvas height.
const GROUND_FRACTION: f32 = 0.12;
/// Maximum shoreline tilt as a fraction of canvas height.
const SKEW_FRACTION: f32 = 0.05;
/// Sea band depth as a fraction of canvas height.
const SEA_FRACTION: f32 = 0.22;

/// Clip region id for the sky band.
pub const CLIP_SKY: &str = "cp-sky";
/// Clip region id for the sea band.
pub const CLIP_SEA: &str = "cp-sea";
/// Clip region id for the ground band.
pub const CLIP_GROUND: &str = "cp-ground";

/// Tilted band boundaries of one composition.
///
/// The ground/sea boundary is a straight line between different left and
/// right edge heights; the sky/sea boundary stays level above the higher
/// of the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizon {
    /// Sky/sea boundary (the document's `horizon_y`).
    pub sea_y: f32,
    /// Ground boundary at the left canvas edge.
    pub ground_left: f32,
    /// Ground boundary at the right canvas edge.
    pub ground_right: f32,
}

impl Horizon {
    /// Rolls the horizon tilt for a canvas.
    pub fn roll<R: Rng>(height: f32, rng: &mut R) -> Self {
        let ground_base = height * GROUND_FRACTION;
        let skew = rng.random_range(-height * SKEW_FRACTION..height * SKEW_FRACTION);
        let ground_left = (height - ground_base) + skew;
        let ground_right = (height - ground_base) - skew;
        Self {
            sea_y: ground_left.min(ground_right) - height * SEA_FRACTION,
            ground_left,
            ground_right,
        }
    }

    /// Ground boundary y at a given x, interpolated along the tilt.
    pub fn ground_at(&self, x: f32, width: f32) -> f32 {
        let t = (x / width).clamp(0.0, 1.0);
        self.ground_left + (self.ground_right - self.ground_left) * t
    }

    /// Higher (smaller y) end of the ground boundary.
    pub fn ground_top(&self) -> f32 {
        self.ground_left.min(self.ground_right)
    }

    /// Lower (larger y) end of the ground boundary.
    pub fn ground_bottom(&self) -> f32 {
        self.ground_left.max(self.ground_right)
    }
}

/// Builds the three clip regions following the horizon tilt.
pub fn clip_regions(horizon: &Horizon, width: f32, height: f32) -> Vec<Region> {
    let (sea_y, gl, gr) = (horizon.sea_y, horizon.ground_left, horizon.ground_right);
    vec![
        Region::polygon(
            CLIP_SKY,
            vec![pt(0.0, 0.0), pt(width, 0.0), pt(width, sea_y), pt(0.0, sea_y)],
        ),
        Region::polygon(
            CLIP_SEA,
            vec![pt(0.0, sea_y), pt(width, sea_y), pt(width, gr), pt(0.0, gl)],
        ),
        Region::polygon(
            CLIP_GROUND,
            vec![pt(0.0, gl), pt(width, gr), pt(width, height), pt(0.0, height)],
        ),
    ]
}

/// Emits the three band base fills, back to front.
pub fn base_fills(horizon: &Horizon, width: f32, height: f32) -> Vec<Shape> {
    let (sea_y, gl, gr) = (horizon.sea_y, horizon.ground_left, horizon.ground_right);
    vec![
        Shape::new(
            "base-sky",
            ShapeRole::Backdrop(Band::Sky),
            vec![pt(0.0, 0.0), pt(width, 0.0), pt(width, sea_y), pt(0.0, sea_y)],
            "#D3D3D3",
            0.5,
        ),
        Shape::new(
            "base-sea",
            ShapeRole::Backdrop(Band::Sea),
            vec![pt(0.0, sea_y), pt(width, sea_y), pt(width, gr), pt(0.0, gl)],
            "#4682B4",
            0.6,
        ),
        Shape::new(
            "base-ground",
            ShapeRole::Backdrop(Band::Ground),
            vec![pt(0.0, gl), pt(width, gr), pt(width, height), pt(0.0, height)],
            "#1A1A1A",
            0.9,
        ),
    ]
}

/// Emits the four atmospheric variation quads clipped to the sky band.
pub fn sky_variation<R: Rng>(horizon: &Horizon, width: f32, rng: &mut R) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(4);
    for i in 0..4 {
        // Corners roam past the band edges; the clip keeps them in the sky.
        let x0 = rng.random_range(-width * 0.2..width);
        let x1 = x0 + rng.random_range(width * 0.2..width * 0.6);
        let y0 = rng.random_range(-horizon.sea_y * 0.3..horizon.sea_y);
        let y1 = y0 + rng.random_range(horizon.sea_y * 0.1..horizon.sea_y * 0.5);
        let drift = rng.random_range(-width * 0.15..width * 0.15);
        shapes.push(
            Shape::new(
                format!("sky-var-{i}"),
                ShapeRole::Variation(Band::Sky),
                vec![
                    pt(x0, y0),
                    pt(x1, y0),
                    pt(x1 + drift, y1),
                    pt(x0 + drift, y1),
                ],
                palette::pick(palette::SKY, rng),
                rng.random_range(0.15..0.35),
            )
            .with_blend(BlendMode::Multiply)
            .with_clip(CLIP_SKY),
        );
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_horizon_bands_stack() {
        for seed in 0..30 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let horizon = Horizon::roll(600.0, &mut rng);

            // Sky above sea above ground, both edges.
            assert!(horizon.sea_y > 0.0);
            assert!(horizon.sea_y < horizon.ground_top());
            assert!(horizon.ground_bottom() < 600.0);

            // Tilt stays within the rolled skew band.
            let tilt = (horizon.ground_left - horizon.ground_right).abs();
            assert!(tilt <= 600.0 * SKEW_FRACTION * 2.0, "tilt {tilt}");
        }
    }

    #[test]
    fn test_ground_at_interpolates() {
        let horizon = Horizon {
            sea_y: 300.0,
            ground_left: 520.0,
            ground_right: 540.0,
        };
        assert_eq!(horizon.ground_at(0.0, 800.0), 520.0);
        assert_eq!(horizon.ground_at(800.0, 800.0), 540.0);
        assert_eq!(horizon.ground_at(400.0, 800.0), 530.0);
        // X outside the canvas clamps to an edge value.
        assert_eq!(horizon.ground_at(-50.0, 800.0), 520.0);
    }

    #[test]
    fn test_regions_follow_the_tilt() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let horizon = Horizon::roll(600.0, &mut rng);
        let regions = clip_regions(&horizon, 800.0, 600.0);

        let ids: Vec<_> = regions.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, [CLIP_SKY, CLIP_SEA, CLIP_GROUND]);

        let crate::scene::RegionBounds::Polygon { points } = &regions[1].bounds else {
            panic!("cp-sea is not a polygon");
        };
        assert_eq!(points[2].y, horizon.ground_right);
        assert_eq!(points[3].y, horizon.ground_left);
    }

    #[test]
    fn test_base_fills_cover_bands_in_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let horizon = Horizon::roll(600.0, &mut rng);
        let fills = base_fills(&horizon, 800.0, 600.0);

        assert_eq!(fills.len(), 3);
        assert_eq!(fills[0].role, ShapeRole::Backdrop(Band::Sky));
        assert_eq!(fills[1].role, ShapeRole::Backdrop(Band::Sea));
        assert_eq!(fills[2].role, ShapeRole::Backdrop(Band::Ground));
        assert_eq!(fills[2].fill, "#1A1A1A");
    }

    #[test]
    fn test_sky_variation_clipped_and_blended() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let horizon = Horizon::roll(600.0, &mut rng);
        let shapes = sky_variation(&horizon, 800.0, &mut rng);

        assert_eq!(shapes.len(), 4);
        for shape in &shapes {
            assert_eq!(shape.role, ShapeRole::Variation(Band::Sky));
            assert_eq!(shape.clip_path_id.as_deref(), Some(CLIP_SKY));
            assert_eq!(shape.blend_mode, Some(BlendMode::Multiply));
            assert!(shape.opacity >= 0.15 && shape.opacity < 0.35);
            assert!(palette::SKY.contains(&shape.fill.as_str()));
        }
    }
}
