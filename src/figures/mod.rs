//! Figures landscape strategy.
//!
//! The most involved composition: a tilted three-band landscape (sky, sea,
//! ground) with perspective tiling in the lower bands and a handful of
//! procedurally assembled figures watching the sea. Built in ordered
//! passes appending to one shape list; paint order is the layer order.

mod figure;
mod layout;
mod perspective;
mod waldo;

pub use figure::{ArmPose, Facing, FigureBuild, FigureSpec, Headwear, TopStyle, figure_spec, render_figure};
pub use layout::{CLIP_GROUND, CLIP_SEA, CLIP_SKY, Horizon};
pub use waldo::{WALDO_PREFIX, waldo_shapes};

use rand::Rng;

use crate::scene::{BlendMode, SceneDocument, SceneKind, Shape, ShapeRole, pt};

/// Chance the easter-egg figure joins an unforced composition.
const WALDO_CHANCE: f64 = 0.05;

/// Generates a figures landscape.
///
/// # Arguments
/// * `width`, `height` - Canvas size in pixels
/// * `force_special_figure` - Always include the easter-egg figure
/// * `rng` - Source of every random decision
pub fn generate_figures<R: Rng>(
    width: u32,
    height: u32,
    force_special_figure: bool,
    rng: &mut R,
) -> SceneDocument {
    let w = width as f32;
    let h = height as f32;
    let seed: u64 = rng.random_range(1..1000);

    let horizon = Horizon::roll(h, rng);
    let regions = layout::clip_regions(&horizon, w, h);

    let mut shapes = layout::base_fills(&horizon, w, h);
    shapes.extend(layout::sky_variation(&horizon, w, rng));
    shapes.extend(perspective::sea_bands(&horizon, w, h, rng));
    shapes.extend(perspective::ground_facets(&horizon, w, h, rng));

    let figure_count = rng.random_range(1..=4);
    for i in 0..figure_count {
        let x = rng.random_range(w * 0.05..w * 0.95);
        // Feet sit slightly below the ground line.
        let foot_y = horizon.ground_at(x, w) + rng.random_range(h * 0.005..h * 0.02);
        let spec = figure_spec(i, x, foot_y, w, h, rng);
        shapes.extend(render_figure(&spec));
    }

    if force_special_figure || rng.random_bool(WALDO_CHANCE) {
        let x = rng.random_range(w * 0.05..w * 0.95);
        let foot_y = horizon.ground_at(x, w) + rng.random_range(h * 0.005..h * 0.02);
        shapes.extend(waldo_shapes(x, foot_y, w * 0.025, h * 0.12));
    }

    let shard_count = rng.random_range(3..=6);
    for i in 0..shard_count {
        let x0 = rng.random_range(0.0..w);
        let y0 = rng.random_range(0.0..h * 0.4);
        let spread = rng.random_range(w * 0.05..w * 0.25);
        let drift = rng.random_range(-w * 0.2..w * 0.2);
        let fill = if rng.random_bool(0.5) { "#FFFFFF" } else { "#F0F8FF" };
        shapes.push(
            Shape::new(
                format!("light-shard-{i}"),
                ShapeRole::LightShard,
                vec![
                    pt(x0, y0),
                    pt(x0 + spread * 0.2, y0),
                    pt(x0 + spread + drift, h),
                    pt(x0 + drift, h),
                ],
                fill,
                rng.random_range(0.03..0.08),
            )
            .with_blend(BlendMode::Overlay),
        );
    }

    SceneDocument {
        width,
        height,
        shapes,
        horizon_y: horizon.sea_y,
        kind: SceneKind::TheWatchers,
        regions,
        seed,
        sea_config: None,
    }
}
