//! Prismatic sails strategy.
//!
//! The oldest composition: translucent sail triangles stood on a flat
//! horizon, each mirrored by a wobblier reflection below it, then washed
//! over with light beams and a few crystal slivers.

use std::f32::consts::PI;

use rand::Rng;

use crate::palette;
use crate::scene::{Band, BlendMode, SceneDocument, SceneKind, Shape, ShapeRole, pt};

/// Horizon position as a fraction of canvas height.
const HORIZON_FRACTION: f32 = 0.66;

/// Generates a prismatic sails composition.
///
/// # Arguments
/// * `width`, `height` - Canvas size in pixels
/// * `rng` - Source of every random decision
pub fn generate_sails<R: Rng>(width: u32, height: u32, rng: &mut R) -> SceneDocument {
    let w = width as f32;
    let h = height as f32;
    let horizon_y = h * HORIZON_FRACTION;
    let seed: u64 = rng.random_range(1..1000);

    let mut shapes = Vec::new();

    shapes.push(Shape::new(
        "sky",
        ShapeRole::Backdrop(Band::Sky),
        vec![pt(0.0, 0.0), pt(w, 0.0), pt(w, horizon_y), pt(0.0, horizon_y)],
        "#E0FFFF",
        0.3,
    ));
    shapes.push(Shape::new(
        "sea",
        ShapeRole::Backdrop(Band::Sea),
        vec![pt(0.0, horizon_y), pt(w, horizon_y), pt(w, h), pt(0.0, h)],
        "#708090",
        0.3,
    ));

    let sail_count = rng.random_range(5..=12);
    for i in 0..sail_count {
        let base_x = rng.random_range(w * 0.1..w * 0.9);
        let foot_width = rng.random_range(w * 0.02..w * 0.08);
        let sail_height = rng.random_range(h * 0.2..h * 0.5);
        let tip_x = base_x + rng.random_range(-foot_width..foot_width) * 2.0;
        let tip_y = horizon_y - sail_height;
        let color = palette::pick(palette::SAILS, rng);
        let opacity = rng.random_range(0.2..0.5);

        shapes.push(Shape::new(
            format!("sail-{i}"),
            ShapeRole::Sail,
            vec![
                pt(base_x - foot_width / 2.0, horizon_y),
                pt(base_x + foot_width / 2.0, horizon_y),
                pt(tip_x, tip_y),
            ],
            color,
            opacity,
        ));
        // Reflection shares the foot but drifts and stretches a little.
        shapes.push(Shape::new(
            format!("refl-{i}"),
            ShapeRole::Reflection,
            vec![
                pt(base_x - foot_width / 2.0, horizon_y),
                pt(base_x + foot_width / 2.0, horizon_y),
                pt(
                    tip_x + rng.random_range(-10.0..10.0),
                    horizon_y + sail_height * rng.random_range(0.8..1.2),
                ),
            ],
            color,
            opacity * 0.6,
        ));
    }

    let beam_count = rng.random_range(5..=10);
    for i in 0..beam_count {
        let top_x = rng.random_range(-w * 0.2..w);
        let slant = rng.random_range(-w * 0.25..w * 0.25);
        let beam_width = rng.random_range(w * 0.02..w * 0.12);
        let fill = if rng.random_bool(0.5) { "#FFFFFF" } else { "#F0F8FF" };
        shapes.push(
            Shape::new(
                format!("beam-{i}"),
                ShapeRole::LightShard,
                vec![
                    pt(top_x, 0.0),
                    pt(top_x + beam_width, 0.0),
                    pt(top_x + beam_width + slant, h),
                    pt(top_x + slant, h),
                ],
                fill,
                rng.random_range(0.04..0.10),
            )
            .with_blend(BlendMode::Screen),
        );
    }

    let crystal_count = rng.random_range(3..=7);
    for i in 0..crystal_count {
        let x0 = rng.random_range(0.0..w);
        let y0 = rng.random_range(0.0..h);
        let len = rng.random_range(w * 0.05..w * 0.35);
        let angle = rng.random_range(0.0..PI);
        let (dx, dy) = (angle.cos() * len, angle.sin() * len);
        // Extrude the segment a pixel sideways so it paints as a sliver.
        let (nx, ny) = (-dy / len, dx / len);
        shapes.push(Shape::new(
            format!("crystal-{i}"),
            ShapeRole::Crystalline,
            vec![
                pt(x0, y0),
                pt(x0 + dx, y0 + dy),
                pt(x0 + dx + nx, y0 + dy + ny),
                pt(x0 + nx, y0 + ny),
            ],
            palette::pick(palette::SAILS, rng),
            rng.random_range(0.2..0.45),
        ));
    }

    SceneDocument {
        width,
        height,
        shapes,
        horizon_y,
        kind: SceneKind::PrismaticSails,
        regions: Vec::new(),
        seed,
        sea_config: None,
    }
}
