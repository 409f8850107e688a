//! Boat assembly.
//!
//! Boats are built in two layers: [`boat_spec`] rolls the random structure
//! into a [`BoatSpec`], and [`render_boat`] expands a spec into shapes with
//! no randomness at all. Seascape re-rendering depends on that split: a
//! stored spec must produce the same shapes every time.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::palette;
use crate::scene::{BlendMode, BoatRole, Shape, ShapeRole, pt};

/// Hull width in canvas units per unit of scale.
const HULL_WIDTH: f32 = 100.0;
/// Hull height in canvas units per unit of scale.
const HULL_HEIGHT: f32 = 20.0;
/// Chance a hull gets a trim strip along the gunwale.
const HULL_TRIM_CHANCE: f64 = 0.6;
/// Chance a sail gets a shadowed companion triangle.
const SAIL_SHADOW_CHANCE: f64 = 0.5;

/// Parameters of a single sail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SailSpec {
    /// Foot width in canvas units (already scaled).
    pub width: f32,
    /// Mast height in canvas units (already scaled).
    pub height: f32,
    /// X of the sail foot center.
    pub foot_x: f32,
    /// X of the sail tip; the offset from `foot_x` gives the lean.
    pub tip_x: f32,
    /// Sail cloth color.
    pub color: String,
    /// Shadow cloth color; `None` paints the sail as a single triangle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
}

/// Parameters of one assembled boat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatSpec {
    /// Position slot; every emitted shape id starts with its prefix.
    pub role: BoatRole,
    /// X of the hull center.
    pub x: f32,
    /// Waterline y.
    pub y: f32,
    /// Overall size multiplier.
    pub scale: f32,
    /// Hull timber color.
    pub hull_color: String,
    /// Trim color painted along the gunwale; `None` keeps a bare hull.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hull_trim: Option<String>,
    /// Sails from mast-forward order, 1 to 4 of them.
    pub sails: Vec<SailSpec>,
}

/// Rolls the random structure of a boat anchored at `(x, y)`.
///
/// # Arguments
/// * `role` - Position slot; determines the shape id prefix
/// * `x` - Hull center in canvas coordinates
/// * `y` - Waterline in canvas coordinates
/// * `scale` - Overall size multiplier, must be positive
pub fn boat_spec<R: Rng>(role: BoatRole, x: f32, y: f32, scale: f32, rng: &mut R) -> BoatSpec {
    debug_assert!(scale > 0.0, "boat scale must be positive");

    let hull_color = palette::pick(palette::HULLS, rng).to_string();
    let hull_trim = rng
        .random_bool(HULL_TRIM_CHANCE)
        .then(|| palette::pick(palette::HULLS, rng).to_string());

    let sail_count = rng.random_range(1..=4);
    let mut sails = Vec::with_capacity(sail_count);
    for _ in 0..sail_count {
        let width = rng.random_range(40.0..100.0) * scale;
        let height = rng.random_range(100.0..400.0) * scale;
        let foot_x = x + rng.random_range(-30.0 * scale..30.0 * scale);
        let tip_x = x + rng.random_range(-100.0 * scale..100.0 * scale);
        let color = palette::pick(palette::BOAT_SAILS, rng).to_string();
        let shadow = rng
            .random_bool(SAIL_SHADOW_CHANCE)
            .then(|| palette::pick(palette::SAIL_SHADOWS, rng).to_string());
        sails.push(SailSpec {
            width,
            height,
            foot_x,
            tip_x,
            color,
            shadow,
        });
    }

    BoatSpec {
        role,
        x,
        y,
        scale,
        hull_color,
        hull_trim,
        sails,
    }
}

/// Expands a boat spec into shapes, back to front.
///
/// Emits the hull (plus the optional trim strip), each sail (plus its
/// optional shadow half), and exactly one hull reflection below the
/// waterline. Purely a function of the spec.
pub fn render_boat(spec: &BoatSpec) -> Vec<Shape> {
    let role = ShapeRole::Boat(spec.role);
    let prefix = spec.role.prefix();
    let hw = HULL_WIDTH * spec.scale;
    let hh = HULL_HEIGHT * spec.scale;
    let (x, y) = (spec.x, spec.y);

    let mut shapes = Vec::with_capacity(2 + spec.sails.len() * 2 + 1);

    shapes.push(Shape::new(
        format!("{prefix}-hull"),
        role,
        vec![
            pt(x - hw * 0.5, y),
            pt(x + hw * 0.6, y),
            pt(x + hw * 0.4, y + hh),
            pt(x - hw * 0.3, y + hh),
        ],
        spec.hull_color.clone(),
        1.0,
    ));

    if let Some(trim) = &spec.hull_trim {
        // Strip along the hull's top edge, same slant as the gunwale.
        shapes.push(Shape::new(
            format!("{prefix}-hull-trim"),
            role,
            vec![
                pt(x - hw * 0.5, y),
                pt(x + hw * 0.6, y),
                pt(x + hw * 0.55, y + hh * 0.35),
                pt(x - hw * 0.45, y + hh * 0.35),
            ],
            trim.clone(),
            1.0,
        ));
    }

    for (i, sail) in spec.sails.iter().enumerate() {
        shapes.push(Shape::new(
            format!("{prefix}-sail-{i}"),
            role,
            vec![
                pt(sail.foot_x - sail.width * 0.5, y),
                pt(sail.foot_x + sail.width * 0.5, y),
                pt(sail.tip_x, y - sail.height),
            ],
            sail.color.clone(),
            0.9,
        ));
        if let Some(shadow) = &sail.shadow {
            // Leeward half of the cloth, meeting the main triangle at the tip.
            shapes.push(Shape::new(
                format!("{prefix}-sail-{i}-shadow"),
                role,
                vec![
                    pt(sail.foot_x, y),
                    pt(sail.foot_x + sail.width * 0.5, y),
                    pt(sail.tip_x, y - sail.height),
                ],
                shadow.clone(),
                0.9,
            ));
        }
    }

    shapes.push(
        Shape::new(
            format!("{prefix}-refl"),
            role,
            vec![
                pt(x - hw * 0.4, y + hh),
                pt(x + hw * 0.5, y + hh),
                pt(x + hw * 0.3, y + hh * 6.0),
                pt(x - hw * 0.1, y + hh * 5.0),
            ],
            spec.hull_color.clone(),
            0.15,
        )
        .with_blend(BlendMode::Overlay),
    );

    shapes
}

/// Rolls a spec and renders it in one step.
pub fn assemble_boat<R: Rng>(role: BoatRole, x: f32, y: f32, scale: f32, rng: &mut R) -> Vec<Shape> {
    render_boat(&boat_spec(role, x, y, scale, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn count_hulls(shapes: &[Shape]) -> usize {
        shapes.iter().filter(|s| s.id.contains("hull")).count()
    }

    fn count_sails(shapes: &[Shape]) -> usize {
        shapes
            .iter()
            .filter(|s| s.id.contains("-sail-") && !s.id.ends_with("-shadow"))
            .count()
    }

    #[test]
    fn test_boat_structure_invariant() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let shapes = assemble_boat(BoatRole::Left, 230.0, 900.0, 0.8, &mut rng);

            let hulls = count_hulls(&shapes);
            assert!((1..=2).contains(&hulls), "seed {seed}: {hulls} hull shapes");

            let sails = count_sails(&shapes);
            assert!((1..=4).contains(&sails), "seed {seed}: {sails} sails");

            let shadows = shapes.iter().filter(|s| s.id.ends_with("-shadow")).count();
            assert!(shadows <= sails, "seed {seed}: more shadows than sails");

            let reflections = shapes.iter().filter(|s| s.id.ends_with("-refl")).count();
            assert_eq!(reflections, 1, "seed {seed}: expected exactly one reflection");
        }
    }

    #[test]
    fn test_boat_ids_carry_role_prefix() {
        for role in BoatRole::all() {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            let shapes = assemble_boat(role, 400.0, 900.0, 1.0, &mut rng);
            assert!(!shapes.is_empty());
            for shape in &shapes {
                assert!(
                    shape.id.starts_with(role.prefix()),
                    "{} does not start with {}",
                    shape.id,
                    role.prefix()
                );
                assert_eq!(shape.role, ShapeRole::Boat(role));
            }
        }
    }

    #[test]
    fn test_render_boat_is_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let spec = boat_spec(BoatRole::Foreground, 350.0, 950.0, 1.8, &mut rng);
        assert_eq!(render_boat(&spec), render_boat(&spec));
    }

    #[test]
    fn test_scale_drives_hull_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let small = boat_spec(BoatRole::Distant, 440.0, 900.0, 0.3, &mut rng);
        let large = boat_spec(BoatRole::Foreground, 440.0, 900.0, 1.8, &mut rng);

        let hull_width = |shapes: &[Shape]| {
            let hull = &shapes[0];
            hull.points[1].x - hull.points[0].x
        };
        let small_w = hull_width(&render_boat(&small));
        let large_w = hull_width(&render_boat(&large));
        assert!(large_w > small_w * 5.0, "{large_w} vs {small_w}");
    }

    #[test]
    fn test_reflection_sits_below_waterline() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let spec = boat_spec(BoatRole::Right, 650.0, 910.0, 1.1, &mut rng);
        let shapes = render_boat(&spec);
        let refl = shapes.iter().find(|s| s.id.ends_with("-refl")).unwrap();
        assert!(refl.points.iter().all(|p| p.y > spec.y));
        assert_eq!(refl.blend_mode, Some(BlendMode::Overlay));
        assert_eq!(refl.opacity, 0.15);
    }

    #[test]
    fn test_trim_and_shadow_both_occur() {
        let mut trims = 0;
        let mut shadows = 0;
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let spec = boat_spec(BoatRole::Left, 230.0, 900.0, 0.8, &mut rng);
            if spec.hull_trim.is_some() {
                trims += 1;
            }
            if spec.sails.iter().any(|s| s.shadow.is_some()) {
                shadows += 1;
            }
        }
        // 0.6 and >= 0.5 per boat; both should show up often in 200 rolls.
        assert!(trims > 60, "trim rolled {trims} times");
        assert!(shadows > 60, "shadow rolled {shadows} times");
    }
}
