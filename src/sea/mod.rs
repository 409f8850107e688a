//! Generative seascape strategy.
//!
//! Generation happens in two phases: [`generate_sea_config`] rolls every
//! random decision into a [`SeaConfig`], then [`render_sea_config`] expands
//! the config into shapes with no randomness at all. Documents carry their
//! config, so a stored seascape re-renders identically without replaying
//! any RNG.

mod config;

pub use config::{
    RaySpec, RockSpec, SEA_HEIGHT, SEA_HORIZON_Y, SEA_WIDTH, SeaConfig, generate_sea_config,
};

use rand::Rng;

use crate::boat::render_boat;
use crate::scene::{Band, SceneDocument, SceneKind, Shape, ShapeRole, pt};

/// Expands a config into shapes, back to front.
///
/// Deterministic: calling it twice on the same config yields identical
/// shape lists.
pub fn render_sea_config(config: &SeaConfig) -> Vec<Shape> {
    let mut shapes = Vec::new();

    // Night/dusk backdrop split by a seam leaning from (600, 0) to (350, 900).
    shapes.push(Shape::new(
        "bg-left",
        ShapeRole::Backdrop(Band::Sky),
        vec![pt(0.0, 0.0), pt(600.0, 0.0), pt(350.0, 900.0), pt(0.0, 900.0)],
        config.bg_left.clone(),
        1.0,
    ));
    shapes.push(Shape::new(
        "bg-right",
        ShapeRole::Backdrop(Band::Sky),
        vec![pt(600.0, 0.0), pt(800.0, 0.0), pt(800.0, 900.0), pt(350.0, 900.0)],
        config.bg_right.clone(),
        1.0,
    ));
    shapes.push(Shape::new(
        "sea-base-left",
        ShapeRole::Backdrop(Band::Sea),
        vec![pt(0.0, 900.0), pt(450.0, 900.0), pt(400.0, 1200.0), pt(0.0, 1200.0)],
        config.sea_left.clone(),
        1.0,
    ));
    shapes.push(Shape::new(
        "sea-base-right",
        ShapeRole::Backdrop(Band::Sea),
        vec![pt(450.0, 900.0), pt(800.0, 900.0), pt(800.0, 1200.0), pt(400.0, 1200.0)],
        config.sea_right.clone(),
        1.0,
    ));

    for rock in &config.rocks {
        shapes.push(
            Shape::new(
                rock.id.clone(),
                ShapeRole::Rock,
                vec![
                    pt(rock.x, rock.y),
                    pt(rock.x + rock.width * 0.5, rock.y * 0.5),
                    pt(rock.x + rock.width, rock.y),
                    pt(rock.x + rock.width + rock.skew, SEA_HORIZON_Y),
                    pt(rock.x + rock.skew, SEA_HORIZON_Y),
                ],
                rock.color.clone(),
                0.6,
            )
            .with_blend(rock.blend),
        );
    }

    for boat in &config.boats {
        shapes.extend(render_boat(boat));
    }

    for ray in &config.rays {
        shapes.push(
            Shape::new(
                ray.id.clone(),
                ShapeRole::Ray,
                ray.points.to_vec(),
                ray.color.clone(),
                ray.opacity,
            )
            .with_blend(ray.blend),
        );
    }

    shapes
}

/// Generates a seascape document.
///
/// Reuses `existing` when given (re-rendering a stored scene), otherwise
/// rolls a fresh config. Canvas size and horizon are fixed for this scene
/// family.
pub fn generate_sea<R: Rng>(rng: &mut R, existing: Option<&SeaConfig>) -> SceneDocument {
    let config = match existing {
        Some(config) => config.clone(),
        None => generate_sea_config(rng),
    };
    let shapes = render_sea_config(&config);

    SceneDocument {
        width: SEA_WIDTH,
        height: SEA_HEIGHT,
        shapes,
        horizon_y: SEA_HORIZON_Y,
        kind: SceneKind::CalmSea,
        regions: Vec::new(),
        seed: rng.random::<u64>(),
        sea_config: Some(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_render_is_idempotent() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let config = generate_sea_config(&mut rng);
            assert_eq!(
                render_sea_config(&config),
                render_sea_config(&config),
                "seed {seed}: re-render diverged"
            );
        }
    }

    #[test]
    fn test_existing_config_reused_verbatim() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let config = generate_sea_config(&mut rng);

        let doc = generate_sea(&mut rng, Some(&config));
        assert_eq!(doc.sea_config.as_ref(), Some(&config));
        assert_eq!(doc.shapes, render_sea_config(&config));
    }

    #[test]
    fn test_fixed_canvas_and_horizon() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let doc = generate_sea(&mut rng, None);
        assert_eq!(doc.width, 800);
        assert_eq!(doc.height, 1200);
        assert_eq!(doc.horizon_y, 900.0);
        assert_eq!(doc.kind, SceneKind::CalmSea);
        assert!(doc.sea_config.is_some());
        assert!(doc.regions.is_empty());
    }

    #[test]
    fn test_backdrop_painted_first() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let doc = generate_sea(&mut rng, None);
        let ids: Vec<_> = doc.shapes.iter().take(4).map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["bg-left", "bg-right", "sea-base-left", "sea-base-right"]);
    }

    #[test]
    fn test_all_shapes_are_polygons() {
        let mut rng = ChaCha8Rng::seed_from_u64(29);
        let doc = generate_sea(&mut rng, None);
        assert!(!doc.shapes.is_empty());
        for shape in &doc.shapes {
            assert!(shape.points.len() >= 3, "{} has too few points", shape.id);
            assert!(
                shape.opacity >= 0.0 && shape.opacity <= 1.0,
                "{} opacity {}",
                shape.id,
                shape.opacity
            );
        }
    }

    #[test]
    fn test_rocks_sit_on_the_waterline() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let doc = generate_sea(&mut rng, None);
        for rock in doc.shapes_with_role(ShapeRole::Rock) {
            assert_eq!(rock.points.len(), 5);
            assert_eq!(rock.points[3].y, SEA_HORIZON_Y);
            assert_eq!(rock.points[4].y, SEA_HORIZON_Y);
            assert_eq!(rock.opacity, 0.6);
        }
    }
}
