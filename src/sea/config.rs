//! Random parameter snapshot for the generative seascape.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::boat::{BoatSpec, boat_spec};
use crate::palette;
use crate::scene::{BlendMode, BoatRole, Point, pt};

/// Canvas width of every generative seascape.
pub const SEA_WIDTH: u32 = 800;
/// Canvas height of every generative seascape.
pub const SEA_HEIGHT: u32 = 1200;
/// Waterline of the composition.
pub const SEA_HORIZON_Y: f32 = 900.0;

/// Chance the foreground boat appears at all.
const FOREGROUND_BOAT_CHANCE: f64 = 0.8;
/// Chance a left-shore rock blends multiply rather than normal.
const ROCK_MULTIPLY_CHANCE: f64 = 0.7;
/// Chance a right-shore rock blends overlay rather than normal.
const ROCK_OVERLAY_CHANCE: f64 = 0.7;

/// Fixed anchors of the three always-present boats: (role, x, y, scale).
const BOAT_ANCHORS: [(BoatRole, f32, f32, f32); 3] = [
    (BoatRole::Distant, 440.0, 900.0, 0.3),
    (BoatRole::Left, 230.0, 900.0, 0.8),
    (BoatRole::Right, 650.0, 910.0, 1.1),
];

/// Waterline of the optional foreground boat.
const FOREGROUND_Y: f32 = 950.0;
/// Scale of the optional foreground boat.
const FOREGROUND_SCALE: f32 = 1.8;

/// One shore rock silhouette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockSpec {
    pub id: String,
    /// X of the left shoulder.
    pub x: f32,
    pub width: f32,
    /// Y of the shoulders; the peak rises to half of it.
    pub y: f32,
    /// Horizontal drift of the base toward the waterline.
    pub skew: f32,
    pub color: String,
    pub blend: BlendMode,
}

/// One diffuse light ray crossing the whole canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaySpec {
    pub id: String,
    /// Trapezoid corners: two above the canvas, two below it.
    pub points: [Point; 4],
    pub color: String,
    pub opacity: f32,
    pub blend: BlendMode,
}

/// Everything random about a seascape, captured before any shape exists.
///
/// Rendering a config is deterministic, so a document carries its config
/// and can be re-rendered identically later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaConfig {
    pub bg_left: String,
    pub bg_right: String,
    pub sea_left: String,
    pub sea_right: String,
    pub rocks: Vec<RockSpec>,
    pub boats: Vec<BoatSpec>,
    pub rays: Vec<RaySpec>,
}

/// Rolls a fresh seascape config.
///
/// All randomness of the strategy happens here; the rendering phase only
/// expands what this returns.
pub fn generate_sea_config<R: Rng>(rng: &mut R) -> SeaConfig {
    let mut config = SeaConfig {
        bg_left: "#141f33".to_string(),
        bg_right: "#e8a825".to_string(),
        sea_left: "#3d5452".to_string(),
        sea_right: "#ad7121".to_string(),
        rocks: Vec::new(),
        boats: Vec::new(),
        rays: Vec::new(),
    };

    let left_rocks = rng.random_range(4..=7);
    for i in 0..left_rocks {
        config.rocks.push(RockSpec {
            id: format!("rock-left-{i}"),
            x: rng.random_range(0.0..400.0),
            width: rng.random_range(100.0..300.0),
            y: rng.random_range(0.0..400.0),
            skew: rng.random_range(-100.0..100.0),
            color: palette::pick(palette::ROCKS_COOL, rng).to_string(),
            blend: if rng.random_bool(ROCK_MULTIPLY_CHANCE) {
                BlendMode::Multiply
            } else {
                BlendMode::Normal
            },
        });
    }

    let right_rocks = rng.random_range(4..=7);
    for i in 0..right_rocks {
        config.rocks.push(RockSpec {
            id: format!("rock-right-{i}"),
            x: rng.random_range(400.0..800.0),
            width: rng.random_range(100.0..300.0),
            y: rng.random_range(0.0..400.0),
            skew: rng.random_range(-100.0..100.0),
            color: palette::pick(palette::ROCKS_WARM, rng).to_string(),
            blend: if rng.random_bool(ROCK_OVERLAY_CHANCE) {
                BlendMode::Overlay
            } else {
                BlendMode::Normal
            },
        });
    }

    for (role, x, y, scale) in BOAT_ANCHORS {
        config.boats.push(boat_spec(role, x, y, scale, rng));
    }
    if rng.random_bool(FOREGROUND_BOAT_CHANCE) {
        let x = rng.random_range(100.0..700.0);
        config.boats.push(boat_spec(
            BoatRole::Foreground,
            x,
            FOREGROUND_Y,
            FOREGROUND_SCALE,
            rng,
        ));
    }

    for i in 0..4 {
        config.rays.push(RaySpec {
            id: format!("ray-{i}"),
            points: [
                pt(rng.random_range(-200.0..800.0), -100.0),
                pt(rng.random_range(0.0..1000.0), 1200.0),
                pt(rng.random_range(0.0..1000.0), 1200.0),
                pt(rng.random_range(-200.0..800.0), -100.0),
            ],
            color: if rng.random_bool(0.5) { "#ffffff" } else { "#000000" }.to_string(),
            opacity: rng.random_range(0.05..0.15),
            blend: if rng.random_bool(0.5) {
                BlendMode::Overlay
            } else {
                BlendMode::Multiply
            },
        });
    }

    config
}
