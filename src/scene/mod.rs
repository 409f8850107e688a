//! Scene document model.
//!
//! A generated composition is an ordered list of filled polygons plus the
//! clip regions they reference. Backends paint shapes in list order
//! (painter's algorithm); nothing in this module knows how to draw.

mod shape;

pub use shape::{Band, BlendMode, BoatRole, FigureKind, Point, Shape, ShapeRole, pt};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sea::SeaConfig;

/// Geometry of a clip region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionBounds {
    /// Arbitrary polygon, implicitly closed.
    Polygon { points: Vec<Point> },
    /// Full-width horizontal band from `y` to `y + height`.
    Band { y: f32, height: f32 },
}

/// Named clip region that shapes reference via `clip_path_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    #[serde(flatten)]
    pub bounds: RegionBounds,
}

impl Region {
    pub fn polygon(id: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            bounds: RegionBounds::Polygon { points },
        }
    }

    pub fn band(id: impl Into<String>, y: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            bounds: RegionBounds::Band { y, height },
        }
    }
}

/// Version tag identifying which strategy produced a document.
///
/// Serialized as the historical tag strings so existing backends keep
/// recognizing the documents they already handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneKind {
    #[serde(rename = "prismatic-sails")]
    PrismaticSails,
    #[serde(rename = "the-watchers")]
    TheWatchers,
    #[serde(rename = "calm-day-n-plus-1")]
    CalmSea,
    #[serde(rename = "calm-day-at-sea-iii")]
    Reference,
}

impl SceneKind {
    /// Returns all scene kinds in declaration order.
    pub const fn all() -> [SceneKind; 4] {
        [
            SceneKind::PrismaticSails,
            SceneKind::TheWatchers,
            SceneKind::CalmSea,
            SceneKind::Reference,
        ]
    }

    /// Returns the serialized tag string.
    pub const fn name(self) -> &'static str {
        match self {
            SceneKind::PrismaticSails => "prismatic-sails",
            SceneKind::TheWatchers => "the-watchers",
            SceneKind::CalmSea => "calm-day-n-plus-1",
            SceneKind::Reference => "calm-day-at-sea-iii",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete generated composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Shapes in paint order, back to front.
    pub shapes: Vec<Shape>,
    /// Sky/sea boundary in canvas coordinates.
    pub horizon_y: f32,
    /// Which strategy produced the document.
    #[serde(rename = "version")]
    pub kind: SceneKind,
    /// Clip regions referenced by `clip_path_id`. Empty unless the
    /// strategy registers clips.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<Region>,
    /// Display seed (the "edition number" shown next to a piece). Replay
    /// determinism comes from the injected RNG, not from this value.
    pub seed: u64,
    /// Re-render parameters, present only for generative seascapes.
    #[serde(
        default,
        rename = "config",
        skip_serializing_if = "Option::is_none"
    )]
    pub sea_config: Option<SeaConfig>,
}

impl SceneDocument {
    /// Returns the number of shapes in the document.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Returns all shapes carrying the given role, in paint order.
    pub fn shapes_with_role(&self, role: ShapeRole) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |s| s.role == role)
    }

    /// Returns the shapes of one assembled boat, in paint order.
    pub fn boat_shapes(&self, role: BoatRole) -> Vec<&Shape> {
        self.shapes_with_role(ShapeRole::Boat(role)).collect()
    }

    /// Looks up a clip region by id.
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }
}
