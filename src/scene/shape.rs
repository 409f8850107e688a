//! Shape-level data model: points, blend modes, roles, and filled polygons.

use serde::{Deserialize, Serialize};

/// A 2D point in canvas coordinates (origin top-left, y axis pointing down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the point with both coordinates clamped into a canvas.
    pub fn clamped(self, width: f32, height: f32) -> Self {
        Self {
            x: self.x.clamp(0.0, width),
            y: self.y.clamp(0.0, height),
        }
    }
}

/// Shorthand constructor for polygon literals.
pub const fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Compositing mode applied when a shape is painted over the layers below it.
///
/// The set matches the CSS `mix-blend-mode` keywords. Backends treat a
/// missing mode as [`BlendMode::Multiply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
}

impl BlendMode {
    /// Returns all blend modes in declaration order.
    pub const fn all() -> [BlendMode; 12] {
        [
            BlendMode::Normal,
            BlendMode::Multiply,
            BlendMode::Screen,
            BlendMode::Overlay,
            BlendMode::Darken,
            BlendMode::Lighten,
            BlendMode::ColorDodge,
            BlendMode::ColorBurn,
            BlendMode::HardLight,
            BlendMode::SoftLight,
            BlendMode::Difference,
            BlendMode::Exclusion,
        ]
    }

    /// Returns the CSS keyword for this mode.
    pub const fn as_css(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
        }
    }
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::Multiply
    }
}

/// Horizontal band of the composition a backdrop or variation shape covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Band {
    Sky,
    Sea,
    Ground,
}

/// Which figure template produced a figure shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FigureKind {
    Man,
    Woman,
    /// The striped-shirt easter-egg figure.
    Waldo,
}

/// Position slot of an assembled boat within a seascape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoatRole {
    Distant,
    Left,
    Right,
    Foreground,
}

impl BoatRole {
    /// Returns all boat roles in back-to-front paint order.
    pub const fn all() -> [BoatRole; 4] {
        [
            BoatRole::Distant,
            BoatRole::Left,
            BoatRole::Right,
            BoatRole::Foreground,
        ]
    }

    /// Returns the shape id prefix for this slot.
    ///
    /// Animation backends group a boat's shapes by this prefix, so every
    /// shape the assembler emits for a boat starts with it.
    pub const fn prefix(self) -> &'static str {
        match self {
            BoatRole::Distant => "distant-boat",
            BoatRole::Left => "left-boat",
            BoatRole::Right => "right-boat",
            BoatRole::Foreground => "foreground-boat",
        }
    }
}

/// Structural role of a shape within a scene.
///
/// Ids keep their legacy prefixes ("left-boat", "waldo-") for backend
/// grouping; the role carries the same information without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeRole {
    /// Base fill behind everything else in its band.
    Backdrop(Band),
    /// Translucent quad layered over a band for tonal variation.
    Variation(Band),
    /// One segment of a horizontal sea perspective band.
    SeaBand,
    /// One tile of the faceted ground plane.
    GroundFacet,
    Sail,
    /// Mirrored counterpart of a sail below the horizon.
    Reflection,
    /// Diffuse light beam or shard.
    LightShard,
    /// Thin sliver suggesting fractured light.
    Crystalline,
    Figure(FigureKind),
    Boat(BoatRole),
    Rock,
    Ray,
}

/// A single filled polygon. The point list is implicitly closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Unique id within the document.
    pub id: String,
    pub role: ShapeRole,
    /// Polygon vertices, at least 3.
    pub points: Vec<Point>,
    /// Fill color as a hex string, e.g. "#4682B4".
    pub fill: String,
    /// Fill opacity in [0, 1].
    pub opacity: f32,
    /// Id of a clip region registered on the document, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_path_id: Option<String>,
    /// Compositing mode; `None` leaves the backend default (multiply).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
}

impl Shape {
    pub fn new(
        id: impl Into<String>,
        role: ShapeRole,
        points: Vec<Point>,
        fill: impl Into<String>,
        opacity: f32,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            points,
            fill: fill.into(),
            opacity,
            clip_path_id: None,
            blend_mode: None,
        }
    }

    /// Sets an explicit blend mode.
    pub fn with_blend(mut self, mode: BlendMode) -> Self {
        self.blend_mode = Some(mode);
        self
    }

    /// Clips the shape to a region registered on the document.
    pub fn with_clip(mut self, clip_id: impl Into<String>) -> Self {
        self.clip_path_id = Some(clip_id.into());
        self
    }

    /// Returns the blend mode a backend should apply.
    pub fn blend_or_default(&self) -> BlendMode {
        self.blend_mode.unwrap_or_default()
    }
}
