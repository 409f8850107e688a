//! Fixed color palettes shared by the generation strategies.
//!
//! Colors are hex strings handed to backends verbatim. Each palette is a
//! const table; strategies draw from them with [`pick`].

use rand::Rng;

/// Slate, steel and parchment tones for prismatic sails and crystal slivers.
pub const SAILS: &[&str] = &[
    "#708090", "#778899", "#B0C4DE", "#4682B4", "#5F9EA0", "#D2B48C", "#F5DEB3", "#F0F8FF",
    "#E0FFFF", "#D3D3D3", "#2F4F4F",
];

/// Grey wash tones layered over the sky band.
pub const SKY: &[&str] = &["#A9A9A9", "#778899", "#D3D3D3", "#F0F8FF"];

/// Deep blues and teals for sea perspective bands.
pub const SEA: &[&str] = &["#1E3F5A", "#4682B4", "#5F9EA0", "#2F4F4F"];

/// Near-black earth tones for the faceted ground plane.
pub const GROUND: &[&str] = &["#2F2F2F", "#363636", "#3E3E3E", "#424242", "#483C32", "#3E2723"];

/// Sundress colors for women figures.
pub const SUNDRESS: &[&str] = &["#CD5C5C", "#DAA520", "#20B2AA", "#D8BFD8", "#F4A460"];

/// Suit colors for men figures.
pub const SUIT: &[&str] = &[
    "#000000", "#2F2F2F", "#3E2723", "#1C1C1C", "#5D4037", "#4E342E", "#795548",
];

/// Sail cloth colors for assembled boats, whites through signal reds.
pub const BOAT_SAILS: &[&str] = &[
    "#ffffff", "#d6cead", "#9ea4ab", "#8d9499", "#e0e3e6", "#210e17", "#4a1529", "#c4281f",
    "#f04929", "#69100d", "#f7982a", "#d94a11", "#facc43",
];

/// Shadowed sail cloth, painted as a second triangle behind a sail.
pub const SAIL_SHADOWS: &[&str] = &[
    "#d6cead", "#9ea4ab", "#8d9499", "#210e17", "#69100d", "#0f0407",
];

/// Dark timber colors for boat hulls and hull trim.
pub const HULLS: &[&str] = &["#2b2621", "#453d36", "#120504", "#2e0f0c", "#000000"];

/// Cool night tones for rocks on the left shore.
pub const ROCKS_COOL: &[&str] = &["#18273d", "#335675", "#20334a", "#4e6f8a", "#132338"];

/// Warm dusk tones for rocks on the right shore.
pub const ROCKS_WARM: &[&str] = &["#fad155", "#e08e1b", "#bf4c13", "#f7cd59", "#d49333"];

/// Picks a uniformly random color from a palette.
///
/// # Panics
/// Panics if `palette` is empty.
pub fn pick<R: Rng>(palette: &[&'static str], rng: &mut R) -> &'static str {
    palette[rng.random_range(0..palette.len())]
}
