//! Procedural generator for Feininger-inspired layered polygon scenes.
//!
//! Each generation strategy turns a canvas size and an RNG into a
//! [`SceneDocument`]: an ordered list of filled polygons (painter's
//! algorithm) plus the clip regions they reference. Rendering is a
//! separate concern; backends consume the document and paint it however
//! they like.
//!
//! ```
//! use prismatism::{Strategy, generate_seeded};
//!
//! let doc = generate_seeded(Strategy::Sails, 800, 600, 42);
//! assert!(!doc.shapes.is_empty());
//! assert_eq!(doc, generate_seeded(Strategy::Sails, 800, 600, 42));
//! ```

pub mod boat;
pub mod export;
pub mod figures;
pub mod palette;
pub mod sails;
pub mod scene;
pub mod sea;
pub mod strategy;

pub use scene::{
    Band, BlendMode, BoatRole, FigureKind, Point, Region, RegionBounds, SceneDocument, SceneKind,
    Shape, ShapeRole,
};
pub use boat::{BoatSpec, SailSpec, assemble_boat, boat_spec, render_boat};
pub use export::{ExportError, JsonExportOptions, document_to_json, write_document_json};
pub use figures::generate_figures;
pub use sails::generate_sails;
pub use sea::{SeaConfig, generate_sea, generate_sea_config, render_sea_config};
pub use strategy::{
    GenerateOptions, Strategy, generate, generate_seeded, generate_with, reference_scene,
};
