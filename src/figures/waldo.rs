//! The easter-egg figure.
//!
//! A fixed template rather than a rolled variant: red/white striped shirt,
//! blue trousers, bobble hat, round glasses. Only the position and size
//! vary; everything else is constant so he is recognizable at a glance.

use crate::scene::{FigureKind, Shape, ShapeRole, pt};

/// Shape id prefix of the easter-egg figure.
pub const WALDO_PREFIX: &str = "waldo-";

const SHIRT: &str = "#FFFFFF";
const STRIPE: &str = "#D62828";
const TROUSERS: &str = "#1F4E8C";
const SKIN: &str = "#E8C49C";
const FRAME: &str = "#1A1A1A";

/// Builds the easter-egg figure standing at `(x, foot_y)`.
///
/// `width`/`height` are the figure base size (same units as the generic
/// figures). Deterministic: the template has no random parts.
pub fn waldo_shapes(x: f32, foot_y: f32, width: f32, height: f32) -> Vec<Shape> {
    let role = ShapeRole::Figure(FigureKind::Waldo);
    let (fw, fh) = (width, height);
    let shoulder_y = foot_y - fh * 0.75;
    let hip_y = foot_y - fh * 0.38;

    let mut shapes = Vec::with_capacity(12);

    shapes.push(Shape::new(
        "waldo-trousers",
        role,
        vec![
            pt(x - fw * 0.38, hip_y),
            pt(x + fw * 0.38, hip_y),
            pt(x + fw * 0.34, foot_y),
            pt(x - fw * 0.34, foot_y),
        ],
        TROUSERS,
        0.95,
    ));

    shapes.push(Shape::new(
        "waldo-shirt",
        role,
        vec![
            pt(x - fw * 0.45, shoulder_y),
            pt(x + fw * 0.45, shoulder_y),
            pt(x + fw * 0.38, hip_y),
            pt(x - fw * 0.38, hip_y),
        ],
        SHIRT,
        0.95,
    ));

    // Three red bands across the torso.
    let torso_h = hip_y - shoulder_y;
    for i in 0..3 {
        let t0 = shoulder_y + torso_h * (0.15 + 0.3 * i as f32);
        let t1 = t0 + torso_h * 0.15;
        shapes.push(Shape::new(
            format!("waldo-stripe-{i}"),
            role,
            vec![
                pt(x - fw * 0.43, t0),
                pt(x + fw * 0.43, t0),
                pt(x + fw * 0.41, t1),
                pt(x - fw * 0.41, t1),
            ],
            STRIPE,
            0.95,
        ));
    }

    let head_h = fh * 0.18;
    let head_top = shoulder_y - fh * 0.02 - head_h;
    shapes.push(Shape::new(
        "waldo-head",
        role,
        vec![
            pt(x - fw * 0.3, head_top + head_h),
            pt(x - fw * 0.32, head_top + head_h * 0.4),
            pt(x, head_top),
            pt(x + fw * 0.32, head_top + head_h * 0.4),
            pt(x + fw * 0.3, head_top + head_h),
        ],
        SKIN,
        0.95,
    ));

    // Round glasses, drawn as two small diamonds at eye height.
    let eye_y = head_top + head_h * 0.55;
    let lens = fw * 0.09;
    for (tag, cx) in [("waldo-glasses-l", x - fw * 0.16), ("waldo-glasses-r", x + fw * 0.16)] {
        shapes.push(Shape::new(
            tag,
            role,
            vec![
                pt(cx - lens, eye_y),
                pt(cx, eye_y - lens),
                pt(cx + lens, eye_y),
                pt(cx, eye_y + lens),
            ],
            FRAME,
            0.95,
        ));
    }

    // Bobble hat: red crown, white band, white pom.
    shapes.push(Shape::new(
        "waldo-hat",
        role,
        vec![
            pt(x - fw * 0.34, head_top + head_h * 0.2),
            pt(x + fw * 0.34, head_top + head_h * 0.2),
            pt(x + fw * 0.2, head_top - head_h * 0.5),
            pt(x - fw * 0.2, head_top - head_h * 0.5),
        ],
        STRIPE,
        0.95,
    ));
    shapes.push(Shape::new(
        "waldo-hat-band",
        role,
        vec![
            pt(x - fw * 0.36, head_top + head_h * 0.3),
            pt(x + fw * 0.36, head_top + head_h * 0.3),
            pt(x + fw * 0.34, head_top + head_h * 0.05),
            pt(x - fw * 0.34, head_top + head_h * 0.05),
        ],
        SHIRT,
        0.95,
    ));
    let pom_y = head_top - head_h * 0.5;
    let pom = fw * 0.1;
    shapes.push(Shape::new(
        "waldo-pom",
        role,
        vec![
            pt(x - pom, pom_y),
            pt(x, pom_y - pom * 1.4),
            pt(x + pom, pom_y),
            pt(x, pom_y + pom * 0.6),
        ],
        SHIRT,
        0.95,
    ));

    shapes
}
