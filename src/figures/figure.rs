//! Procedural human figures for the landscape strategy.
//!
//! Same two-layer shape as the boat module: [`figure_spec`] rolls the
//! variant anatomy into a [`FigureSpec`], [`render_figure`] expands a spec
//! into named polygons with no randomness. Proportions all derive from a
//! shared base size so figures vary in scale but stay self-consistent.

use rand::Rng;

use crate::palette;
use crate::scene::{FigureKind, Shape, ShapeRole, pt};

/// Figure width as a fraction of canvas width, before the size roll.
const BASE_WIDTH_FRACTION: f32 = 0.025;
/// Figure height as a fraction of canvas height, before the size roll.
const BASE_HEIGHT_FRACTION: f32 = 0.12;
/// Chance a rolled figure is a man rather than a woman.
const MAN_CHANCE: f64 = 0.55;

/// Skin tone shared by every generic figure.
const SKIN: &str = "#C8A27C";
/// Hair colors, black through grey.
const HAIR: &[&str] = &["#1C1C1C", "#3E2723", "#5D4037", "#A9A9A9"];

/// Which way a figure faces; akimbo arms and capes swing to this side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Unit sign of the facing direction on the x axis.
    fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Arm pose variants for men.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmPose {
    Straight,
    Akimbo,
    Crossed,
}

/// Headwear and hair variants for men.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Headwear {
    HatWithHair,
    ShortHair,
    LongHair,
    Balding,
    Bald,
}

/// Top-layer style variants for women.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopStyle {
    Shawl,
    Cape,
    Bodice,
}

/// Variant-specific rolls of one figure.
#[derive(Debug, Clone, PartialEq)]
pub enum FigureBuild {
    Man {
        pose: ArmPose,
        headwear: Headwear,
        suit: String,
        hair: String,
    },
    Woman {
        top: TopStyle,
        dress: String,
        accent: String,
        hair: String,
    },
}

/// One rolled figure, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSpec {
    /// Position in the figure sequence; part of every shape id.
    pub index: usize,
    /// Foot anchor x.
    pub x: f32,
    /// Foot anchor y on (or slightly below) the ground line.
    pub foot_y: f32,
    /// Body width in canvas units, size roll applied.
    pub width: f32,
    /// Body height in canvas units, size roll applied.
    pub height: f32,
    pub facing: Facing,
    pub build: FigureBuild,
}

impl FigureSpec {
    /// Kind tag carried by every shape of this figure.
    pub fn kind(&self) -> FigureKind {
        match self.build {
            FigureBuild::Man { .. } => FigureKind::Man,
            FigureBuild::Woman { .. } => FigureKind::Woman,
        }
    }

    fn id_prefix(&self) -> String {
        match self.build {
            FigureBuild::Man { .. } => format!("man-{}", self.index),
            FigureBuild::Woman { .. } => format!("woman-{}", self.index),
        }
    }
}

/// Rolls the variant anatomy of one figure standing at `(x, foot_y)`.
pub fn figure_spec<R: Rng>(
    index: usize,
    x: f32,
    foot_y: f32,
    canvas_width: f32,
    canvas_height: f32,
    rng: &mut R,
) -> FigureSpec {
    let size = rng.random_range(0.8..1.15);
    let width = canvas_width * BASE_WIDTH_FRACTION * size;
    let height = canvas_height * BASE_HEIGHT_FRACTION * size;
    let facing = if rng.random_bool(0.5) { Facing::Left } else { Facing::Right };

    let build = if rng.random_bool(MAN_CHANCE) {
        let pose = match rng.random_range(0..3) {
            0 => ArmPose::Straight,
            1 => ArmPose::Akimbo,
            _ => ArmPose::Crossed,
        };
        let headwear = match rng.random_range(0..5) {
            0 => Headwear::HatWithHair,
            1 => Headwear::ShortHair,
            2 => Headwear::LongHair,
            3 => Headwear::Balding,
            _ => Headwear::Bald,
        };
        FigureBuild::Man {
            pose,
            headwear,
            suit: palette::pick(palette::SUIT, rng).to_string(),
            hair: palette::pick(HAIR, rng).to_string(),
        }
    } else {
        let top = match rng.random_range(0..3) {
            0 => TopStyle::Shawl,
            1 => TopStyle::Cape,
            _ => TopStyle::Bodice,
        };
        FigureBuild::Woman {
            top,
            dress: palette::pick(palette::SUNDRESS, rng).to_string(),
            accent: palette::pick(palette::SUIT, rng).to_string(),
            hair: palette::pick(HAIR, rng).to_string(),
        }
    };

    FigureSpec {
        index,
        x,
        foot_y,
        width,
        height,
        facing,
        build,
    }
}

/// Expands a figure spec into shapes, back to front. Deterministic.
pub fn render_figure(spec: &FigureSpec) -> Vec<Shape> {
    match &spec.build {
        FigureBuild::Man {
            pose,
            headwear,
            suit,
            hair,
        } => render_man(spec, *pose, *headwear, suit, hair),
        FigureBuild::Woman {
            top,
            dress,
            accent,
            hair,
        } => render_woman(spec, *top, dress, accent, hair),
    }
}

fn render_man(
    spec: &FigureSpec,
    pose: ArmPose,
    headwear: Headwear,
    suit: &str,
    hair: &str,
) -> Vec<Shape> {
    let role = ShapeRole::Figure(FigureKind::Man);
    let prefix = spec.id_prefix();
    let (x, fy, fw, fh) = (spec.x, spec.foot_y, spec.width, spec.height);
    let sign = spec.facing.sign();

    let shoulder_y = fy - fh * 0.75;
    let hip_y = fy - fh * 0.4;
    let mut shapes = Vec::new();

    shapes.push(Shape::new(
        format!("{prefix}-body"),
        role,
        vec![
            pt(x - fw * 0.5, shoulder_y),
            pt(x + fw * 0.5, shoulder_y),
            pt(x + fw * 0.4, fy),
            pt(x - fw * 0.4, fy),
        ],
        suit,
        0.95,
    ));

    match pose {
        ArmPose::Straight => {
            for (tag, side) in [("arm-l", -1.0), ("arm-r", 1.0)] {
                shapes.push(Shape::new(
                    format!("{prefix}-{tag}"),
                    role,
                    vec![
                        pt(x + side * fw * 0.5, shoulder_y),
                        pt(x + side * fw * 0.65, shoulder_y + fh * 0.05),
                        pt(x + side * fw * 0.6, hip_y + fh * 0.1),
                        pt(x + side * fw * 0.45, hip_y + fh * 0.1),
                    ],
                    suit,
                    0.95,
                ));
            }
        }
        ArmPose::Akimbo => {
            // Facing-side elbow juts out; the other arm hangs straight.
            shapes.push(Shape::new(
                format!("{prefix}-arm-akimbo"),
                role,
                vec![
                    pt(x + sign * fw * 0.5, shoulder_y),
                    pt(x + sign * fw * 1.1, shoulder_y + fh * 0.2),
                    pt(x + sign * fw * 0.4, hip_y),
                ],
                suit,
                0.95,
            ));
            shapes.push(Shape::new(
                format!("{prefix}-arm-straight"),
                role,
                vec![
                    pt(x - sign * fw * 0.5, shoulder_y),
                    pt(x - sign * fw * 0.65, shoulder_y + fh * 0.05),
                    pt(x - sign * fw * 0.6, hip_y + fh * 0.1),
                    pt(x - sign * fw * 0.45, hip_y + fh * 0.1),
                ],
                suit,
                0.95,
            ));
        }
        ArmPose::Crossed => {
            shapes.push(Shape::new(
                format!("{prefix}-arms-crossed"),
                role,
                vec![
                    pt(x - fw * 0.6, shoulder_y + fh * 0.08),
                    pt(x + fw * 0.6, shoulder_y + fh * 0.08),
                    pt(x + fw * 0.5, shoulder_y + fh * 0.22),
                    pt(x - fw * 0.5, shoulder_y + fh * 0.22),
                ],
                suit,
                0.95,
            ));
        }
    }

    let head_h = fh * 0.18;
    let head_top = shoulder_y - fh * 0.02 - head_h;
    shapes.push(Shape::new(
        format!("{prefix}-head"),
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

    match headwear {
        Headwear::HatWithHair => {
            shapes.push(Shape::new(
                format!("{prefix}-hair"),
                role,
                vec![
                    pt(x - sign * fw * 0.32, head_top + head_h * 0.5),
                    pt(x - sign * fw * 0.45, head_top + head_h * 0.9),
                    pt(x - sign * fw * 0.25, head_top + head_h * 0.8),
                ],
                hair,
                0.95,
            ));
            shapes.push(Shape::new(
                format!("{prefix}-hat"),
                role,
                vec![
                    pt(x - fw * 0.45, head_top + head_h * 0.35),
                    pt(x + fw * 0.45, head_top + head_h * 0.35),
                    pt(x + fw * 0.3, head_top - head_h * 0.35),
                    pt(x - fw * 0.3, head_top - head_h * 0.35),
                ],
                suit,
                0.95,
            ));
        }
        Headwear::ShortHair => {
            shapes.push(Shape::new(
                format!("{prefix}-hair"),
                role,
                vec![
                    pt(x - fw * 0.32, head_top + head_h * 0.4),
                    pt(x + fw * 0.32, head_top + head_h * 0.4),
                    pt(x, head_top - head_h * 0.05),
                ],
                hair,
                0.95,
            ));
        }
        Headwear::LongHair => {
            shapes.push(Shape::new(
                format!("{prefix}-hair"),
                role,
                vec![
                    pt(x - fw * 0.38, shoulder_y + fh * 0.05),
                    pt(x - fw * 0.34, head_top),
                    pt(x + fw * 0.34, head_top),
                    pt(x + fw * 0.38, shoulder_y + fh * 0.05),
                    pt(x, head_top + head_h * 0.3),
                ],
                hair,
                0.95,
            ));
        }
        Headwear::Balding => {
            // Tufts above the ears only.
            shapes.push(Shape::new(
                format!("{prefix}-hair"),
                role,
                vec![
                    pt(x - fw * 0.34, head_top + head_h * 0.45),
                    pt(x - fw * 0.2, head_top + head_h * 0.3),
                    pt(x - fw * 0.2, head_top + head_h * 0.6),
                ],
                hair,
                0.95,
            ));
        }
        Headwear::Bald => {}
    }

    shapes
}

fn render_woman(
    spec: &FigureSpec,
    top: TopStyle,
    dress: &str,
    accent: &str,
    hair: &str,
) -> Vec<Shape> {
    let role = ShapeRole::Figure(FigureKind::Woman);
    let prefix = spec.id_prefix();
    let (x, fy, fw, fh) = (spec.x, spec.foot_y, spec.width, spec.height);
    let sign = spec.facing.sign();

    let shoulder_y = fy - fh * 0.72;
    let mut shapes = Vec::new();

    shapes.push(Shape::new(
        format!("{prefix}-dress"),
        role,
        vec![
            pt(x - fw * 0.3, shoulder_y),
            pt(x + fw * 0.3, shoulder_y),
            pt(x + fw * 0.9, fy),
            pt(x - fw * 0.9, fy),
        ],
        dress,
        0.95,
    ));

    match top {
        TopStyle::Shawl => {
            shapes.push(Shape::new(
                format!("{prefix}-shawl"),
                role,
                vec![
                    pt(x - fw * 0.75, shoulder_y + fh * 0.18),
                    pt(x, shoulder_y - fh * 0.02),
                    pt(x + fw * 0.75, shoulder_y + fh * 0.18),
                    pt(x, shoulder_y + fh * 0.3),
                ],
                accent,
                0.95,
            ));
        }
        TopStyle::Cape => {
            // Flares out behind, away from the facing side.
            shapes.push(Shape::new(
                format!("{prefix}-cape"),
                role,
                vec![
                    pt(x - sign * fw * 0.3, shoulder_y),
                    pt(x + sign * fw * 0.2, shoulder_y),
                    pt(x - sign * fw * 1.1, fy - fh * 0.15),
                    pt(x - sign * fw * 0.6, fy - fh * 0.05),
                ],
                accent,
                0.9,
            ));
        }
        TopStyle::Bodice => {
            shapes.push(Shape::new(
                format!("{prefix}-bodice"),
                role,
                vec![
                    pt(x - fw * 0.3, shoulder_y),
                    pt(x + fw * 0.3, shoulder_y),
                    pt(x + fw * 0.38, fy - fh * 0.35),
                    pt(x - fw * 0.38, fy - fh * 0.35),
                ],
                accent,
                0.95,
            ));
        }
    }

    let head_h = fh * 0.18;
    let head_top = shoulder_y - fh * 0.02 - head_h;
    shapes.push(Shape::new(
        format!("{prefix}-head"),
        role,
        vec![
            pt(x - fw * 0.28, head_top + head_h),
            pt(x - fw * 0.3, head_top + head_h * 0.4),
            pt(x, head_top),
            pt(x + fw * 0.3, head_top + head_h * 0.4),
            pt(x + fw * 0.28, head_top + head_h),
        ],
        SKIN,
        0.95,
    ));
    shapes.push(Shape::new(
        format!("{prefix}-hair"),
        role,
        vec![
            pt(x - fw * 0.36, shoulder_y + fh * 0.08),
            pt(x - fw * 0.34, head_top - head_h * 0.05),
            pt(x + fw * 0.34, head_top - head_h * 0.05),
            pt(x + fw * 0.36, shoulder_y + fh * 0.08),
            pt(x, head_top + head_h * 0.35),
        ],
        hair,
        0.95,
    ));

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spec_size_tracks_canvas() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let spec = figure_spec(0, 400.0, 530.0, 800.0, 600.0, &mut rng);

        // Base 2.5% x 12%, size roll within [0.8, 1.15].
        assert!(spec.width >= 800.0 * 0.025 * 0.8 && spec.width <= 800.0 * 0.025 * 1.15);
        assert!(spec.height >= 600.0 * 0.12 * 0.8 && spec.height <= 600.0 * 0.12 * 1.15);
        assert!((spec.width / spec.height - (800.0 * 0.025) / (600.0 * 0.12)).abs() < 1e-4);
    }

    #[test]
    fn test_ids_carry_kind_prefix() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let spec = figure_spec(3, 200.0, 530.0, 800.0, 600.0, &mut rng);
            let expected = match spec.kind() {
                FigureKind::Man => "man-3-",
                FigureKind::Woman => "woman-3-",
                FigureKind::Waldo => unreachable!("generic roll produced waldo"),
            };
            for shape in render_figure(&spec) {
                assert!(shape.id.starts_with(expected), "{}", shape.id);
                assert_eq!(shape.role, ShapeRole::Figure(spec.kind()));
            }
        }
    }

    #[test]
    fn test_every_figure_has_body_and_head() {
        for seed in 0..40 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let spec = figure_spec(0, 400.0, 530.0, 800.0, 600.0, &mut rng);
            let shapes = render_figure(&spec);

            assert!(shapes.iter().any(|s| s.id.ends_with("-head")));
            assert!(
                shapes
                    .iter()
                    .any(|s| s.id.ends_with("-body") || s.id.ends_with("-dress"))
            );
            for shape in &shapes {
                assert!(shape.points.len() >= 3, "{}", shape.id);
            }
        }
    }

    #[test]
    fn test_gender_split_roughly_55_45() {
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let mut men = 0;
        for i in 0..1000 {
            let spec = figure_spec(i, 400.0, 530.0, 800.0, 600.0, &mut rng);
            if spec.kind() == FigureKind::Man {
                men += 1;
            }
        }
        assert!((480..=620).contains(&men), "{men} men out of 1000");
    }

    #[test]
    fn test_variant_coverage() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut poses = std::collections::HashSet::new();
        let mut headwear = std::collections::HashSet::new();
        let mut tops = std::collections::HashSet::new();
        for i in 0..500 {
            match figure_spec(i, 400.0, 530.0, 800.0, 600.0, &mut rng).build {
                FigureBuild::Man { pose, headwear: hw, .. } => {
                    poses.insert(format!("{pose:?}"));
                    headwear.insert(format!("{hw:?}"));
                }
                FigureBuild::Woman { top, .. } => {
                    tops.insert(format!("{top:?}"));
                }
            }
        }
        assert_eq!(poses.len(), 3, "missing arm poses: {poses:?}");
        assert_eq!(headwear.len(), 5, "missing headwear: {headwear:?}");
        assert_eq!(tops.len(), 3, "missing tops: {tops:?}");
    }

    #[test]
    fn test_bald_man_has_no_hair_shape() {
        let spec = FigureSpec {
            index: 0,
            x: 400.0,
            foot_y: 530.0,
            width: 20.0,
            height: 72.0,
            facing: Facing::Right,
            build: FigureBuild::Man {
                pose: ArmPose::Straight,
                headwear: Headwear::Bald,
                suit: "#1C1C1C".to_string(),
                hair: "#3E2723".to_string(),
            },
        };
        let shapes = render_figure(&spec);
        assert!(shapes.iter().all(|s| !s.id.ends_with("-hair")));
        assert!(shapes.iter().all(|s| !s.id.ends_with("-hat")));
    }

    #[test]
    fn test_akimbo_elbow_follows_facing() {
        let base = FigureSpec {
            index: 0,
            x: 400.0,
            foot_y: 530.0,
            width: 20.0,
            height: 72.0,
            facing: Facing::Right,
            build: FigureBuild::Man {
                pose: ArmPose::Akimbo,
                headwear: Headwear::Bald,
                suit: "#1C1C1C".to_string(),
                hair: "#3E2723".to_string(),
            },
        };
        let mut mirrored = base.clone();
        mirrored.facing = Facing::Left;

        let elbow_x = |spec: &FigureSpec| {
            render_figure(spec)
                .iter()
                .find(|s| s.id.ends_with("-arm-akimbo"))
                .unwrap()
                .points[1]
                .x
        };
        assert!(elbow_x(&base) > base.x);
        assert!(elbow_x(&mirrored) < base.x);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let spec = figure_spec(1, 250.0, 540.0, 800.0, 600.0, &mut rng);
        assert_eq!(render_figure(&spec), render_figure(&spec));
    }
}
