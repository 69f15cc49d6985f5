use rand::Rng;

use crate::effects::field::{GlowParams, VignetteParams};
use crate::effects::scatter::{EmberHazeParams, SpeckleParams};
use crate::foundation::core::{Palette, Rgb8};
use crate::raster::shapes::{Paint, SoftEllipse, SoftLine, SoftRect};
use crate::scene::catalog::{Accent, EventVisual, Motif, Profile};
use crate::scene::plan::{DrawOp, LayerPlan};
use crate::scene::seeds::EventSeeds;
use crate::scene::stage::Stage;

/// The three parallax layers generated per event, back to front.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Opaque sky, structures and film treatment.
    Background,
    /// Translucent motif silhouettes.
    Midground,
    /// Sparse accent particles and haze.
    Foreground,
}

impl LayerKind {
    /// All kinds in render order.
    pub const ALL: [LayerKind; 3] = [
        LayerKind::Background,
        LayerKind::Midground,
        LayerKind::Foreground,
    ];

    /// Output file stem.
    pub fn stem(self) -> &'static str {
        match self {
            LayerKind::Background => "bg",
            LayerKind::Midground => "mid",
            LayerKind::Foreground => "fg",
        }
    }

    fn stream(self) -> u64 {
        match self {
            LayerKind::Background => 1,
            LayerKind::Midground => 2,
            LayerKind::Foreground => 3,
        }
    }
}

const CLAY: Rgb8 = Rgb8::new(188, 162, 136);
const DARK: Rgb8 = Rgb8::new(92, 70, 56);
const WARM: Rgb8 = Rgb8::new(206, 147, 99);

/// Plan builder that takes reference-space coordinates and maps them through a [`Stage`].
struct Sketch<'a> {
    stage: &'a Stage,
    plan: LayerPlan,
}

impl<'a> Sketch<'a> {
    fn new(stage: &'a Stage) -> Self {
        Self {
            stage,
            plan: LayerPlan::new(stage.size()),
        }
    }

    fn op(&mut self, op: DrawOp) {
        self.plan.push(op);
    }

    #[allow(clippy::too_many_arguments)]
    fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb8, alpha: u8, feather: f64) {
        let shape = SoftEllipse::new(self.stage.pt(cx, cy), self.stage.radii(rx, ry))
            .with_feather(feather);
        self.op(DrawOp::Ellipse {
            shape,
            paint: Paint::new(color, alpha),
        });
    }

    #[allow(clippy::too_many_arguments)]
    fn rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb8, alpha: u8, feather: f64) {
        let shape =
            SoftRect::new(self.stage.rect(x0, y0, x1, y1)).with_feather(self.stage.len(feather));
        self.op(DrawOp::Rect {
            shape,
            paint: Paint::new(color, alpha),
        });
    }

    #[allow(clippy::too_many_arguments)]
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, thickness: f64, color: Rgb8, alpha: u8) {
        let shape = SoftLine::new(
            self.stage.pt(x0, y0),
            self.stage.pt(x1, y1),
            self.stage.len(thickness),
        );
        self.op(DrawOp::Line {
            shape,
            paint: Paint::new(color, alpha),
        });
    }

    fn dot(&mut self, x: f64, y: f64, color: Rgb8, alpha: u8) {
        self.op(DrawOp::Dot {
            at: self.stage.pt(x, y),
            paint: Paint::new(color, alpha),
        });
    }

    fn finish(self) -> LayerPlan {
        self.plan
    }
}

const W: f64 = Stage::REF_W;
const H: f64 = Stage::REF_H;

/// Opaque background: gradient, atmosphere glow, profile structures, grain and vignette.
pub fn background_plan(
    profile: Profile,
    palette: &Palette,
    stage: &Stage,
    seeds: &EventSeeds,
    rng: &mut impl Rng,
) -> LayerPlan {
    let mut s = Sketch::new(stage);
    s.op(DrawOp::Gradient {
        top: palette.top,
        bottom: palette.bottom,
    });
    s.op(DrawOp::Glow(GlowParams::atmosphere(palette.highlight)));

    match profile {
        Profile::Battle => {
            // horizon smoke
            for band in 0..4u8 {
                let y0 = H * (0.58 + f64::from(band) * 0.07);
                let drift = rng.gen_range(-25.0..=25.0);
                s.line(
                    0.0,
                    y0,
                    W,
                    y0 + drift,
                    7.0 + f64::from(band) * 2.0,
                    palette.shadow,
                    95 - band * 10,
                );
            }
            for x in [180.0, 500.0, 920.0, 1320.0] {
                s.ellipse(x, H * 0.74, 200.0, 70.0, palette.highlight, 45, 0.42);
            }
        }
        Profile::Ceremony => {
            for cx in [220.0, 520.0, 820.0, 1120.0, 1420.0] {
                s.rect(cx - 36.0, 0.0, cx + 36.0, H, palette.shadow, 80, 30.0);
                s.rect(cx - 16.0, 0.0, cx + 16.0, H, palette.highlight, 35, 20.0);
            }
            s.ellipse(W * 0.5, H * 0.24, 360.0, 180.0, palette.highlight, 60, 0.35);
        }
        Profile::Collapse => {
            for i in 0..7 {
                let x = 100.0 + f64::from(i) * 220.0;
                let top = H * 0.56 + f64::from(i % 2) * 30.0;
                s.rect(x, top, x + 120.0, H * 0.85, palette.shadow, 90, 18.0);
            }
            // cracks
            for _ in 0..8 {
                let x0 = rng.gen_range(120..=1480_i32);
                let y0 = rng.gen_range(495..=765_i32);
                let x1 = x0 + rng.gen_range(-90..=90_i32);
                let y1 = y0 + rng.gen_range(60..=130_i32);
                s.line(
                    f64::from(x0),
                    f64::from(y0),
                    f64::from(x1),
                    f64::from(y1),
                    2.2,
                    Rgb8::new(125, 84, 66),
                    110,
                );
            }
        }
        Profile::Map => {
            for y in (140..900).step_by(110) {
                let y = f64::from(y);
                let drift = f64::from(rng.gen_range(-24..=24_i32));
                s.line(80.0, y, W - 80.0, y + drift, 2.2, Rgb8::new(180, 122, 86), 65);
            }
            for _ in 0..10 {
                let x0 = rng.gen_range(140..=1460_i32);
                let y0 = rng.gen_range(120..=780_i32);
                let x1 = x0 + rng.gen_range(-240..=240_i32);
                let y1 = y0 + rng.gen_range(-160..=160_i32);
                s.line(
                    f64::from(x0),
                    f64::from(y0),
                    f64::from(x1),
                    f64::from(y1),
                    1.8,
                    Rgb8::new(160, 110, 78),
                    70,
                );
            }
        }
    }

    s.op(DrawOp::Grain {
        amount: 10.0,
        seed: seeds.grain,
    });
    s.op(DrawOp::Vignette(VignetteParams::with_strength(0.5)));
    s.finish()
}

/// Transparent midground: the motif silhouettes, then a faint relief ellipse for legibility.
pub fn midground_plan(motif: Motif, stage: &Stage, rng: &mut impl Rng) -> LayerPlan {
    let mut s = Sketch::new(stage);
    draw_motif(&mut s, motif, rng);
    s.ellipse(W * 0.5, H * 0.58, 420.0, 230.0, Rgb8::new(230, 205, 180), 28, 0.36);
    s.finish()
}

fn draw_motif(s: &mut Sketch<'_>, motif: Motif, rng: &mut impl Rng) {
    match motif {
        Motif::SenateOath => {
            for i in 0..6 {
                let x = 300.0 + f64::from(i) * 170.0;
                s.rect(x, 260.0, x + 74.0, 760.0, DARK, 210, 16.0);
            }
            s.rect(560.0, 560.0, 1040.0, 760.0, CLAY, 220, 16.0);
            s.ellipse(800.0, 460.0, 72.0, 92.0, CLAY, 230, 0.2);
            s.line(850.0, 505.0, 980.0, 430.0, 5.0, CLAY, 220);
        }
        Motif::BurningCity => {
            for i in 0..7 {
                let x = 130.0 + f64::from(i) * 190.0;
                let h = f64::from(rng.gen_range(180..=280_i32));
                s.rect(x, 720.0 - h, x + 120.0, 720.0, DARK, 215, 14.0);
            }
            for x in [280.0, 620.0, 980.0, 1280.0] {
                s.ellipse(x, 520.0, 90.0, 160.0, WARM, 80, 0.45);
            }
        }
        Motif::ElephantLine => {
            s.ellipse(710.0, 560.0, 250.0, 110.0, CLAY, 220, 0.2);
            s.ellipse(500.0, 520.0, 92.0, 72.0, CLAY, 215, 0.2);
            s.rect(900.0, 520.0, 1180.0, 590.0, CLAY, 200, 12.0);
            for lx in [620.0, 740.0, 850.0, 970.0] {
                s.rect(lx, 620.0, lx + 36.0, 790.0, DARK, 215, 10.0);
            }
            // spears
            for sx in (1020..1450).step_by(70) {
                let sx = f64::from(sx);
                s.line(sx, 540.0, sx + 140.0, 520.0, 2.8, CLAY, 185);
            }
        }
        Motif::AlpineMarch => {
            s.line(80.0, 700.0, 520.0, 320.0, 22.0, DARK, 180);
            s.line(460.0, 760.0, 980.0, 260.0, 30.0, DARK, 190);
            s.line(920.0, 760.0, 1520.0, 360.0, 24.0, DARK, 185);
            for i in 0..9 {
                let x = 520.0 + f64::from(i) * 90.0;
                let y = 650.0 - f64::from(i) * 30.0;
                s.rect(x, y, x + 26.0, y + 88.0, CLAY, 205, 8.0);
            }
        }
        Motif::Encirclement => {
            s.ellipse(780.0, 560.0, 200.0, 120.0, DARK, 210, 0.22);
            s.ellipse(820.0, 560.0, 320.0, 200.0, CLAY, 120, 0.26);
            s.ellipse(820.0, 560.0, 420.0, 280.0, CLAY, 70, 0.28);
            for deg in (0..360).step_by(18) {
                let a = f64::from(deg).to_radians();
                let x = 820.0 + a.cos() * 420.0;
                let y = 560.0 + a.sin() * 280.0;
                s.ellipse(x, y, 10.0, 10.0, WARM, 120, 0.2);
            }
        }
        Motif::CarthageRuin => {
            for i in 0..6 {
                let x = 180.0 + f64::from(i) * 210.0;
                let top = 420.0 + f64::from(i % 2) * 30.0;
                s.rect(x, top, x + 130.0, 760.0, DARK, 210, 14.0);
            }
            s.line(180.0, 760.0, 1420.0, 760.0, 6.0, DARK, 180);
            for x in [300.0, 520.0, 760.0, 1040.0, 1300.0] {
                s.ellipse(x, 560.0, 95.0, 145.0, WARM, 85, 0.44);
            }
        }
        Motif::RebelCamp => {
            for i in 0..10 {
                let x = 260.0 + f64::from(i) * 110.0;
                let y = 600.0 + f64::from(i % 3) * 12.0;
                s.ellipse(x, y, 28.0, 44.0, DARK, 220, 0.2);
                s.line(x + 12.0, y - 22.0, x + 42.0, y - 90.0, 3.0, CLAY, 185);
            }
            s.line(200.0, 760.0, 1420.0, 740.0, 7.0, DARK, 170);
        }
        Motif::RiverCrossing => {
            s.line(0.0, 700.0, 1600.0, 640.0, 18.0, DARK, 175);
            s.line(0.0, 730.0, 1600.0, 670.0, 12.0, CLAY, 85);
            s.ellipse(740.0, 560.0, 120.0, 90.0, CLAY, 210, 0.2);
            s.rect(700.0, 620.0, 900.0, 670.0, DARK, 200, 10.0);
            s.line(860.0, 560.0, 980.0, 520.0, 5.0, CLAY, 210);
        }
        Motif::Amphitheatre => {
            s.ellipse(800.0, 610.0, 520.0, 220.0, DARK, 200, 0.2);
            s.ellipse(800.0, 610.0, 410.0, 150.0, CLAY, 150, 0.25);
            for i in 0..16 {
                let x = 370.0 + f64::from(i) * 55.0;
                s.rect(x, 470.0, x + 34.0, 690.0, CLAY, 180, 8.0);
            }
        }
        Motif::ImperialMap => {
            s.rect(320.0, 500.0, 1280.0, 760.0, DARK, 185, 16.0);
            s.rect(380.0, 530.0, 1220.0, 720.0, CLAY, 210, 12.0);
            // roads
            for _ in 0..16 {
                let x0 = rng.gen_range(420..=1160_i32);
                let y0 = rng.gen_range(560..=690_i32);
                let x1 = x0 + rng.gen_range(-140..=140_i32);
                let y1 = y0 + rng.gen_range(-90..=90_i32);
                s.line(
                    f64::from(x0),
                    f64::from(y0),
                    f64::from(x1),
                    f64::from(y1),
                    1.8,
                    WARM,
                    130,
                );
            }
        }
        Motif::StatueFrontier => {
            s.rect(650.0, 360.0, 940.0, 760.0, CLAY, 225, 16.0);
            s.ellipse(790.0, 300.0, 84.0, 98.0, CLAY, 235, 0.22);
            s.line(930.0, 460.0, 1080.0, 420.0, 5.0, CLAY, 210);
            s.line(160.0, 760.0, 1440.0, 730.0, 8.0, DARK, 165);
        }
        Motif::FracturedCity => {
            for i in 0..7 {
                let x = 140.0 + f64::from(i) * 200.0;
                let h = f64::from(rng.gen_range(220..=350_i32));
                s.rect(x, 760.0 - h, x + 120.0, 760.0, DARK, 210, 12.0);
            }
            for _ in 0..10 {
                let x = rng.gen_range(180..=1420_i32);
                let y = rng.gen_range(430..=760_i32);
                let x1 = x + rng.gen_range(-120..=120_i32);
                let y1 = y + rng.gen_range(40..=130_i32);
                s.line(
                    f64::from(x),
                    f64::from(y),
                    f64::from(x1),
                    f64::from(y1),
                    2.2,
                    WARM,
                    145,
                );
            }
        }
        Motif::BridgeBattle => {
            s.line(220.0, 700.0, 1380.0, 700.0, 16.0, DARK, 185);
            for i in 0..8 {
                let x = 280.0 + f64::from(i) * 140.0;
                s.rect(x, 700.0, x + 26.0, 810.0, DARK, 195, 8.0);
            }
            for i in 0..10 {
                let x = 340.0 + f64::from(i) * 100.0;
                let y = 610.0 + f64::from(i % 2) * 20.0;
                s.ellipse(x, y, 24.0, 40.0, CLAY, 210, 0.2);
            }
        }
        Motif::BreachGates => {
            s.rect(420.0, 360.0, 1180.0, 760.0, DARK, 205, 14.0);
            s.rect(730.0, 500.0, 880.0, 760.0, Rgb8::new(20, 12, 9), 255, 8.0);
            for x in [540.0, 660.0, 980.0, 1080.0] {
                s.ellipse(x, 520.0, 85.0, 130.0, WARM, 85, 0.4);
            }
        }
        Motif::ThroneDecline => {
            s.rect(520.0, 560.0, 1080.0, 770.0, DARK, 205, 14.0);
            s.rect(650.0, 400.0, 950.0, 610.0, CLAY, 210, 12.0);
            s.line(980.0, 440.0, 1120.0, 690.0, 8.0, DARK, 190);
            s.line(640.0, 760.0, 1040.0, 760.0, 7.0, CLAY, 140);
        }
        Motif::SenateFall => {
            for i in 0..6 {
                let x = 260.0 + f64::from(i) * 180.0;
                s.rect(x, 230.0, x + 80.0, 760.0, DARK, 180, 16.0);
            }
            s.ellipse(760.0, 630.0, 220.0, 90.0, CLAY, 185, 0.24);
        }
        Motif::ImperialStatue => {
            s.rect(640.0, 320.0, 960.0, 770.0, CLAY, 220, 16.0);
            s.ellipse(800.0, 260.0, 84.0, 100.0, CLAY, 230, 0.2);
        }
        Motif::Founding => {
            s.ellipse(840.0, 565.0, 240.0, 95.0, DARK, 220, 0.2);
            s.ellipse(640.0, 525.0, 95.0, 74.0, DARK, 210, 0.2);
            for lx in [760.0, 840.0, 930.0, 1010.0] {
                s.rect(lx, 630.0, lx + 32.0, 800.0, DARK, 220, 10.0);
            }
        }
    }
}

/// Transparent foreground accent.
pub fn foreground_plan(accent: Accent, stage: &Stage, seeds: &EventSeeds) -> LayerPlan {
    let mut s = Sketch::new(stage);
    match accent {
        Accent::Embers => {
            s.op(DrawOp::EmberHaze(EmberHazeParams::default()));
            s.op(DrawOp::Specks(SpeckleParams {
                start: 0.0,
                stride: 2,
                scale: [3, 2],
                seed: seeds.embers,
                threshold: 0.9972,
                paint: Paint::new(Rgb8::new(236, 178, 122), 130),
            }));
        }
        Accent::Dust => {
            s.op(DrawOp::Specks(SpeckleParams {
                start: 0.48,
                stride: 1,
                scale: [1, 1],
                seed: seeds.dust,
                threshold: 0.992,
                paint: Paint::new(Rgb8::new(182, 145, 112), 70),
            }));
            s.ellipse(W * 0.5, H * 0.76, 700.0, 170.0, Rgb8::new(186, 132, 94), 42, 0.4);
        }
        Accent::Laurel => {
            let (cx, cy) = (W * 0.5, H * 0.2);
            for k in 0..34 {
                let a = -2.45 + f64::from(k) * (4.9 / 33.0);
                let (x, y) = (cx + a.cos() * 180.0, cy + a.sin() * 88.0);
                s.ellipse(x, y, 14.0, 8.0, Rgb8::new(188, 143, 61), 120, 0.35);
            }
            for x in (220..1380).step_by(120) {
                let y = 150 + (x / 120) % 3 * 10;
                s.dot(f64::from(x), f64::from(y), Rgb8::new(228, 198, 145), 55);
            }
        }
        Accent::SteelGlint => {
            for i in 0..7 {
                let x0 = 180.0 + f64::from(i) * 210.0;
                let y0 = 680.0 - f64::from(i) * 14.0;
                s.line(x0, y0, x0 + 220.0, y0 - 30.0, 2.4, Rgb8::new(226, 201, 155), 95);
            }
            s.line(520.0, 430.0, 1260.0, 430.0, 3.4, Rgb8::new(232, 207, 161), 80);
        }
        Accent::None => {
            s.op(DrawOp::Specks(SpeckleParams {
                start: 0.0,
                stride: 2,
                scale: [2, 2],
                seed: 951,
                threshold: 0.9983,
                paint: Paint::new(Rgb8::new(220, 184, 142), 45),
            }));
        }
    }
    s.finish()
}

/// Plan one layer of an event. The layer's shape RNG is derived from `seeds`, so repeated calls
/// give identical plans.
pub fn plan_layer(
    kind: LayerKind,
    visual: &EventVisual,
    palette: &Palette,
    stage: &Stage,
    seeds: &EventSeeds,
) -> LayerPlan {
    let mut rng = seeds.rng(kind.stream());
    match kind {
        LayerKind::Background => background_plan(visual.profile, palette, stage, seeds, &mut rng),
        LayerKind::Midground => midground_plan(visual.motif, stage, &mut rng),
        LayerKind::Foreground => foreground_plan(visual.accent, stage, seeds),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layers.rs"]
mod tests;
