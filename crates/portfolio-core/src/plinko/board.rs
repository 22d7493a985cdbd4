use glam::Vec2;
use serde::Serialize;

use crate::rng::Rng;

pub const PEG_RADIUS: f32 = 5.0;
pub const BALL_RADIUS: f32 = 10.0;

pub const DIVIDER_WIDTH: f32 = 10.0;
pub const DIVIDER_HEIGHT: f32 = 40.0;
pub const DIVIDER_Y: f32 = 650.0;

pub const GROUND_Y: f32 = 680.0;
pub const GROUND_WIDTH: f32 = 810.0;
pub const GROUND_HEIGHT: f32 = 20.0;
pub const WALL_WIDTH: f32 = 10.0;

const MULTIPLIER_MIN: u32 = 1;
const MULTIPLIER_MAX: u32 = 5;

/// Fixed playfield geometry. Immutable for the session.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub width: f32,
    pub height: f32,
    pub basket_count: usize,
    /// Center of the top-left peg.
    pub peg_origin: Vec2,
    pub peg_rows: usize,
    pub peg_cols: usize,
    pub peg_spacing: f32,
    /// Horizontal offset applied to every other peg row.
    pub peg_stagger: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 700.0,
            basket_count: 15,
            peg_origin: Vec2::new(50.0, 100.0),
            peg_rows: 8,
            peg_cols: 14,
            peg_spacing: 50.0,
            peg_stagger: 25.0,
        }
    }
}

impl BoardConfig {
    pub fn basket_width(&self) -> f32 {
        self.width / self.basket_count as f32
    }

    /// Peg centers, staggered on odd rows.
    pub fn peg_positions(&self) -> Vec<Vec2> {
        let mut pegs = Vec::with_capacity(self.peg_rows * self.peg_cols);
        for row in 0..self.peg_rows {
            let offset = if row % 2 == 0 { 0.0 } else { self.peg_stagger };
            let y = self.peg_origin.y + row as f32 * self.peg_spacing;
            for col in 0..self.peg_cols {
                let x = self.peg_origin.x + col as f32 * self.peg_spacing + offset;
                pegs.push(Vec2::new(x, y));
            }
        }
        pegs
    }

    /// Divider centers — `basket_count + 1` posts forming the basket slots.
    pub fn divider_positions(&self) -> Vec<Vec2> {
        (0..=self.basket_count)
            .map(|i| Vec2::new(i as f32 * self.basket_width(), DIVIDER_Y))
            .collect()
    }

    /// Map a ball's x position to the basket it settled in.
    ///
    /// The original page indexes `floor(x / basket_width)` unguarded, which
    /// can read past the multiplier array when a ball comes to rest exactly
    /// on the boundary wall. Here the index is clamped into range; clamping
    /// is logged since it indicates the ball escaped the basket walls.
    pub fn basket_index(&self, x: f32) -> usize {
        let raw = (x / self.basket_width()).floor() as i64;
        let max = self.basket_count as i64 - 1;
        let clamped = raw.clamp(0, max);
        if raw != clamped {
            log::warn!("ball settled outside basket bounds (x={x}), clamping {raw} -> {clamped}");
        }
        clamped as usize
    }
}

/// Static layout handed to the canvas renderer as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct BoardLayout {
    pub width: f32,
    pub height: f32,
    pub basket_count: usize,
    pub basket_width: f32,
    pub peg_radius: f32,
    pub ball_radius: f32,
    pub pegs: Vec<[f32; 2]>,
    pub dividers: Vec<[f32; 2]>,
    pub divider_size: [f32; 2],
    pub multipliers: Vec<u32>,
}

/// A configured board: geometry plus per-basket multipliers, drawn once at
/// setup and never recomputed.
pub struct Board {
    config: BoardConfig,
    multipliers: Vec<u32>,
}

impl Board {
    pub fn generate(config: BoardConfig, rng: &mut Rng) -> Self {
        let multipliers = (0..config.basket_count)
            .map(|_| rng.next_range(MULTIPLIER_MIN, MULTIPLIER_MAX))
            .collect();
        Self {
            config,
            multipliers,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn multipliers(&self) -> &[u32] {
        &self.multipliers
    }

    pub fn multiplier(&self, basket: usize) -> u32 {
        self.multipliers[basket]
    }

    pub fn layout(&self) -> BoardLayout {
        BoardLayout {
            width: self.config.width,
            height: self.config.height,
            basket_count: self.config.basket_count,
            basket_width: self.config.basket_width(),
            peg_radius: PEG_RADIUS,
            ball_radius: BALL_RADIUS,
            pegs: self
                .config
                .peg_positions()
                .iter()
                .map(|p| [p.x, p.y])
                .collect(),
            dividers: self
                .config
                .divider_positions()
                .iter()
                .map(|p| [p.x, p.y])
                .collect(),
            divider_size: [DIVIDER_WIDTH, DIVIDER_HEIGHT],
            multipliers: self.multipliers.clone(),
        }
    }
}
