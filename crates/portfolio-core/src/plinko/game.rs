use glam::Vec2;
use serde::Serialize;

use crate::plinko::board::{
    Board, BoardConfig, BALL_RADIUS, DIVIDER_HEIGHT, DIVIDER_WIDTH, GROUND_HEIGHT, GROUND_WIDTH,
    GROUND_Y, PEG_RADIUS, WALL_WIDTH,
};
use crate::plinko::physics::{BodyDesc, BodyHandle, ColliderDesc, ColliderMaterial, PhysicsWorld};
use crate::rng::Rng;
use crate::time::Cadence;

/// Physics step rate, decoupled from the landing poll below.
pub const SIM_DT: f32 = 1.0 / 60.0;
/// Wall-clock period of the settle check. Deliberately coarse — the original
/// page polls on a one-second interval instead of listening for collisions.
pub const POLL_PERIOD: f32 = 1.0;

/// Y-down gravity, in playfield units per second squared.
const GRAVITY: f32 = 981.0;

const LAUNCH_Y: f32 = 50.0;
const LAUNCH_JITTER: f32 = 10.0;

/// A ball has settled when it is this slow...
const SETTLE_SPEED: f32 = 0.5;
/// ...while below this height (the basket region near the floor).
const SETTLE_FLOOR_Y: f32 = 640.0;

const BASE_POINTS: u32 = 1;

const BALL_MATERIAL: ColliderMaterial = ColliderMaterial {
    restitution: 0.9,
    friction: 0.001,
    density: 1.0,
};
const BALL_DAMPING: f32 = 0.001;

/// Outcome of a resolved drop, queued for the shell's notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Landing {
    pub basket: usize,
    pub multiplier: u32,
    pub points: u32,
    pub score: u32,
}

impl Landing {
    /// Alert text, with the basket shown 1-based as on the page.
    pub fn message(&self) -> String {
        format!(
            "Ball landed in basket {} (multiplier x{}). You won {} points!",
            self.basket + 1,
            self.multiplier,
            self.points
        )
    }
}

/// The plinko game: one board, at most one ball in flight, a session score.
///
/// State machine: Idle -> InFlight -> (poll: not settled -> InFlight |
/// settled -> resolved -> Idle). The score only ever increases.
pub struct PlinkoGame {
    board: Board,
    world: PhysicsWorld,
    ball: Option<BodyHandle>,
    score: u32,
    pending: Option<Landing>,
    sim: Cadence,
    poll: Cadence,
    rng: Rng,
}

impl PlinkoGame {
    pub fn new(config: BoardConfig, mut rng: Rng) -> Self {
        let board = Board::generate(config, &mut rng);
        let mut world = PhysicsWorld::new(Vec2::new(0.0, GRAVITY));
        world.set_dt(SIM_DT);
        Self::build_statics(&board, &mut world);

        Self {
            board,
            world,
            ball: None,
            score: 0,
            pending: None,
            sim: Cadence::new(SIM_DT),
            poll: Cadence::new(POLL_PERIOD),
            rng,
        }
    }

    /// Ground, side walls, pegs, and basket dividers — all static.
    fn build_statics(board: &Board, world: &mut PhysicsWorld) {
        let config = board.config();
        let material = ColliderMaterial::default();

        world.create_body(
            &BodyDesc::fixed(ColliderDesc::Cuboid {
                half_width: GROUND_WIDTH / 2.0,
                half_height: GROUND_HEIGHT / 2.0,
            })
            .with_position(Vec2::new(config.width / 2.0, GROUND_Y)),
            material,
        );

        for x in [0.0, config.width] {
            world.create_body(
                &BodyDesc::fixed(ColliderDesc::Cuboid {
                    half_width: WALL_WIDTH / 2.0,
                    half_height: config.height / 2.0,
                })
                .with_position(Vec2::new(x, config.height / 2.0)),
                material,
            );
        }

        for peg in config.peg_positions() {
            world.create_body(
                &BodyDesc::fixed(ColliderDesc::Ball { radius: PEG_RADIUS }).with_position(peg),
                material,
            );
        }

        for divider in config.divider_positions() {
            world.create_body(
                &BodyDesc::fixed(ColliderDesc::Cuboid {
                    half_width: DIVIDER_WIDTH / 2.0,
                    half_height: DIVIDER_HEIGHT / 2.0,
                })
                .with_position(divider),
                material,
            );
        }
    }

    /// Drop a new ball from the top, with a small random horizontal offset.
    /// Rejected (returns `false`) while a ball is still in flight.
    pub fn launch(&mut self) -> bool {
        if self.ball.is_some() {
            return false;
        }

        let x = self.board.config().width / 2.0 + self.rng.jitter(LAUNCH_JITTER);
        let desc = BodyDesc::dynamic(ColliderDesc::Ball {
            radius: BALL_RADIUS,
        })
        .with_position(Vec2::new(x, LAUNCH_Y))
        .with_linear_damping(BALL_DAMPING)
        .with_ccd(true);

        let handle = self.world.create_body(&desc, BALL_MATERIAL);
        self.ball = Some(handle);
        log::debug!("ball launched at x={x:.1}");
        true
    }

    /// Feed elapsed wall-clock time: steps the simulation at the fixed rate
    /// and runs the settle check on its own one-second cadence.
    pub fn advance(&mut self, dt: f32) {
        for _ in 0..self.sim.advance(dt) {
            self.world.step();
        }
        for _ in 0..self.poll.advance(dt) {
            self.check_settled();
        }
    }

    fn check_settled(&mut self) {
        let Some(ball) = self.ball else {
            return;
        };
        let speed = self.world.speed(ball);
        let pos = self.world.position(ball);
        if speed < SETTLE_SPEED && pos.y > SETTLE_FLOOR_Y {
            self.resolve(ball, pos.x);
        }
    }

    /// Score the landing and free the ball slot. Everything here completes
    /// before the shell can observe the report via `take_landing`.
    fn resolve(&mut self, ball: BodyHandle, x: f32) {
        let basket = self.board.config().basket_index(x);
        let multiplier = self.board.multiplier(basket);
        let points = BASE_POINTS * multiplier;
        self.score += points;

        self.world.remove_body(ball);
        self.ball = None;

        let landing = Landing {
            basket,
            multiplier,
            points,
            score: self.score,
        };
        log::info!("{}", landing.message());
        self.pending = Some(landing);
    }

    /// Hand the queued landing report to the shell, at most once.
    pub fn take_landing(&mut self) -> Option<Landing> {
        self.pending.take()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ball_active(&self) -> bool {
        self.ball.is_some()
    }

    pub fn ball_position(&self) -> Option<Vec2> {
        self.ball.map(|b| self.world.position(b))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> PlinkoGame {
        PlinkoGame::new(BoardConfig::default(), Rng::new(42))
    }

    /// A board without pegs, so a dropped ball falls straight to the floor.
    fn open_board() -> BoardConfig {
        BoardConfig {
            peg_rows: 0,
            ..BoardConfig::default()
        }
    }

    #[test]
    fn default_board_builds_all_static_bodies() {
        let g = game();
        // 112 pegs + 16 dividers + ground + 2 walls
        assert_eq!(g.world.body_count(), 131);
    }

    #[test]
    fn launch_spawns_ball_near_center_top() {
        let mut g = game();
        assert!(g.launch());
        let pos = g.ball_position().unwrap();
        assert!((pos.x - 400.0).abs() <= LAUNCH_JITTER, "x={}", pos.x);
        assert_eq!(pos.y, LAUNCH_Y);
    }

    #[test]
    fn launch_rejected_while_ball_in_flight() {
        let mut g = game();
        assert!(g.launch());
        let count = g.world.body_count();
        assert!(!g.launch());
        assert!(!g.launch());
        assert_eq!(g.world.body_count(), count, "no extra ball may be spawned");
    }

    #[test]
    fn ball_in_flight_is_not_resolved_early() {
        let mut g = game();
        g.launch();
        // One poll while the ball is still falling fast near the top
        g.advance(POLL_PERIOD);
        assert!(g.ball_active());
        assert_eq!(g.score(), 0);
        assert!(g.take_landing().is_none());
    }

    #[test]
    fn settled_ball_scores_and_frees_the_slot() {
        let mut g = game();
        g.launch();
        let ball = g.ball.unwrap();

        // Park the ball at rest inside basket 3
        let x = 3.5 * g.board.config().basket_width();
        g.world.set_state(ball, Vec2::new(x, 660.0), Vec2::ZERO);
        g.check_settled();

        let landing = g.take_landing().expect("landing should be queued");
        assert_eq!(landing.basket, 3);
        assert_eq!(landing.multiplier, g.board.multiplier(3));
        assert_eq!(landing.points, landing.multiplier);
        assert_eq!(landing.score, landing.points);
        assert_eq!(g.score(), landing.points);

        assert!(!g.ball_active(), "slot should be free after resolution");
        assert!(g.take_landing().is_none(), "report is handed over once");
        assert!(g.launch(), "a new launch is accepted after resolution");
    }

    #[test]
    fn slow_ball_above_floor_is_not_settled() {
        let mut g = game();
        g.launch();
        let ball = g.ball.unwrap();
        // Slow but still high up (e.g. momentarily balanced on a peg)
        g.world.set_state(ball, Vec2::new(400.0, 300.0), Vec2::ZERO);
        g.check_settled();
        assert!(g.ball_active());
        assert!(g.take_landing().is_none());
    }

    #[test]
    fn score_is_monotonic_across_drops() {
        let mut g = game();
        let mut last = 0;
        for i in 0..5 {
            g.launch();
            let ball = g.ball.unwrap();
            let x = (i as f32 + 0.5) * g.board.config().basket_width();
            g.world.set_state(ball, Vec2::new(x, 660.0), Vec2::ZERO);
            g.check_settled();
            let landing = g.take_landing().unwrap();
            assert_eq!(landing.points, g.board.multiplier(i));
            assert!(g.score() > last);
            last = g.score();
        }
    }

    #[test]
    fn clamped_landing_on_boundary_wall_scores_last_basket() {
        let mut g = game();
        g.launch();
        let ball = g.ball.unwrap();
        // Resting against the right wall, past the last divider center
        g.world.set_state(ball, Vec2::new(800.0, 660.0), Vec2::ZERO);
        g.check_settled();
        let landing = g.take_landing().unwrap();
        assert_eq!(landing.basket, 14);
    }

    #[test]
    fn landing_message_is_one_based() {
        let landing = Landing {
            basket: 0,
            multiplier: 3,
            points: 3,
            score: 3,
        };
        assert_eq!(
            landing.message(),
            "Ball landed in basket 1 (multiplier x3). You won 3 points!"
        );
    }

    #[test]
    fn dropped_ball_settles_and_resolves_under_real_physics() {
        let mut g = PlinkoGame::new(open_board(), Rng::new(7));
        assert!(g.launch());

        // Up to three simulated minutes of 60fps frames; the ball free-falls,
        // bounces out on the ground, and the poll should then resolve it.
        let mut landed = None;
        for _ in 0..(180 * 60) {
            g.advance(SIM_DT);
            if let Some(l) = g.take_landing() {
                landed = Some(l);
                break;
            }
        }

        let landing = landed.expect("ball should settle and resolve");
        assert!((1..=5).contains(&landing.multiplier));
        assert_eq!(g.score(), landing.points);
        assert!(!g.ball_active());
        // Dropped near the center, it lands in a center basket
        assert_eq!(landing.basket, g.board.config().basket_index(400.0));
    }
}
