//! The plinko mini-game: a rapier2d-backed board of pegs and baskets, a
//! single ball in flight, and coarse-grained landing resolution.

pub mod board;
pub mod game;
pub mod physics;

pub use board::{Board, BoardConfig, BoardLayout};
pub use game::{Landing, PlinkoGame, POLL_PERIOD, SIM_DT};
pub use physics::{BodyDesc, BodyHandle, BodyType, ColliderDesc, ColliderMaterial, PhysicsWorld};
