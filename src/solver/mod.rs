//! Computer players
//!
//! Random code generation for secrets and the guessing strategies.

mod engine;
pub mod guesser;
pub mod pool;
pub mod random;
pub mod strategy;

pub use engine::Solver;
pub use guesser::ComputerGuesser;
pub use pool::ColorPool;
pub use random::RandomCodeGenerator;
pub use strategy::{RandomStrategy, Strategy, StrategyType};
