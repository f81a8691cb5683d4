mod traits;
pub use self::traits::*;
pub mod engine;
pub use self::engine::{Config, Dangling, Outcome, RankEngine, Status};
