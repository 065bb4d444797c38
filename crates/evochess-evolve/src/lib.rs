//! Generational co-evolution: tournament fitness, sort, crossover-replace,
//! persist.
//!
//! [`run_evolution`] is the whole driver; the other modules are its pieces,
//! exposed individually so each can be exercised on its own (a single
//! tournament round, a single replacement pass, a single save).

mod config;
mod driver;
mod persistence;
mod population;
mod tournament;

pub use config::EvolutionConfig;
pub use driver::run_evolution;
pub use persistence::save_population;
pub use population::{replace_weaker_half, sort_ascending_by_fitness};
pub use tournament::{play_game, run_tournament};
