pub mod health;
pub mod metrics;
pub mod winners;

pub use health::health_check;
pub use winners::{race_winner, welcome, year_winners};
