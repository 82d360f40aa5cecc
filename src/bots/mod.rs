pub mod human;
pub mod random;

pub use human::HumanBot;
pub use random::{RandomBot, UNO_DECLARE_PROBABILITY};
