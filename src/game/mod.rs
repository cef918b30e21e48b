//! Game engine
//!
//! The submission rule chain and the session-owning controller.

mod rules;
mod session;

pub use rules::{MIN_WORD_LEN, Rejection, check};
pub use session::{Game, GameError, Outcome, Session};
