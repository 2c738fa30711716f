//! Round engine
//!
//! Hard-mode constraints, the keyboard, the per-round state machine and the
//! session that carries the score from one round to the next.

pub mod constraints;
pub mod keyboard;
pub mod round;
pub mod session;

pub use constraints::{ConstraintTracker, Violation};
pub use keyboard::KeyboardState;
pub use round::{
    GuessError, LOSS_PENALTY, MAX_GUESSES, Round, RoundOutcome, RoundState, Turn, win_score,
};
pub use session::Session;
