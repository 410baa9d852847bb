//! Game logic: secret generation and guess evaluation
//!
//! The evaluator is the only stateful piece of the crate; everything else
//! is orchestration around its `check_guess`/`show_secret` calls.

mod evaluator;
pub mod secret;

pub use evaluator::{EvalError, Evaluator};
pub use secret::{FixedSecret, SecretSource, UniformRandom};
