//! Strength evaluation: entropy, crack time, weak patterns and the label.

mod classify;
mod crack_time;
mod entropy;
pub mod patterns;

pub use classify::{Strength, classify};
pub use crack_time::{GUESSES_PER_SECOND, crack_time, format_seconds};
pub use entropy::{calculate_entropy, passphrase_entropy, password_entropy};
pub use patterns::detect_patterns;
