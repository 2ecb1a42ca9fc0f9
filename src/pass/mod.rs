//! Secret generation.

pub mod charset;
mod generate;
mod passphrase;
pub mod wordlist;

pub use charset::CharsetOptions;
pub use generate::{MAX_REDRAWS, generate as generate_charset, generate_from_pool};
pub use passphrase::{generate as generate_passphrase, generate_from_words};
pub use wordlist::WORDLIST;
