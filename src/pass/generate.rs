//! Password generation.

use rand::Rng;
use tracing::{debug, warn};

use super::charset::{self, CharsetOptions};

/// Rejected draws allowed per position before falling back to a filtered pool.
pub const MAX_REDRAWS: usize = 1_000;

/// Generate a charset password.
///
/// Returns an empty string when no category is enabled.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, opts: &CharsetOptions) -> String {
    let chars = charset::build(opts);
    debug!(pool = chars.len(), length = opts.length, "charset password");
    generate_from_pool(rng, &chars, opts.length, opts.no_repeat, opts.no_sequence)
}

/// Draw `length` symbols from `chars`, honoring the adjacency rules.
///
/// A draw equal to the previous symbol (`no_repeat`) or one code point above
/// it (`no_sequence`) is redrawn. When a position still fails after
/// [`MAX_REDRAWS`] redraws, the choice is made among the symbols that pass;
/// if none pass the last draw is kept.
pub fn generate_from_pool<R: Rng + ?Sized>(
    rng: &mut R,
    chars: &[char],
    length: usize,
    no_repeat: bool,
    no_sequence: bool,
) -> String {
    if chars.is_empty() {
        return String::new();
    }

    let rules = Rules {
        no_repeat,
        no_sequence,
    };
    let mut password = String::with_capacity(length);
    let mut prev: Option<char> = None;
    let mut forced = 0usize;

    for _ in 0..length {
        let c = match draw(rng, chars, prev, rules) {
            Draw::Accepted(c) => c,
            Draw::Forced(c) => {
                forced += 1;
                c
            }
        };
        password.push(c);
        prev = Some(c);
    }

    if forced > 0 {
        warn!(
            forced,
            pool = chars.len(),
            "adjacency rules cannot be satisfied by this pool, kept violating symbols"
        );
    }

    password
}

#[derive(Clone, Copy)]
struct Rules {
    no_repeat: bool,
    no_sequence: bool,
}

impl Rules {
    #[inline]
    fn allows(&self, c: char, prev: Option<char>) -> bool {
        let Some(p) = prev else {
            return true;
        };
        if self.no_repeat && c == p {
            return false;
        }
        if self.no_sequence && c as u32 == p as u32 + 1 {
            return false;
        }
        true
    }
}

enum Draw {
    Accepted(char),
    Forced(char),
}

fn draw<R: Rng + ?Sized>(rng: &mut R, chars: &[char], prev: Option<char>, rules: Rules) -> Draw {
    let mut candidate = random_char(rng, chars);
    for _ in 0..MAX_REDRAWS {
        if rules.allows(candidate, prev) {
            return Draw::Accepted(candidate);
        }
        candidate = random_char(rng, chars);
    }

    let passing: Vec<char> = chars
        .iter()
        .copied()
        .filter(|&c| rules.allows(c, prev))
        .collect();
    if passing.is_empty() {
        Draw::Forced(candidate)
    } else {
        Draw::Accepted(random_char(rng, &passing))
    }
}

#[inline]
fn random_char<R: Rng + ?Sized>(rng: &mut R, chars: &[char]) -> char {
    chars[rng.gen_range(0..chars.len())]
}
