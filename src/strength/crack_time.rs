//! Brute-force crack time estimate.

/// Attacker guess rate.
pub const GUESSES_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// Time to exhaust `2^entropy_bits` guesses, as a human readable label.
pub fn crack_time(entropy_bits: f64) -> String {
    let guesses = 2f64.powf(entropy_bits);
    format_seconds(guesses / GUESSES_PER_SECOND)
}

/// Render a duration with the largest unit it reaches, up to years.
pub fn format_seconds(seconds: f64) -> String {
    if seconds < MINUTE {
        format!("{:.2} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.2} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.2} days", seconds / DAY)
    } else {
        format!("{:.2} years", seconds / YEAR)
    }
}
