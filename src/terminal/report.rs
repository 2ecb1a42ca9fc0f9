//! Boxed rendering of a generation result.

use passgauge::GenerationResult;

use super::output::{
    BOX_WIDTH, box_bottom, box_field, box_line_center, box_top, color_enabled, meter_percent, print_rule,
    strength_color, strength_meter,
};

/// Context printed alongside a result.
pub struct ReportInfo<'a> {
    pub title: &'a str,
    pub index: usize,
    pub total: usize,
    /// Entropy source name.
    pub source: &'a str,
    /// Effective charset size, `None` for passphrases.
    pub charset: Option<usize>,
    /// Hide the secret (it went to the clipboard).
    pub masked: bool,
}

pub fn print_result(result: &GenerationResult, info: &ReportInfo) {
    let title = if info.total > 1 {
        format!("{} {}/{}", info.title, info.index, info.total)
    } else {
        info.title.to_string()
    };

    box_top(&title);
    let secret = result.secret();
    if info.masked {
        box_line_center(&mask(secret));
    } else if secret.chars().count() <= BOX_WIDTH - 4 {
        box_line_center(secret);
    } else {
        box_field("", secret);
    }
    print_rule();
    box_field("Entropy:", &format!("{:.2} bits", result.entropy_bits()));
    box_field("Crack time:", result.crack_time());
    box_field("Patterns:", &patterns_line(result.patterns()));
    box_field("Source:", &source_line(info));
    box_bottom();

    let color = color_enabled().then(|| strength_color(result.strength()));
    strength_meter(
        meter_percent(result.entropy_bits()),
        result.strength().as_str(),
        color,
    );
    println!();
}

/// Comma separated pattern names, or `None`.
pub fn patterns_line(patterns: &[String]) -> String {
    if patterns.is_empty() {
        "None".to_string()
    } else {
        patterns.join(", ")
    }
}

fn source_line(info: &ReportInfo) -> String {
    match info.charset {
        Some(chars) => format!("{} • Charset: {} chars", info.source, chars),
        None => format!("{} • Wordlist: {} words", info.source, passgauge::pass::WORDLIST.len()),
    }
}

fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}
