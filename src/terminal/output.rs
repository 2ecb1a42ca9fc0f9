//! Terminal output utilities.
//!
//! Box drawing, the strength meter and colour helpers.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;
use passgauge::Strength;

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Colour only when stdout is a terminal.
pub fn color_enabled() -> bool {
    io::stdout().is_tty()
}

pub fn strength_color(strength: Strength) -> Color {
    match strength {
        Strength::Weak => Color::Red,
        Strength::Medium => Color::Yellow,
        Strength::Strong => Color::Green,
    }
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a labelled field, wrapping the value onto indented lines.
pub fn box_field(label: &str, value: &str) {
    let inner_width = BOX_WIDTH - 4;
    let label_col = 12;
    let value_col = inner_width - label_col;

    let label_padded = format!("{:<width$}", label, width = label_col);
    let chars: Vec<char> = value.chars().collect();
    let mut chunks = chars.chunks(value_col.max(1));

    let first: String = chunks.next().map(|c| c.iter().collect()).unwrap_or_default();
    box_line(&format!("{}{}", label_padded, first));

    let indent = " ".repeat(label_col);
    for chunk in chunks {
        let line: String = chunk.iter().collect();
        box_line(&format!("{}{}", indent, line));
    }
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Full meter at this many bits.
pub const METER_FULL_BITS: f64 = 128.0;

/// Share of the meter filled for `entropy_bits`, in percent.
pub fn meter_percent(entropy_bits: f64) -> f32 {
    ((entropy_bits / METER_FULL_BITS) * 100.0).clamp(0.0, 100.0) as f32
}

/// Render the strength meter inside a box with centered label (3 lines).
pub fn strength_meter(percent: f32, label: &str, color: Option<Color>) {
    let inner_width = BOX_WIDTH - 2;
    let filled = if percent >= 100.0 {
        inner_width
    } else {
        ((percent / 100.0) * inner_width as f32) as usize
    };

    let text_chars: Vec<char> = label.chars().collect();
    let padding = inner_width.saturating_sub(text_chars.len()) / 2;

    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text_chars.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }

    // Top border
    if filled > 0 {
        print!("▗{}", paint_fg(&"▄".repeat(filled), color));
    } else {
        print!("┌");
    }
    if filled < inner_width {
        println!("{}┐", "─".repeat(inner_width - filled));
    } else {
        println!("▖");
    }

    // Middle
    let filled_str: String = content[..filled].iter().collect();
    let unfilled_str: String = content[filled..].iter().collect();
    if filled > 0 {
        print!("▐{}", paint_bg(&filled_str, color));
    } else {
        print!("│");
    }
    if filled < inner_width {
        println!("{}│", unfilled_str);
    } else {
        println!("▌");
    }

    // Bottom border
    if filled > 0 {
        print!("▝{}", paint_fg(&"▀".repeat(filled), color));
    } else {
        print!("└");
    }
    if filled < inner_width {
        println!("{}┘", "─".repeat(inner_width - filled));
    } else {
        println!("▘");
    }

    flush();
}

fn paint_fg(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => text.with(color).to_string(),
        None => text.to_string(),
    }
}

fn paint_bg(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => text.black().on(color).to_string(),
        None => text.to_string(),
    }
}
