//! Terminal output utilities.
//!
//! Box drawing and entropy strength helpers.

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 66;

/// Columns between the two `│ ` / ` │` borders.
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Width of the flag column in help options.
const FLAG_COL: usize = 27;

/// ┌─ Title ─────────┐, or a plain rule when `title` is empty.
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content         │
pub fn box_line(content: &str) {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// │     content     │
pub fn box_line_center(content: &str) {
    let total = INNER_WIDTH.saturating_sub(console_width(content));
    let left = total / 2;
    println!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(total - left));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Help option: flag column, then the description word-wrapped beside it.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = format!("{:<width$}", flag, width = FLAG_COL);
    let indent = " ".repeat(FLAG_COL);

    for (i, line) in wrap(desc, INNER_WIDTH - FLAG_COL).iter().enumerate() {
        let lead = if i == 0 { flag_col.as_str() } else { indent.as_str() };
        box_line(&format!("{lead}{line}"));
    }
}

/// Greedy word wrap. Always yields at least one (possibly empty) line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![String::new()];

    for word in text.split_whitespace() {
        let Some(current) = lines.last_mut() else {
            break;
        };
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(word.to_string());
        }
    }

    lines
}

/// Display width, not counting ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            in_escape = c != 'm';
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Upper bound on password entropy in bits for a uniform draw.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
