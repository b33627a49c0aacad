//! Box drawing for help text.
//!
//! Each `box_*` printer has a `*_text` twin that returns the line instead, so
//! layout can be checked without a terminal.

pub const BOX_WIDTH: usize = 74;

/// Width of the flag column in option rows.
const FLAG_COL: usize = 27;

/// ┌─ Title ──────────────┐
pub fn top_text(title: &str) -> String {
    if title.is_empty() {
        return format!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {} ", title);
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    format!("┌{}{}┐", title_part, "─".repeat(remaining))
}

/// └──────────────────────┘
pub fn bottom_text() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// │ content              │
pub fn line_text(content: &str) -> String {
    let pad = inner_width().saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(pad))
}

/// │       content        │
pub fn centered_text(content: &str) -> String {
    let total = inner_width().saturating_sub(console_width(content));
    let left = total / 2;
    format!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(total - left))
}

/// Option row: flag in a fixed column, description word-wrapped beside it.
pub fn opt_text(flag: &str, desc: &str) -> Vec<String> {
    let desc_col = inner_width() - FLAG_COL;
    let mut wrapped: Vec<String> = Vec::new();

    for word in desc.split_whitespace() {
        match wrapped.last_mut() {
            Some(last) if last.len() + 1 + word.len() <= desc_col => {
                last.push(' ');
                last.push_str(word);
            }
            _ => wrapped.push(word.to_string()),
        }
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    wrapped
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let lead = if i == 0 { flag } else { "" };
            format!(
                "│ {:<flag_w$}{:<desc_w$} │",
                lead,
                text,
                flag_w = FLAG_COL,
                desc_w = desc_col
            )
        })
        .collect()
}

pub fn box_top(title: &str) {
    println!("{}", top_text(title));
}

pub fn box_bottom() {
    println!("{}", bottom_text());
}

pub fn box_line(content: &str) {
    println!("{}", line_text(content));
}

pub fn box_line_center(content: &str) {
    println!("{}", centered_text(content));
}

pub fn box_opt(flag: &str, desc: &str) {
    for row in opt_text(flag, desc) {
        println!("{row}");
    }
}

#[inline]
fn inner_width() -> usize {
    BOX_WIDTH - 4
}

/// Display width, skipping ANSI escape sequences.
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
