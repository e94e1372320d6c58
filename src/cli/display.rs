// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the folio CLI.
//!
//! Excerpts get their matched words highlighted in the theme's yellow, the
//! line number in gray. OneDark for dark terminals, One Light for light ones.
//! Detection tries `FOLIO_THEME` first, then `COLORFGBG`, then macOS system
//! appearance, then falls back to dark.
//!
//! `NO_COLOR` and non-TTY stdout turn every escape off, and highlights fall
//! back to `**` markers so pipelines still see where the matches are.

use std::sync::OnceLock;

use folio::{CorpusStats, Excerpt, HighlightOptions};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
}

pub use colors::*;

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// └──────────────────┘
pub fn section_bot() {
    let border = GRAY();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Highlight markers for the terminal: bold theme yellow, or `**` when
/// colors are off.
pub fn highlight_options() -> HighlightOptions {
    if use_colors() {
        let pre = format!("{}{}", BOLD, YELLOW());
        HighlightOptions::with_tags(&pre, RESET)
    } else {
        HighlightOptions::with_tags("**", "**")
    }
}

/// Heading line for one excerpt: `line 2 (lines 2-3)`.
pub fn excerpt_heading(excerpt: &Excerpt) -> String {
    let window = excerpt.window;
    let span = if window.start == window.end {
        format!("line {}", window.start)
    } else {
        format!("lines {}-{}", window.start, window.end)
    };
    format!(
        "{} {}",
        themed(CYAN, &[BOLD], &format!("line {}", window.anchor)),
        themed(GRAY, &[], &format!("({})", span))
    )
}

pub fn print_excerpt(excerpt: &Excerpt, options: &HighlightOptions) {
    println!("{}", excerpt_heading(excerpt));
    let rendered = excerpt.render(options);
    for line in rendered.split(excerpt.separator.as_str()) {
        println!("  {}", line);
    }
    println!();
}

/// Result count footer, green when something matched.
pub fn result_summary(count: usize) -> String {
    let text = match count {
        1 => "1 result".to_string(),
        n => format!("{} results", n),
    };
    if count == 0 {
        themed(GRAY, &[], &text)
    } else {
        themed(GREEN, &[BOLD], &text)
    }
}

pub fn print_stats(path: &str, stats: &CorpusStats) {
    section_top("CORPUS");
    row(&format!(" path        {}", path));
    row(&format!(" size        {}", format_size(stats.bytes)));
    row(&format!(" lines       {}", stats.lines));
    row(&format!(" blank       {}", stats.blank_lines));
    row(&format!(" paragraphs  {}", stats.paragraphs));
    row(&format!(" words       {}", stats.words));
    section_bot();
}
