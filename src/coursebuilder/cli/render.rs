//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Functions here build strings;
//! printing happens at the call site so the output can be tested.
//!
//! Layout calculations (width, truncation, padding) are Unicode-aware.

use chrono::{DateTime, Utc};
use colored::Colorize;
use coursebuilder::api::{CmdMessage, DisplayItem, MessageLevel};
use coursebuilder::config::CourseConfig;
use coursebuilder::model::{ItemContent, ItemKind};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 16;
const SUBTITLE_INDENT: &str = "         ";

fn kind_marker(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Module => "▸",
        ItemKind::Link => "↗",
        ItemKind::File => "▤",
    }
}

pub fn render_item_list(items: &[DisplayItem], now: DateTime<Utc>) -> String {
    if items.is_empty() {
        return format!(
            "{}\n{}\n",
            "Nothing added here yet".bold(),
            "Run `coursebuilder module <name>`, `link` or `upload` to add items to this course"
                .dimmed()
        );
    }

    let mut out = String::new();
    for di in items {
        let item = &di.item;
        let idx_str = format!("{:>3}. ", di.position);
        let marker = format!("{} ", kind_marker(item.kind()));
        let time_ago = item
            .id
            .created_at()
            .map(|created| format_time_ago(created, now))
            .unwrap_or_default();

        let fixed = idx_str.width() + marker.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let name = truncate_to_width(item.display_name(), available);
        let padding = available.saturating_sub(name.width());

        let name_styled = match item.kind() {
            ItemKind::Link => name.underline(),
            _ => name.bold(),
        };
        out.push_str(&format!(
            "{}{}{}{}{:>width$}\n",
            idx_str.yellow(),
            marker,
            name_styled,
            " ".repeat(padding),
            time_ago.dimmed(),
            width = TIME_WIDTH
        ));

        let subtitle = match &item.content {
            ItemContent::Module => item.kind().subtitle().to_string(),
            ItemContent::Link { url } => format!("{} · {}", item.kind().subtitle(), url),
            ItemContent::File { file } => format!(
                "{} · {} ({})",
                item.kind().subtitle(),
                file.name,
                format_size(file.size)
            ),
        };
        let subtitle = truncate_to_width(&subtitle, LINE_WIDTH - SUBTITLE_INDENT.len());
        out.push_str(&format!("{}{}\n", SUBTITLE_INDENT, subtitle.dimmed()));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_config(config: &CourseConfig) -> String {
    let mut out = String::new();
    for key in CourseConfig::KEYS {
        let value = config.get(key).unwrap_or_default();
        out.push_str(&format!("{} = {}\n", key.bold(), value));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn format_time_ago(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created).to_std().unwrap_or_default();
    Formatter::new().convert(elapsed)
}

fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
