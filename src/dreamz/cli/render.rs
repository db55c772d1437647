use colored::{ColoredString, Colorize};
use dreamz::api::{CmdMessage, MessageLevel};
use dreamz::config::DreamzConfig;
use dreamz::draft::Draft;
use dreamz::error::Result;
use dreamz::filter::IndexedEntry;
use dreamz::model::{Entry, Tone, MAX_RATING};
use dreamz::vocabulary::Vocabulary;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const DATE_WIDTH: usize = 12;
const PREVIEW_CHARS: usize = 60;
const SEPARATOR: &str = "================================";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_entries(entries: &[IndexedEntry], searching: bool) {
    if entries.is_empty() {
        if searching {
            println!("No dreams match your search.");
        } else {
            println!("No dreams recorded yet.");
        }
        return;
    }

    for ie in entries {
        println!("{}", list_line(ie));
    }
}

fn list_line(ie: &IndexedEntry) -> String {
    let entry = &ie.entry;
    let idx_str = format!("{:>4}. ", ie.index + 1);
    let marker = format!("{} ", tone_marker(entry.tone));

    let preview: String = entry
        .body_text
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let mut text = title_or_placeholder(entry).to_string();
    if !preview.is_empty() {
        text.push(' ');
        text.push_str(&preview);
    }
    for tag in &entry.tags {
        text.push_str(" #");
        text.push_str(tag);
    }

    let fixed_width = idx_str.width() + marker.width() + DATE_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let text = truncate_to_width(&text, available);
    let padding = available.saturating_sub(text.width());

    format!(
        "{}{}{}{}{}",
        idx_str,
        tone_colored(&marker, entry.tone),
        text,
        " ".repeat(padding),
        format!("{:>width$}", entry.date, width = DATE_WIDTH).dimmed()
    )
}

pub(super) fn print_full_entries(entries: &[IndexedEntry]) {
    for (i, ie) in entries.iter().enumerate() {
        if i > 0 {
            println!("\n{}\n", SEPARATOR);
        }
        print_full_entry(&(ie.index + 1).to_string(), &ie.entry);
    }
}

fn print_full_entry(label: &str, entry: &Entry) {
    println!(
        "{} {}",
        label.yellow(),
        title_or_placeholder(entry).bold()
    );
    println!("--------------------------------");
    print_field("Date", &entry.date);
    print_field("Location", &entry.location);
    print_field("Tone", &tone_colored(entry.tone.as_str(), entry.tone).to_string());
    print_field("Tags", &entry.tags.join(", "));
    print_field("Characters", &entry.characters.join(", "));
    print_field(
        "Before",
        &emotion(&entry.emotion_before, entry.emotion_before_intensity),
    );
    print_field(
        "After",
        &emotion(&entry.emotion_after, entry.emotion_after_intensity),
    );
    print_field("Clarity", &rating(entry.clarity));
    print_field("Sleep", &rating(entry.sleep_quality));
    if !entry.body_text.is_empty() {
        println!();
        println!("{}", entry.body_text);
    }
    if !entry.meaning.is_empty() {
        println!();
        println!("{} {}", "Meaning:".dimmed(), entry.meaning);
    }
}

pub(super) fn print_draft(draft: &Draft) {
    println!();
    let label = match draft.index {
        Some(i) => (i + 1).to_string(),
        None => "new".to_string(),
    };
    print_full_entry(&label, &draft.entry);
}

pub(super) fn print_vocabulary(vocabulary: &Vocabulary) {
    println!("{}", "Tags:".bold());
    for tag in &vocabulary.tags {
        println!("  {}", tag);
    }
    println!("{}", "Characters:".bold());
    for character in &vocabulary.characters {
        println!("  {}", character);
    }
}

pub(super) fn print_config(config: &DreamzConfig) {
    for key in DreamzConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Empty values are skipped.
fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("{:<11}{}", format!("{}:", label).dimmed(), value);
    }
}

fn emotion(name: &str, intensity: u8) -> String {
    match (name.is_empty(), intensity) {
        (true, _) => String::new(),
        (false, 0) => name.to_string(),
        (false, n) => format!("{} ({}/{})", name, n, MAX_RATING),
    }
}

/// 0 means unrated.
fn rating(value: u8) -> String {
    if value == 0 {
        String::new()
    } else {
        format!("{}/{}", value, MAX_RATING)
    }
}

fn title_or_placeholder(entry: &Entry) -> &str {
    if entry.title.is_empty() {
        "(untitled)"
    } else {
        &entry.title
    }
}

fn tone_marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "+",
        Tone::Negative => "-",
        Tone::Neutral => "·",
    }
}

fn tone_colored(s: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Positive => s.green(),
        Tone::Negative => s.red(),
        Tone::Neutral => s.normal(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
