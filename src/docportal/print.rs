use chrono::{NaiveDate, Utc};
use colored::Colorize;
use docportal::model::{Document, Resource};
use docportal::portal::{Message, MessageLevel};
use docportal::queries::stats::SectionStats;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const CRITICAL_MARKER: &str = "▲";

pub fn print_messages(messages: &[Message]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_documents(docs: &[Document]) {
    if docs.is_empty() {
        println!("No documents found.");
        return;
    }

    for (i, doc) in docs.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);

        let left_prefix = if doc.critical {
            format!("  {} ", CRITICAL_MARKER)
        } else {
            "    ".to_string()
        };

        let summary_preview: String = doc
            .summary
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = if summary_preview.is_empty() {
            doc.title.clone()
        } else {
            format!("{} {}", doc.title, summary_preview)
        };

        let fixed_width = left_prefix.width() + idx_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let line_display = truncate_to_width(&line, available);
        let padding = available.saturating_sub(line_display.width());

        let idx_colored = if doc.critical {
            idx_str.yellow()
        } else {
            idx_str.normal()
        };

        println!(
            "{}{}{}{}  {}",
            left_prefix,
            idx_colored,
            line_display,
            " ".repeat(padding),
            format_updated_ago(doc.updated).dimmed()
        );
    }
}

pub fn print_resources(resources: &[Resource]) {
    if resources.is_empty() {
        println!("No resources found.");
        return;
    }

    for (i, res) in resources.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let kind_str = format!("[{}] ", res.kind);
        let meta = format!("{} · {}", res.area, res.date.format("%Y-%m-%d"));

        let fixed_width = 4 + idx_str.width() + kind_str.width() + 2 + meta.width();
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&res.title, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "    {}{}{}{}  {}",
            idx_str,
            kind_str.cyan(),
            title_display,
            " ".repeat(padding),
            meta.dimmed()
        );
    }
}

pub fn print_stats(stats: &SectionStats) {
    println!("    {:<16}{}", "protocolos", stats.protocolos.to_string().bold());
    println!(
        "    {:<16}{}",
        "procedimientos",
        stats.procedimientos.to_string().bold()
    );
    println!("    {:<16}{}", "matrices", stats.matrices.to_string().bold());
    println!("    {:<16}{}", "otros", stats.otros.to_string().bold());
    println!("    {:<16}{}", "total", stats.total().to_string().bold());
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

fn format_updated_ago(updated: NaiveDate) -> String {
    let today = Utc::now().date_naive();
    let days = (today - updated).num_days().max(0);
    let duration = chrono::Duration::days(days);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
