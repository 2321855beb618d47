// Markdown rendering of blog posts for terminal display

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const RULE: &str = "──────────────────────────────────────────────";

/// Render a blog post: the first line as a title, the rest as markdown.
pub fn render_blog(title: &str, body: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            title.trim().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(""),
    ];
    lines.extend(render_document(body));
    lines
}

/// Render a multi-line markdown document, tracking fenced code blocks.
pub fn render_document(markdown: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut in_code_block = false;

    for line in markdown.lines() {
        if is_code_fence(line) {
            if in_code_block {
                lines.push(Line::from(Span::styled(
                    format!("└{RULE}"),
                    Style::default().fg(Color::DarkGray),
                )));
            } else {
                let lang = extract_code_language(line);
                lines.push(Line::from(Span::styled(
                    format!("┌─ {} {RULE}", lang.as_deref().unwrap_or("code")),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            in_code_block = !in_code_block;
        } else if in_code_block {
            lines.push(Line::from(Span::styled(
                format!("  {line}"),
                Style::default().fg(Color::Green),
            )));
        } else {
            lines.push(render_line(line));
        }
    }

    lines
}

fn render_line(line: &str) -> Line<'static> {
    let trimmed = line.trim_start();

    if let Some(header) = parse_header(trimmed) {
        return header;
    }

    if trimmed.chars().all(|c| c == '-' || c == '*' || c == '_') && trimmed.len() >= 3 {
        return Line::from(Span::styled(RULE, Style::default().fg(Color::DarkGray)));
    }

    if let Some(quote) = trimmed.strip_prefix('>') {
        let mut spans = vec![Span::styled("│ ", Style::default().fg(Color::DarkGray))];
        spans.extend(render_inline(
            quote.trim_start(),
            Style::default().add_modifier(Modifier::ITALIC),
        ));
        return Line::from(spans);
    }

    if let Some(item) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
        .or_else(|| trimmed.strip_prefix("+ "))
    {
        let mut spans = vec![Span::styled("• ", Style::default().fg(Color::Cyan))];
        spans.extend(render_inline(item, Style::default()));
        return Line::from(spans);
    }

    if let Some((marker, item)) = split_ordered_item(trimmed) {
        let mut spans = vec![Span::styled(format!("{marker} "), Style::default().fg(Color::Cyan))];
        spans.extend(render_inline(item, Style::default()));
        return Line::from(spans);
    }

    Line::from(render_inline(line, Style::default()))
}

fn parse_header(line: &str) -> Option<Line<'static>> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?;
    let color = match level {
        1 => Color::Yellow,
        2 => Color::Cyan,
        _ => Color::Blue,
    };
    Some(Line::from(Span::styled(
        text.trim().to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
}

/// `"3. text"` -> `("3.", "text")`
fn split_ordered_item(line: &str) -> Option<(&str, &str)> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix(". ")?;
    Some((&line[..=digits], rest))
}

/// Inline styling: `**bold**`, `*italic*` and `` `code` ``.
fn render_inline(text: &str, base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                let (inner, closed) = take_until(&mut chars, "**");
                if closed {
                    flush(&mut spans, &mut current, base);
                    spans.push(Span::styled(
                        inner,
                        base.fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ));
                } else {
                    current.push_str("**");
                    current.push_str(&inner);
                }
            }
            '*' if chars.peek().is_some_and(|c| !c.is_whitespace()) => {
                let (inner, closed) = take_until(&mut chars, "*");
                if closed && !inner.is_empty() {
                    flush(&mut spans, &mut current, base);
                    spans.push(Span::styled(inner, base.add_modifier(Modifier::ITALIC)));
                } else {
                    current.push('*');
                    current.push_str(&inner);
                    if closed {
                        current.push('*');
                    }
                }
            }
            '`' => {
                let (inner, closed) = take_until(&mut chars, "`");
                if closed {
                    flush(&mut spans, &mut current, base);
                    spans.push(Span::styled(inner, Style::default().fg(Color::Magenta)));
                } else {
                    current.push('`');
                    current.push_str(&inner);
                }
            }
            _ => current.push(ch),
        }
    }

    flush(&mut spans, &mut current, base);
    spans
}

fn flush(spans: &mut Vec<Span<'static>>, current: &mut String, style: Style) {
    if !current.is_empty() {
        spans.push(Span::styled(std::mem::take(current), style));
    }
}

/// Consume characters up to and including `delimiter`.
/// Returns the text before it and whether the delimiter was found.
fn take_until(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, delimiter: &str) -> (String, bool) {
    let mut taken = String::new();
    while let Some(ch) = chars.next() {
        taken.push(ch);
        if taken.ends_with(delimiter) {
            // Single '*' must not match the first half of "**"
            if delimiter == "*" && chars.peek() == Some(&'*') {
                continue;
            }
            taken.truncate(taken.len() - delimiter.len());
            return (taken, true);
        }
    }
    (taken, false)
}

/// Detect if a line is a code block fence
pub fn is_code_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// Extract language from code fence
pub fn extract_code_language(line: &str) -> Option<String> {
    line.trim()
        .strip_prefix("```")
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(ToString::to_string)
}
