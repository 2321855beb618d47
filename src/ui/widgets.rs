use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, Focus, ResultTab, Toast, ToastLevel};
use crate::models::BlogMetadata;

const TOPIC_PLACEHOLDER: &str = "e.g., How Python is used in AI";

pub fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "AI Blog Writing Agent",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your autonomous content generation assistant",
            Style::default().fg(Color::Cyan),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let focused = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let label_style = |focus: Focus| {
        if app.focus == focus && !app.is_loading {
            focused
        } else {
            Style::default().fg(Color::Gray)
        }
    };

    let topic = if app.topic_input.is_empty() {
        Span::styled(TOPIC_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.topic_input.clone(), Style::default().fg(Color::White))
    };
    let cursor = if app.focus == Focus::Topic && !app.is_loading {
        Span::styled("▏", focused)
    } else {
        Span::raw("")
    };

    let button = if app.is_loading {
        Span::styled(" Generating... ", Style::default().fg(Color::White).bg(Color::Blue))
    } else if app.can_submit() {
        Span::styled(
            " Generate Blog ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" Generate Blog ", Style::default().fg(Color::Gray).bg(Color::DarkGray))
    };

    let lines = vec![
        Line::from(Span::styled("Blog Topic", label_style(Focus::Topic))),
        Line::from(vec![Span::raw("  "), topic, cursor]),
        Line::from(""),
        Line::from(Span::styled("Writing Tone", label_style(Focus::Tone))),
        Line::from(vec![
            Span::raw("  ◀ "),
            Span::styled(app.tone.label(), Style::default().fg(Color::Yellow)),
            Span::raw(" ▶"),
        ]),
        Line::from(button).alignment(Alignment::Right),
    ];

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Generate a New Blog ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(form, area);
}

pub fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Generating Your Blog ")
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let status = Line::from(vec![
        Span::styled(
            app.progress.stage.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{}%", app.progress.percent),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
        .percent(u16::from(app.progress.percent.min(100)))
        .label("");
    frame.render_widget(gauge, rows[1]);
}

pub fn metadata_lines(metadata: &BlogMetadata) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let mut tags = Vec::new();
    for tag in &metadata.tags {
        tags.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(Color::Cyan),
        ));
        tags.push(Span::raw(" "));
    }

    vec![
        heading("Title"),
        Line::from(Span::styled(
            metadata.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Description"),
        Line::from(metadata.description.clone()),
        Line::from(""),
        heading("Tags"),
        Line::from(tags),
        Line::from(""),
        heading("Reading Time"),
        Line::from(metadata.reading_time.clone()),
        Line::from(""),
        heading("URL Slug"),
        Line::from(Span::styled(
            metadata.slug.clone(),
            Style::default().fg(Color::Green),
        )),
    ]
}

pub fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let subtitle = app.generated_at.map_or_else(
        || " Generated Blog ".to_string(),
        |at| format!(" Generated Blog ({}) ", at.format("%H:%M:%S")),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(subtitle)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let tabs = Tabs::new([ResultTab::Content.title(), ResultTab::Metadata.title()])
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, rows[0]);

    let lines = match app.active_tab {
        ResultTab::Content => {
            let (title, body) = app.blog.split_title();
            super::markdown::render_blog(title, body)
        }
        ResultTab::Metadata => metadata_lines(&app.blog.metadata),
    };

    let body_area = rows[1];
    let available_width = (body_area.width as usize).max(1);
    let total_visual_lines: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(available_width).max(1))
        .sum();

    let max_scroll = total_visual_lines.saturating_sub(body_area.height as usize);
    let actual_scroll = app.scroll_offset.min(max_scroll);
    app.scroll_offset = actual_scroll;

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(actual_scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(body, body_area);
}

pub fn render_empty_state(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Enter a topic and our AI agent will research, write, and optimize a blog post for you.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

pub fn render_toast(frame: &mut Frame, toast: &Toast, area: Rect) {
    let color = match toast.level {
        ToastLevel::Success => Color::Green,
        ToastLevel::Warning => Color::Yellow,
        ToastLevel::Error => Color::Red,
    };

    let text = vec![
        Line::from(Span::styled(
            toast.heading.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(toast.content.clone()),
    ];

    let popup_width = 60_u16.min(area.width);
    let y_offset = 1_u16.min(area.height);
    let popup_height = 5_u16.min(area.height - y_offset);
    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + y_offset,
        width: popup_width,
        height: popup_height,
    }
    .intersection(area);
    if popup_area.is_empty() {
        return;
    }

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

pub fn render_help_window(frame: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Blogsmith - Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Form:"),
        Line::from("  Enter         - Generate blog"),
        Line::from("  Tab           - Switch between topic and tone"),
        Line::from("  Left/Right    - Change tone"),
        Line::from(""),
        section("Results:"),
        Line::from("  Ctrl+T        - Switch Content / Metadata tab"),
        Line::from("  Ctrl+D        - Download blog (Markdown)"),
        Line::from("  Ctrl+E        - Download metadata (JSON)"),
        Line::from("  Up/Down       - Scroll"),
        Line::from("  PgUp/PgDn     - Scroll by page"),
        Line::from("  Home/End      - Jump to start/end"),
        Line::from(""),
        section("General:"),
        Line::from("  Ctrl+H / F1   - Show/hide this help"),
        Line::from("  Ctrl+C twice  - Quit"),
        Line::from("  Ctrl+Q        - Quit immediately"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Ctrl+H or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    let popup_width = 56;
    let popup_height = 23;
    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width.min(area.width),
        height: popup_height.min(area.height),
    };

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help_paragraph, popup_area);
}

pub fn render_bottom_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.exit_pending {
        (
            "Press Ctrl+C again to exit, Esc to cancel",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if app.blog.is_empty() {
        (
            "Enter: Generate | Tab: Next Field | Ctrl+H: Help | Ctrl+C: Quit",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            "Enter: Generate | Ctrl+T: Tab | Ctrl+D: Markdown | Ctrl+E: Metadata | Ctrl+H: Help",
            Style::default().fg(Color::DarkGray),
        )
    };

    let bar = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style);

    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_metadata_lines_show_every_field() {
        let metadata = BlogMetadata {
            title: "Title".to_string(),
            description: "Desc".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            reading_time: "3 min read".to_string(),
            slug: "title".to_string(),
        };
        let text: Vec<String> = metadata_lines(&metadata).iter().map(text_of).collect();

        for expected in ["Title", "Desc", "[a] [b] ", "3 min read", "title", "URL Slug"] {
            assert!(text.iter().any(|line| line == expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_metadata_lines_without_tags() {
        let lines = metadata_lines(&BlogMetadata::default());
        assert_eq!(lines.len(), 14);
    }
}
