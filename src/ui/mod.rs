pub mod markdown;
pub mod widgets;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

const HEADER_HEIGHT: u16 = 3;
const FORM_HEIGHT: u16 = 8;
const PROGRESS_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, app: &mut App) {
    let progress_height = if app.is_loading { PROGRESS_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(progress_height),
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Bottom keymap bar
        ])
        .split(frame.area());

    widgets::render_header(frame, chunks[0]);
    widgets::render_form(frame, app, chunks[1]);
    if app.is_loading {
        widgets::render_progress(frame, app, chunks[2]);
    }
    if app.blog.is_empty() {
        if !app.is_loading {
            widgets::render_empty_state(frame, chunks[3]);
        }
    } else {
        widgets::render_results(frame, app, chunks[3]);
    }
    widgets::render_bottom_bar(frame, app, chunks[4]);

    if let Some(toast) = &app.toast {
        widgets::render_toast(frame, toast, frame.area());
    }

    if app.show_help {
        widgets::render_help_window(frame, frame.area());
    }
}
