use crate::api::GenerateRequest;
use crate::models::{Blog, ProgressState, Tone};
use crate::storage::Downloads;

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Topic,
    Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTab {
    Content,
    Metadata,
}

impl ResultTab {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Content => "Blog Content",
            Self::Metadata => "SEO Metadata",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Content => 0,
            Self::Metadata => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub heading: String,
    pub content: String,
    pub level: ToastLevel,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_DURATION
    }
}

#[derive(Debug)]
pub struct App {
    pub should_quit: bool,
    pub exit_pending: bool,
    pub show_help: bool,

    // Form
    pub focus: Focus,
    pub topic_input: String,
    pub tone: Tone,

    // Generation
    pub is_loading: bool,
    pub progress: ProgressState,
    pub pending_topic: String,

    // Results
    pub blog: Blog,
    pub generated_at: Option<DateTime<Local>>,
    pub active_tab: ResultTab,
    pub scroll_offset: usize,

    pub toast: Option<Toast>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            exit_pending: false,
            show_help: false,
            focus: Focus::Topic,
            topic_input: String::new(),
            tone: Tone::default(),
            is_loading: false,
            progress: ProgressState::default(),
            pending_topic: String::new(),
            blog: Blog::default(),
            generated_at: None,
            active_tab: ResultTab::Content,
            scroll_offset: 0,
            toast: None,
        }
    }

    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Topic => Focus::Tone,
            Focus::Tone => Focus::Topic,
        };
    }

    pub fn next_tone(&mut self) {
        self.tone = self.tone.next();
    }

    pub fn prev_tone(&mut self) {
        self.tone = self.tone.prev();
    }

    pub const fn toggle_tab(&mut self) {
        self.active_tab = match self.active_tab {
            ResultTab::Content => ResultTab::Metadata,
            ResultTab::Metadata => ResultTab::Content,
        };
        self.scroll_offset = 0;
    }

    pub const fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub const fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(amount);
    }

    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub const fn scroll_to_bottom(&mut self) {
        // Clamped to the real content height while rendering
        self.scroll_offset = usize::MAX;
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.topic_input.trim().is_empty()
    }

    pub fn notify(&mut self, level: ToastLevel, heading: &str, content: impl Into<String>) {
        self.toast = Some(Toast {
            heading: heading.to_string(),
            content: content.into(),
            level,
            shown_at: Instant::now(),
        });
    }

    /// Drop the toast once it has been visible long enough.
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }

    /// Validate the form and reset state for a new run.
    ///
    /// Returns `None` without touching the previous results when the topic
    /// is blank.
    pub fn begin_generation(&mut self) -> Option<GenerateRequest> {
        if self.is_loading {
            return None;
        }

        if self.topic_input.trim().is_empty() {
            self.notify(
                ToastLevel::Warning,
                "Missing Information",
                "Please enter a topic to generate the blog.",
            );
            return None;
        }

        self.is_loading = true;
        self.blog = Blog::default();
        self.generated_at = None;
        self.progress = ProgressState::default();
        self.active_tab = ResultTab::Content;
        self.scroll_offset = 0;
        self.pending_topic.clone_from(&self.topic_input);

        Some(GenerateRequest::new(self.topic_input.clone(), self.tone.as_str()))
    }

    pub fn apply_progress(&mut self, state: ProgressState) {
        // Late updates after completion are dropped
        if !self.is_loading {
            return;
        }
        self.progress = state;
    }

    pub fn finish_success(&mut self, blog: Blog) {
        self.is_loading = false;
        self.blog = blog;
        self.generated_at = Some(Local::now());
        let content = format!(
            "Your blog about \"{}\" has been generated successfully.",
            self.pending_topic
        );
        self.notify(ToastLevel::Success, "Blog Generated", content);
    }

    pub fn finish_failure(&mut self) {
        self.is_loading = false;
        self.blog = Blog::default();
        self.generated_at = None;
        self.notify(
            ToastLevel::Error,
            "Generation Failed",
            "There was an error generating your blog. Please try again.",
        );
    }

    pub fn download_markdown(&mut self, downloads: &Downloads) {
        if self.blog.is_empty() {
            return;
        }
        match downloads.save_markdown(&self.blog) {
            Ok(path) => self.notify(
                ToastLevel::Success,
                "Download Started",
                format!("Your markdown file is being saved to {}.", path.display()),
            ),
            Err(e) => {
                log::error!("Markdown download failed: {e:#}");
                self.notify(ToastLevel::Error, "Download Failed", format!("{e:#}"));
            }
        }
    }

    pub fn download_metadata(&mut self, downloads: &Downloads) {
        if self.blog.is_empty() {
            return;
        }
        match downloads.save_metadata(&self.blog) {
            Ok(path) => self.notify(
                ToastLevel::Success,
                "Download Started",
                format!("Your metadata JSON file is being saved to {}.", path.display()),
            ),
            Err(e) => {
                log::error!("Metadata download failed: {e:#}");
                self.notify(ToastLevel::Error, "Download Failed", format!("{e:#}"));
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
