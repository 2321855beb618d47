use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlogMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub reading_time: String,
    pub slug: String,
}

/// A generated post. The first line of `content` doubles as its display title.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blog {
    pub content: String,
    pub metadata: BlogMetadata,
}

impl Blog {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Split the content on its first newline into `(title, body)`.
    pub fn split_title(&self) -> (&str, &str) {
        self.content
            .split_once('\n')
            .unwrap_or((self.content.as_str(), ""))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub stage: String,
    pub percent: u8,
}

impl ProgressState {
    pub fn new(stage: impl Into<String>, percent: u8) -> Self {
        Self {
            stage: stage.into(),
            percent,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Educational,
    Formal,
    Conversational,
    Creative,
    Technical,
}

impl Tone {
    pub const ALL: [Self; 5] = [
        Self::Educational,
        Self::Formal,
        Self::Conversational,
        Self::Creative,
        Self::Technical,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Educational => "educational",
            Self::Formal => "formal",
            Self::Conversational => "conversational",
            Self::Creative => "creative",
            Self::Technical => "technical",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Educational => "Educational",
            Self::Formal => "Formal",
            Self::Conversational => "Conversational",
            Self::Creative => "Creative",
            Self::Technical => "Technical",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    #[serde(default = "default_timeout")]
    pub request_timeout: u64,
    #[serde(default = "default_progress_unit")]
    pub progress_unit_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<String>,
}

const fn default_timeout() -> u64 {
    600
}

const fn default_progress_unit() -> u64 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            request_timeout: default_timeout(),
            progress_unit_ms: default_progress_unit(),
            download_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_default_is_empty() {
        let blog = Blog::default();
        assert!(blog.is_empty());
        assert!(blog.metadata.tags.is_empty());
        assert_eq!(blog.metadata.slug, "");
    }

    #[test]
    fn test_split_title() {
        let blog = Blog {
            content: "Title\nBody text".to_string(),
            ..Default::default()
        };
        assert_eq!(blog.split_title(), ("Title", "Body text"));
    }

    #[test]
    fn test_split_title_keeps_remaining_lines() {
        let blog = Blog {
            content: "Title\nOne\nTwo".to_string(),
            ..Default::default()
        };
        assert_eq!(blog.split_title(), ("Title", "One\nTwo"));
    }

    #[test]
    fn test_split_title_single_line() {
        let blog = Blog {
            content: "Only a title".to_string(),
            ..Default::default()
        };
        assert_eq!(blog.split_title(), ("Only a title", ""));
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let metadata = BlogMetadata {
            reading_time: "3 min read".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&metadata).unwrap();
        assert!(json.contains("\"readingTime\":\"3 min read\""));
    }

    #[test]
    fn test_tone_cycles() {
        assert_eq!(Tone::default(), Tone::Educational);
        assert_eq!(Tone::Educational.next(), Tone::Formal);
        assert_eq!(Tone::Technical.next(), Tone::Educational);
        assert_eq!(Tone::Educational.prev(), Tone::Technical);
        assert_eq!(Tone::Creative.as_str(), "creative");
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, 600);
        assert_eq!(config.progress_unit_ms, 100);
        assert!(config.download_dir.is_none());
    }
}
