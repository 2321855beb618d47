// Downloads of generated blogs as markdown and metadata files

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Blog, BlogMetadata};

const FALLBACK_STEM: &str = "blog";

fn file_stem(metadata: &BlogMetadata) -> &str {
    if metadata.slug.is_empty() {
        FALLBACK_STEM
    } else {
        &metadata.slug
    }
}

pub fn markdown_file_name(metadata: &BlogMetadata) -> String {
    format!("{}.md", file_stem(metadata))
}

pub fn metadata_file_name(metadata: &BlogMetadata) -> String {
    format!("{}-metadata.json", file_stem(metadata))
}

pub struct Downloads {
    dir: PathBuf,
}

impl Downloads {
    /// Use the platform download directory, or the working directory when
    /// there is none.
    pub fn new() -> Self {
        let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
        Self { dir }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the raw markdown content. Existing files are overwritten.
    pub fn save_markdown(&self, blog: &Blog) -> Result<PathBuf> {
        if blog.is_empty() {
            anyhow::bail!("Nothing to download yet");
        }

        let path = self.dir.join(markdown_file_name(&blog.metadata));
        self.write(&path, &blog.content)
            .context("Failed to write markdown file")?;

        log::info!("Saved markdown to {}", path.display());
        Ok(path)
    }

    pub fn save_metadata(&self, blog: &Blog) -> Result<PathBuf> {
        if blog.is_empty() {
            anyhow::bail!("Nothing to download yet");
        }

        let path = self.dir.join(metadata_file_name(&blog.metadata));
        let content =
            serde_json::to_string_pretty(&blog.metadata).context("Failed to serialize metadata")?;
        self.write(&path, &content)
            .context("Failed to write metadata file")?;

        log::info!("Saved metadata to {}", path.display());
        Ok(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).context("Failed to create download directory")?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for Downloads {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_blog(slug: &str) -> Blog {
        Blog {
            content: "Title\n\nSome **markdown** body".to_string(),
            metadata: BlogMetadata {
                title: "Title".to_string(),
                description: "A description".to_string(),
                tags: vec!["rust".to_string(), "tui".to_string()],
                reading_time: "1 min read".to_string(),
                slug: slug.to_string(),
            },
        }
    }

    #[test]
    fn test_file_names_use_slug() {
        let blog = sample_blog("my-post");
        assert_eq!(markdown_file_name(&blog.metadata), "my-post.md");
        assert_eq!(metadata_file_name(&blog.metadata), "my-post-metadata.json");
    }

    #[test]
    fn test_file_names_fall_back_to_blog() {
        let blog = sample_blog("");
        assert_eq!(markdown_file_name(&blog.metadata), "blog.md");
        assert_eq!(metadata_file_name(&blog.metadata), "blog-metadata.json");
    }

    #[test]
    fn test_save_markdown() {
        let temp = TempDir::new().unwrap();
        let downloads = Downloads::with_dir(temp.path());
        let blog = sample_blog("my-post");

        let path = downloads.save_markdown(&blog).unwrap();
        assert_eq!(path, temp.path().join("my-post.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), blog.content);
    }

    #[test]
    fn test_save_metadata() {
        let temp = TempDir::new().unwrap();
        let downloads = Downloads::with_dir(temp.path());
        let blog = sample_blog("my-post");

        let path = downloads.save_metadata(&blog).unwrap();
        let written = fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["title"], "Title");
        assert_eq!(value["readingTime"], "1 min read");
        assert_eq!(value["tags"], serde_json::json!(["rust", "tui"]));

        let parsed: BlogMetadata = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, blog.metadata);
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let downloads = Downloads::with_dir(temp.path().join("nested/out"));
        let path = downloads.save_markdown(&sample_blog("x")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let downloads = Downloads::with_dir(temp.path());
        fs::write(temp.path().join("my-post.md"), "old").unwrap();

        downloads.save_markdown(&sample_blog("my-post")).unwrap();
        let written = fs::read_to_string(temp.path().join("my-post.md")).unwrap();
        assert_ne!(written, "old");
    }

    #[test]
    fn test_empty_blog_is_not_saved() {
        let temp = TempDir::new().unwrap();
        let downloads = Downloads::with_dir(temp.path());

        assert!(downloads.save_markdown(&Blog::default()).is_err());
        assert!(downloads.save_metadata(&Blog::default()).is_err());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
