// Normalization of raw service responses into a canonical `Blog`
//
// Each derived field is resolved by walking an ordered list of rules; the
// first rule that yields a value wins.

use super::{RawBlogResponse, RawMetadata};
use crate::models::{Blog, BlogMetadata};
use crate::reading;
use crate::slug::slugify;

type Rule<T> = fn(&RawBlogResponse) -> Option<T>;

const TAG_RULES: &[Rule<Vec<String>>] = &[provided_tags, provided_keywords];
const READING_TIME_RULES: &[Rule<String>] = &[
    provided_reading_time,
    provided_reading_time_camel,
    computed_reading_time,
];
const SLUG_RULES: &[Rule<String>] = &[provided_slug, derived_slug];

fn first_match<T>(raw: &RawBlogResponse, rules: &[Rule<T>]) -> Option<T> {
    rules.iter().find_map(|rule| rule(raw))
}

fn non_empty_list(list: Option<&Vec<String>>) -> Option<Vec<String>> {
    list.filter(|items| !items.is_empty()).cloned()
}

fn non_empty_text(text: Option<&String>) -> Option<String> {
    text.filter(|value| !value.is_empty()).cloned()
}

fn provided_tags(raw: &RawBlogResponse) -> Option<Vec<String>> {
    non_empty_list(raw.metadata.tags.as_ref())
}

fn provided_keywords(raw: &RawBlogResponse) -> Option<Vec<String>> {
    non_empty_list(raw.metadata.keywords.as_ref())
}

fn provided_reading_time(raw: &RawBlogResponse) -> Option<String> {
    non_empty_text(raw.metadata.reading_time.as_ref())
}

fn provided_reading_time_camel(raw: &RawBlogResponse) -> Option<String> {
    non_empty_text(raw.metadata.reading_time_camel.as_ref())
}

#[allow(clippy::unnecessary_wraps)]
fn computed_reading_time(raw: &RawBlogResponse) -> Option<String> {
    Some(reading::estimate_reading_time(&raw.content))
}

fn provided_slug(raw: &RawBlogResponse) -> Option<String> {
    non_empty_text(raw.metadata.slug.as_ref())
}

#[allow(clippy::unnecessary_wraps)]
fn derived_slug(raw: &RawBlogResponse) -> Option<String> {
    Some(slugify(&raw.metadata.title))
}

/// Build the canonical blog record from a raw response.
pub fn normalize(raw: RawBlogResponse) -> Blog {
    let tags = first_match(&raw, TAG_RULES).unwrap_or_default();
    let reading_time = first_match(&raw, READING_TIME_RULES).unwrap_or_default();
    let slug = first_match(&raw, SLUG_RULES).unwrap_or_default();

    let RawBlogResponse {
        content,
        metadata: RawMetadata {
            title, description, ..
        },
    } = raw;

    Blog {
        content,
        metadata: BlogMetadata {
            title,
            description: description.unwrap_or_default(),
            tags,
            reading_time,
            slug,
        },
    }
}
