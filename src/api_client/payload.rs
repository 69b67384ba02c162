//! Request payloads: the posts query filter and the multipart form a post
//! create/edit submits.

use crate::api_client::ApiError;
use reqwest::multipart::{Form, Part};
use std::path::PathBuf;

/// Filter parameters for the posts listing.
///
/// `page` and `limit` always go on the query string; the optional filters
/// are appended only when set, never as empty parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PostFilter {
    pub page: u32,
    pub limit: u32,
    pub artist: Option<String>,
    pub tag: Option<String>,
    pub status: Option<String>,
}

impl PostFilter {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            artist: None,
            tag: None,
            status: None,
        }
    }

    /// The query pairs in the order they appear on the wire.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(artist) = &self.artist {
            pairs.push(("artist", artist.clone()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        pairs
    }
}

impl Default for PostFilter {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// The editable fields of a post, as gathered from the user before a create
/// or edit submission. Mirrors the named form fields the API expects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub artist: String,
    pub slug: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub status: String,
    pub description: String,
    /// Optional file attachment shipped as an extra multipart part.
    pub attachment: Option<PathBuf>,
}

impl PostDraft {
    /// Builds the multipart form for a create or edit request, reading the
    /// attachment from disk when one was given.
    pub async fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("title", self.title)
            .text("artist", self.artist)
            .text("slug", self.slug)
            .text("tags", self.tags.join(","))
            .text("status", self.status)
            .text("description", self.description);

        if let Some(category) = self.category {
            form = form.text("category", category);
        }

        if let Some(path) = self.attachment {
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .ok_or_else(|| ApiError::Other("Invalid attachment path".to_string()))?;
            let bytes = tokio::fs::read(&path).await?;
            form = form.part("file", Part::bytes(bytes).file_name(file_name));
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_carries_page_and_limit_only() {
        let pairs = PostFilter::default().query_pairs();
        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn test_status_filter_appears_exactly_once() {
        let mut filter = PostFilter::new(1, 10);
        filter.status = Some("draft".to_string());
        let pairs = filter.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("limit", "10".to_string()),
                ("status", "draft".to_string()),
            ]
        );
    }

    #[test]
    fn test_all_filters_set() {
        let filter = PostFilter {
            page: 3,
            limit: 25,
            artist: Some("nina".to_string()),
            tag: Some("soul".to_string()),
            status: Some("published".to_string()),
        };
        let pairs = filter.query_pairs();
        assert_eq!(pairs.len(), 5);
        assert!(pairs.contains(&("artist", "nina".to_string())));
        assert!(pairs.contains(&("tag", "soul".to_string())));
        assert!(pairs.contains(&("status", "published".to_string())));
    }

    #[tokio::test]
    async fn test_draft_without_attachment_builds_form() {
        let draft = PostDraft {
            title: "Title".to_string(),
            artist: "Artist".to_string(),
            slug: "title".to_string(),
            category: None,
            tags: vec!["a".to_string(), "b".to_string()],
            status: "draft".to_string(),
            description: "desc".to_string(),
            attachment: None,
        };
        assert!(draft.into_form().await.is_ok());
    }

    #[tokio::test]
    async fn test_draft_with_missing_attachment_fails() {
        let draft = PostDraft {
            attachment: Some(PathBuf::from("/definitely/not/here.png")),
            ..PostDraft::default()
        };
        assert!(draft.into_form().await.is_err());
    }
}
