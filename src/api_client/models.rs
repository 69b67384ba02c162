use serde::{Deserialize, Serialize};

/// A post record as the CMS returns it.
///
/// The slug is the unique identifier; update, delete and bulk delete all key
/// on it. Uniqueness is the API's business, not ours.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Post {
    pub title: String,
    pub artist: String,
    pub slug: String,
    #[serde(default)]
    pub category: Option<String>,
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub views: u64,
}

/// One page of posts plus whatever pagination metadata the API includes.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PostsPage {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Response to a login attempt. `success` missing means failure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope shared by the mutating endpoints: a `success` flag by
/// convention and an optional human-readable message.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// A tag or category entry for the filter selects. The API sends either a
/// bare string or a `{slug, name}` object; accept both.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum SelectItem {
    Entry { slug: String, name: String },
    Plain(String),
}

impl SelectItem {
    pub fn value(&self) -> &str {
        match self {
            SelectItem::Entry { slug, .. } => slug,
            SelectItem::Plain(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SelectItem::Entry { name, .. } => name,
            SelectItem::Plain(s) => s,
        }
    }
}

/// View counter for a single post.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostViews {
    #[serde(default)]
    pub views: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_tolerates_missing_optional_fields() {
        let post: Post = serde_json::from_str(
            r#"{"title":"T","artist":"A","slug":"t","status":"published"}"#,
        )
        .unwrap();
        assert_eq!(post.category, None);
        assert!(post.tags.is_empty());
        assert_eq!(post.views, 0);
    }

    #[test]
    fn test_login_response_without_success_is_failure() {
        let res: LoginResponse = serde_json::from_str(r#"{"message":"bad credentials"}"#).unwrap();
        assert!(!res.success);
        assert!(res.token.is_none());
    }

    #[test]
    fn test_select_item_accepts_both_shapes() {
        let items: Vec<SelectItem> =
            serde_json::from_str(r#"["rock", {"slug":"hip-hop","name":"Hip Hop"}]"#).unwrap();
        assert_eq!(items[0].value(), "rock");
        assert_eq!(items[1].value(), "hip-hop");
        assert_eq!(items[1].label(), "Hip Hop");
    }
}
