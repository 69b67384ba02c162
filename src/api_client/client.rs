//! The CMS API surface and its HTTP implementation.
//!
//! The `CmsApi` trait is the seam the dashboard controller depends on; the
//! `ApiClient` implementation speaks to the remote API over reqwest and owns
//! the session credential. Every authenticated request carries the raw token
//! in the `Authorization` header, no prefix, and only while a token is held.
//! There is deliberately no retry, timeout or backoff; a network failure
//! surfaces as an `ApiError` for the caller to report.

use crate::api_client::{
    ApiError, ApiOutcome, LoginResponse, PostDraft, PostFilter, PostViews, PostsPage, SelectItem,
};
use crate::configuration::Settings;
use crate::foundation::session::Session;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::json;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CmsApi {
    /// Whether a session token is currently held.
    fn has_session(&self) -> bool;

    /// Authenticates against the API. On `success: true` the issued token
    /// becomes the active, persisted credential; on failure nothing changes.
    async fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// Discards the session credential from memory and the store.
    async fn logout(&mut self) -> Result<(), ApiError>;

    async fn fetch_posts(&self, filter: &PostFilter) -> Result<PostsPage, ApiError>;
    async fn fetch_drafts(&self) -> Result<PostsPage, ApiError>;
    async fn fetch_tags(&self) -> Result<Vec<SelectItem>, ApiError>;
    async fn fetch_categories(&self) -> Result<Vec<SelectItem>, ApiError>;
    async fn fetch_artist_posts(&self, slug: &str) -> Result<PostsPage, ApiError>;
    async fn fetch_post_views(&self, slug: &str) -> Result<PostViews, ApiError>;

    async fn create_post(&self, draft: PostDraft) -> Result<ApiOutcome, ApiError>;
    async fn edit_post(&self, slug: &str, draft: PostDraft) -> Result<ApiOutcome, ApiError>;
    async fn delete_post(&self, slug: &str) -> Result<ApiOutcome, ApiError>;

    /// Removes several posts in one request. An empty id list is a valid
    /// call; the server decides its semantics.
    async fn bulk_delete(&self, ids: &[String]) -> Result<ApiOutcome, ApiError>;
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(settings: &Settings, session: Session) -> Self {
        Self {
            http: Client::new(),
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header("Authorization", token),
            None => request,
        }
    }
}

#[async_trait]
impl CmsApi for ApiClient {
    fn has_session(&self) -> bool {
        self.session.token().is_some()
    }

    async fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .http
            .post(self.endpoint("login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?
            .json()
            .await?;

        if response.success {
            if let Some(token) = &response.token {
                self.session.store(token)?;
            }
        }

        Ok(response)
    }

    async fn logout(&mut self) -> Result<(), ApiError> {
        self.session.clear()?;
        Ok(())
    }

    async fn fetch_posts(&self, filter: &PostFilter) -> Result<PostsPage, ApiError> {
        let request = self
            .http
            .get(self.endpoint("posts"))
            .query(&filter.query_pairs());

        Ok(self.with_auth(request).send().await?.json().await?)
    }

    async fn fetch_drafts(&self) -> Result<PostsPage, ApiError> {
        let request = self.http.get(self.endpoint("drafts"));
        Ok(self.with_auth(request).send().await?.json().await?)
    }

    async fn fetch_tags(&self) -> Result<Vec<SelectItem>, ApiError> {
        let request = self.http.get(self.endpoint("tags"));
        Ok(self.with_auth(request).send().await?.json().await?)
    }

    async fn fetch_categories(&self) -> Result<Vec<SelectItem>, ApiError> {
        let request = self.http.get(self.endpoint("categories"));
        Ok(self.with_auth(request).send().await?.json().await?)
    }

    async fn fetch_artist_posts(&self, slug: &str) -> Result<PostsPage, ApiError> {
        let request = self.http.get(self.endpoint(&format!("artists/{}", slug)));
        Ok(self.with_auth(request).send().await?.json().await?)
    }

    async fn fetch_post_views(&self, slug: &str) -> Result<PostViews, ApiError> {
        let request = self
            .http
            .get(self.endpoint(&format!("posts/{}/views", slug)));
        Ok(self.with_auth(request).send().await?.json().await?)
    }

    async fn create_post(&self, draft: PostDraft) -> Result<ApiOutcome, ApiError> {
        let form = draft.into_form().await?;
        let request = self.http.post(self.endpoint("posts")).multipart(form);
        Ok(self.with_auth(request).send().await?.json().await?)
    }

    async fn edit_post(&self, slug: &str, draft: PostDraft) -> Result<ApiOutcome, ApiError> {
        let form = draft.into_form().await?;
        let request = self
            .http
            .put(self.endpoint(&format!("posts/{}", slug)))
            .multipart(form);
        Ok(self.with_auth(request).send().await?.json().await?)
    }

    async fn delete_post(&self, slug: &str) -> Result<ApiOutcome, ApiError> {
        let request = self.http.delete(self.endpoint(&format!("posts/{}", slug)));
        Ok(self.with_auth(request).send().await?.json().await?)
    }

    async fn bulk_delete(&self, ids: &[String]) -> Result<ApiOutcome, ApiError> {
        let request = self
            .http
            .post(self.endpoint("posts/bulk-delete"))
            .json(&json!({ "ids": ids }));
        Ok(self.with_auth(request).send().await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> ApiClient {
        let db = sled::Config::new().temporary(true).open().unwrap();
        let session = Session::load(db).unwrap();
        ApiClient::new(&Settings::new(base_url, 10), session)
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let client = test_client("https://cms.example.workers.dev/");
        assert_eq!(
            client.endpoint("posts"),
            "https://cms.example.workers.dev/posts"
        );

        let client = test_client("https://cms.example.workers.dev");
        assert_eq!(
            client.endpoint("posts/bulk-delete"),
            "https://cms.example.workers.dev/posts/bulk-delete"
        );
    }

    #[test]
    fn test_fresh_client_has_no_session() {
        let client = test_client("https://cms.example.workers.dev/");
        assert!(!client.has_session());
    }

    #[tokio::test]
    async fn test_logout_drops_the_credential() {
        let db = sled::Config::new().temporary(true).open().unwrap();
        let mut session = Session::load(db).unwrap();
        session.store("abc").unwrap();

        let mut client = ApiClient::new(&Settings::new("https://cms.example/", 10), session);
        assert!(client.has_session());

        client.logout().await.unwrap();
        assert!(!client.has_session());
    }

    #[test]
    fn test_auth_header_carries_the_raw_token() {
        let db = sled::Config::new().temporary(true).open().unwrap();
        let mut session = Session::load(db).unwrap();
        session.store("abc").unwrap();

        let client = ApiClient::new(&Settings::new("https://cms.example/", 10), session);
        let request = client
            .with_auth(client.http.get(client.endpoint("posts")))
            .build()
            .unwrap();

        // Verbatim token, no "Bearer " prefix.
        assert_eq!(
            request.headers().get("Authorization").unwrap(),
            &"abc".parse::<reqwest::header::HeaderValue>().unwrap()
        );
    }

    #[tokio::test]
    async fn test_requests_after_logout_omit_the_auth_header() {
        let db = sled::Config::new().temporary(true).open().unwrap();
        let mut session = Session::load(db).unwrap();
        session.store("abc").unwrap();

        let mut client = ApiClient::new(&Settings::new("https://cms.example/", 10), session);
        client.logout().await.unwrap();

        let request = client
            .with_auth(client.http.get(client.endpoint("posts")))
            .build()
            .unwrap();
        assert!(request.headers().get("Authorization").is_none());
    }
}
