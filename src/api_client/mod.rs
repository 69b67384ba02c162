mod api_error;
mod client;
mod models;
mod payload;

pub use api_error::ApiError;
pub use client::{ApiClient, CmsApi};
#[cfg(test)]
pub use client::MockCmsApi;
pub use models::*;
pub use payload::{PostDraft, PostFilter};
