// crates/posts-contract/src/request.rs
// ============================================================================
// Module: Posts Requests
// Description: Typed GET requests against the posts collection endpoint.
// Purpose: Build request URLs with correct path and query encoding.
// Dependencies: url
// ============================================================================

//! ## Overview
//! A [`PostsRequest`] either lists the collection (optionally filtered by
//! `userId` and `title`) or fetches a single post by appending its id as a
//! path segment. Query values are percent-encoded with spaces sent as `%20`,
//! matching how browsers and the public endpoint's own links encode them.

use url::Url;
use url::form_urlencoded::byte_serialize;

use crate::error::ContractError;

/// Query parameter name for the user filter.
pub const USER_ID_PARAM: &str = "userId";
/// Query parameter name for the title filter.
pub const TITLE_PARAM: &str = "title";

/// GET request against the posts collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsRequest {
    /// Post id appended as a path segment.
    pub post_id: Option<u64>,
    /// `userId` query filter.
    pub user_id: Option<u64>,
    /// `title` query filter.
    pub title: Option<String>,
}

impl PostsRequest {
    /// Lists the whole collection.
    #[must_use]
    pub fn list() -> Self {
        Self::default()
    }

    /// Fetches one post by id.
    #[must_use]
    pub fn by_id(post_id: u64) -> Self {
        Self {
            post_id: Some(post_id),
            ..Self::default()
        }
    }

    /// Adds a `userId` filter.
    #[must_use]
    pub const fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Adds a `title` filter.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the query pairs in wire order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(user_id) = self.user_id {
            pairs.push((USER_ID_PARAM, user_id.to_string()));
        }
        if let Some(title) = &self.title {
            pairs.push((TITLE_PARAM, title.clone()));
        }
        pairs
    }

    /// Resolves the request against the collection URL.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidUrl`] when the base URL cannot carry
    /// path segments (for example, a `data:` URL).
    pub fn url(&self, base: &Url) -> Result<Url, ContractError> {
        let mut url = base.clone();
        if let Some(post_id) = self.post_id {
            url.path_segments_mut()
                .map_err(|()| ContractError::InvalidUrl(format!("{base} cannot be a base url")))?
                .pop_if_empty()
                .push(&post_id.to_string());
        }
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            let mut query = url.query().unwrap_or_default().to_string();
            for (name, value) in &pairs {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&encode_component(name));
                query.push('=');
                query.push_str(&encode_component(value));
            }
            url.set_query(Some(&query));
        }
        Ok(url)
    }
}

/// Percent-encodes one query component, writing spaces as `%20`.
fn encode_component(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect::<String>().replace('+', "%20")
}
