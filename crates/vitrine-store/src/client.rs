//! HTTP client for the hosted record store.
//!
//! Every collection lives under `{endpoint}/rest/v1/{collection}`.  The
//! access key is sent both as the `apikey` header and as a bearer token,
//! which is what the hosting platform expects from untrusted clients.
//!
//! There is deliberately no retry and no caching here: a failed call is
//! reported once and the caller decides whether to degrade or surface it.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::StoreError;
use crate::query::{Filter, SelectQuery};

/// Client handle for the hosted record store.  Cheap to clone.
#[derive(Clone, Debug)]
pub struct RecordStore {
    http: reqwest::Client,
    endpoint: String,
}

impl RecordStore {
    /// Build a client for the store at `endpoint`, authenticating every
    /// request with `access_key`.
    ///
    /// Fails if the endpoint is not a valid URL or the key cannot be carried
    /// in a header.  Both values are required process configuration; callers
    /// treat a failure here as a startup failure.
    pub fn connect(endpoint: &str, access_key: &str) -> Result<Self, StoreError> {
        Url::parse(endpoint)?;

        let key = HeaderValue::from_str(access_key).map_err(|_| StoreError::InvalidKey)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {access_key}"))
            .map_err(|_| StoreError::InvalidKey)?;
        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_owned(),
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.endpoint, collection)
    }

    /// Fetch rows from `collection`, optionally filtered, ordered and capped.
    pub async fn select<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &SelectQuery,
    ) -> Result<Vec<T>, StoreError> {
        let mut request = self
            .http
            .get(self.collection_url(collection))
            .query(&[("select", "*")]);
        if let Some(filter) = &query.filter {
            request = request.query(&[filter.to_param()]);
        }
        if let Some(order) = &query.order {
            request = request.query(&[("order", order.to_param())]);
        }
        if let Some(limit) = query.limit {
            request = request.query(&[("limit", limit.to_string())]);
        }

        debug!(collection, "select");
        let response = check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// Insert one row and return the store's representation of it, which
    /// carries the assigned id and creation timestamp.
    pub async fn insert<T, R>(&self, collection: &str, row: &T) -> Result<R, StoreError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(collection, "insert");
        let response = self
            .http
            .post(self.collection_url(collection))
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        let response = check(response).await?;
        // The store answers an insert with a one-element array.
        let mut rows: Vec<R> = response.json().await?;
        rows.pop().ok_or(StoreError::EmptyInsert)
    }

    /// Apply a partial update to the row with the given id.
    pub async fn update<T>(&self, collection: &str, id: &str, patch: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        debug!(collection, id, "update");
        let response = self
            .http
            .patch(self.collection_url(collection))
            .query(&[("id", format!("eq.{id}"))])
            .json(patch)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Delete the row with the given id.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        debug!(collection, id, "delete");
        let response = self
            .http
            .delete(self.collection_url(collection))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Count rows in `collection`, optionally restricted by an equality
    /// filter.  Uses the store's exact-count header rather than fetching
    /// the rows themselves.
    pub async fn count(
        &self,
        collection: &str,
        filter: Option<&Filter>,
    ) -> Result<u64, StoreError> {
        let mut request = self
            .http
            .get(self.collection_url(collection))
            .query(&[("select", "id")])
            .header("Prefer", "count=exact")
            .header("Range", "0-0");
        if let Some(filter) = filter {
            request = request.query(&[filter.to_param()]);
        }

        debug!(collection, "count");
        let response = check(request.send().await?).await?;
        response
            .headers()
            .get("content-range")
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range)
            .ok_or(StoreError::MissingCount)
    }
}

/// Pass a successful response through, or drain the body into a
/// [`StoreError::Rejected`].
async fn check(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Rejected {
        status: status.as_u16(),
        body,
    })
}

/// Extract the total from a `content-range` header such as `0-0/57` or `*/0`.
fn parse_content_range(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn content_range_total_is_extracted() {
        assert_eq!(parse_content_range("0-0/57"), Some(57));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("garbage"), None);
    }

    #[test]
    fn endpoint_trailing_slash_is_normalized() {
        let store = RecordStore::connect("https://store.example.com/", "key").unwrap();
        assert_eq!(
            store.collection_url("services"),
            "https://store.example.com/rest/v1/services"
        );
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        assert!(matches!(
            RecordStore::connect("not a url", "key"),
            Err(StoreError::InvalidEndpoint(_))
        ));
    }
}
