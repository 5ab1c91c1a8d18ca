use std::marker::PhantomData;

use reqwest::Response;
use serde::de::DeserializeOwned;

use super::error::ClientError;
use crate::item::core::crud::Record;

/// Typed HTTP client for one resource collection (`{base}/api/{collection}`).
pub struct ResourceClient<R> {
    http: reqwest::Client,
    base_url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> ResourceClient<R> {
    /// Client for the server at `base_url` (e.g. `http://127.0.0.1:3000`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Client sharing an existing connection pool.
    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            _record: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/{}", self.base_url, R::COLLECTION)
    }

    fn member_url(&self, id: u64) -> String {
        format!("{}/api/{}/{id}", self.base_url, R::COLLECTION)
    }

    /// `GET /api/{collection}`
    pub async fn list(&self) -> Result<Vec<R>, ClientError> {
        let resp = self.http.get(self.collection_url()).send().await?;
        decode(resp).await
    }

    /// `POST /api/{collection}`
    pub async fn create(&self, fields: &R::Create) -> Result<R, ClientError> {
        let resp = self
            .http
            .post(self.collection_url())
            .json(fields)
            .send()
            .await?;
        decode(resp).await
    }

    /// `PUT /api/{collection}/:id`
    pub async fn update(&self, id: u64, fields: &R::Update) -> Result<R, ClientError> {
        let resp = self.http.put(self.member_url(id)).json(fields).send().await?;
        decode(resp).await
    }

    /// `DELETE /api/{collection}/:id`
    pub async fn delete(&self, id: u64) -> Result<(), ClientError> {
        let resp = self.http.delete(self.member_url(id)).send().await?;
        check_status(resp).await.map(drop)
    }
}

async fn check_status(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let bytes = check_status(resp).await?.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::entities::{Ticket, TodoItem};

    #[test]
    fn test_urls_follow_collection() {
        let items = ResourceClient::<TodoItem>::new("http://localhost:3000/");
        assert_eq!(items.collection_url(), "http://localhost:3000/api/items");
        assert_eq!(items.member_url(4), "http://localhost:3000/api/items/4");

        let tickets = ResourceClient::<Ticket>::new("http://localhost:3000");
        assert_eq!(tickets.collection_url(), "http://localhost:3000/api/tickets");
    }
}
