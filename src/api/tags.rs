use serde_json::json;

use crate::api::http::{ApiError, HttpClient};
use crate::model::Tag;

/// REST operations on the tag collection
#[derive(Debug, Clone)]
pub struct TagService {
    http: HttpClient,
}

impl TagService {
    pub fn new(http: HttpClient) -> Self {
        TagService { http }
    }

    pub async fn list(&self) -> Result<Vec<Tag>, ApiError> {
        self.http.get("/tags").await
    }

    pub async fn create(&self, name: &str) -> Result<Tag, ApiError> {
        self.http.post("/tags", &json!({ "name": name })).await
    }
}
