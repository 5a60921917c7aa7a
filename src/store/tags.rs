use crate::api::http::ApiError;
use crate::api::tags::TagService;
use crate::model::Tag;
use crate::store::cache::CachedQuery;

/// Cached view of the tag collection. Same list-hook shape as the task
/// store; creation exists for the CLI but no board flow mutates tags.
#[derive(Debug)]
pub struct TagStore {
    service: TagService,
    query: CachedQuery<Vec<Tag>>,
}

impl TagStore {
    pub fn new(service: TagService) -> Self {
        TagStore {
            service,
            query: CachedQuery::new("tags"),
        }
    }

    pub async fn tags(&mut self) -> Result<&[Tag], ApiError> {
        if self.query.is_stale() {
            let tags = self.service.list().await?;
            self.query.store(tags);
        }
        Ok(self.query.peek().map(Vec::as_slice).unwrap_or(&[]))
    }

    pub async fn create(&mut self, name: &str) -> Result<Tag, ApiError> {
        let tag = self.service.create(name).await?;
        self.query.invalidate();
        Ok(tag)
    }
}
