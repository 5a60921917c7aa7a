use crate::api::http::ApiError;
use crate::api::tasks::{NewTask, TaskPatch, TaskService};
use crate::model::Task;
use crate::store::cache::CachedQuery;

/// The client-side source of truth for the task collection.
///
/// Reads serve from the cache while it is fresh; every mutation that
/// succeeds marks the cache stale so the next read refetches the
/// authoritative list. Nothing is spliced in locally — a detail view
/// wanting immediate feedback applies its own `TaskPatch` to its held
/// copy after a confirmed success.
#[derive(Debug)]
pub struct TaskStore {
    service: TaskService,
    query: CachedQuery<Vec<Task>>,
}

impl TaskStore {
    pub fn new(service: TaskService) -> Self {
        TaskStore {
            service,
            query: CachedQuery::new("tasks"),
        }
    }

    /// Current collection, refetching when the cache is stale.
    /// A failed refetch leaves the cache untouched.
    pub async fn tasks(&mut self) -> Result<&[Task], ApiError> {
        if self.query.is_stale() {
            let tasks = self.service.list().await?;
            self.query.store(tasks);
        }
        Ok(self.query.peek().map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Fresh cached collection without fetching, if there is one
    pub fn cached(&self) -> Option<&[Task]> {
        self.query.read().map(Vec::as_slice)
    }

    pub fn is_stale(&self) -> bool {
        self.query.is_stale()
    }

    /// Force the next read to refetch
    pub fn invalidate(&mut self) {
        self.query.invalidate();
    }

    pub async fn create(&mut self, data: &NewTask) -> Result<Task, ApiError> {
        let task = self.service.create(data).await?;
        self.query.invalidate();
        Ok(task)
    }

    pub async fn update(&mut self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        let task = self.service.update(id, patch).await?;
        self.query.invalidate();
        Ok(task)
    }

    pub async fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        self.service.remove(id).await?;
        self.query.invalidate();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::http::HttpClient;
    use crate::model::{EnergyLevel, Status};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn task_json(id: &str, title: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "status": status,
            "energyLevel": "medium",
            "createdAt": "2025-03-01T10:00:00",
            "updatedAt": "2025-03-01T10:00:00",
            "tags": []
        })
    }

    fn store_for(server: &mockito::Server) -> TaskStore {
        TaskStore::new(TaskService::new(HttpClient::new(server.url())))
    }

    #[tokio::test]
    async fn test_list_serves_from_cache_until_stale() {
        let mut server = mockito::Server::new_async().await;
        let list_mock = server
            .mock("GET", "/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([task_json("1", "Only task", "backlog")]).to_string())
            .expect(1)
            .create_async()
            .await;

        let mut store = store_for(&server);
        assert_eq!(store.tasks().await.unwrap().len(), 1);
        // second read is a cache hit, no second GET
        assert_eq!(store.tasks().await.unwrap().len(), 1);
        assert_eq!(store.cached().map(|t| t.len()), Some(1));
        list_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_marks_cache_stale_and_next_read_refetches() {
        let mut server = mockito::Server::new_async().await;
        let list_mock = server
            .mock("GET", "/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([task_json("1", "Existing", "backlog")]).to_string())
            .expect(2)
            .create_async()
            .await;
        let create_mock = server
            .mock("POST", "/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(task_json("2", "New task", "today").to_string())
            .create_async()
            .await;

        let mut store = store_for(&server);
        store.tasks().await.unwrap();
        assert!(!store.is_stale());

        let created = store
            .create(&NewTask {
                title: "New task".into(),
                description: None,
                status: Status::Today,
                energy_level: EnergyLevel::Medium,
                tags: vec![],
            })
            .await
            .unwrap();
        assert_eq!(created.id, "2");

        // cache is stale, not spliced: the next read goes to the server
        assert!(store.is_stale());
        assert_eq!(store.cached(), None);
        store.tasks().await.unwrap();

        list_mock.assert_async().await;
        create_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_invalidates_only_on_success() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([task_json("1", "Task", "backlog")]).to_string())
            .create_async()
            .await;
        let fail_mock = server
            .mock("PATCH", "/tasks/1")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let mut store = store_for(&server);
        store.tasks().await.unwrap();

        let err = store
            .update("1", &TaskPatch::status(Status::Done))
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.as_u16()), Some(500));

        // failed mutation must not invalidate
        assert!(!store.is_stale());
        fail_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_remove_invalidates_and_refetch_drops_task() {
        let mut server = mockito::Server::new_async().await;
        let first_list = server
            .mock("GET", "/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    task_json("1", "Keep", "backlog"),
                    task_json("2", "Drop", "done"),
                ])
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let mut store = store_for(&server);
        assert_eq!(store.tasks().await.unwrap().len(), 2);
        first_list.assert_async().await;

        let delete_mock = server
            .mock("DELETE", "/tasks/2")
            .with_status(204)
            .create_async()
            .await;
        // after the delete the server no longer returns task 2
        server
            .mock("GET", "/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([task_json("1", "Keep", "backlog")]).to_string())
            .create_async()
            .await;

        store.remove("2").await.unwrap();
        assert!(store.is_stale());

        let tasks = store.tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks.iter().all(|t| t.id != "2"));
        delete_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_failed_refetch_leaves_cache_stale() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/tasks")
            .with_status(503)
            .with_body(r#"{"detail": "maintenance"}"#)
            .create_async()
            .await;

        let mut store = store_for(&server);
        let err = store.tasks().await.unwrap_err();
        assert_eq!(err.to_string(), "maintenance");
        assert!(store.is_stale());
        assert_eq!(store.cached(), None);
    }
}
