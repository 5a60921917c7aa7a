use serde::Serialize;

use crate::api::http::{ApiError, HttpClient};
use crate::model::{EnergyLevel, Status, Task};

/// Payload for POST /tasks
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    pub energy_level: EnergyLevel,
    pub tags: Vec<String>,
}

/// Partial payload for PATCH /tasks/{id}; unset fields are omitted from
/// the JSON so the backend leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<EnergyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl TaskPatch {
    pub fn status(status: Status) -> Self {
        TaskPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn energy(level: EnergyLevel) -> Self {
        TaskPatch {
            energy_level: Some(level),
            ..Default::default()
        }
    }

    /// Apply this patch to a held task copy — the optimistic local overlay
    /// a detail view shows until the next authoritative refetch.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(level) = self.energy_level {
            task.energy_level = level;
        }
        if let Some(tags) = &self.tags {
            task.tags = tags.clone();
        }
    }
}

/// REST operations on the task collection. Inputs pass through verbatim;
/// errors propagate unmodified from the HTTP client.
#[derive(Debug, Clone)]
pub struct TaskService {
    http: HttpClient,
}

impl TaskService {
    pub fn new(http: HttpClient) -> Self {
        TaskService { http }
    }

    pub async fn list(&self) -> Result<Vec<Task>, ApiError> {
        self.http.get("/tasks").await
    }

    pub async fn get(&self, id: &str) -> Result<Task, ApiError> {
        self.http.get(&format!("/tasks/{}", id)).await
    }

    pub async fn create(&self, data: &NewTask) -> Result<Task, ApiError> {
        self.http.post("/tasks", data).await
    }

    pub async fn update(&self, id: &str, data: &TaskPatch) -> Result<Task, ApiError> {
        self.http.patch(&format!("/tasks/{}", id), data).await
    }

    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("/tasks/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn test_new_task_serializes_camel_case() {
        let data = NewTask {
            title: "Plan sprint".into(),
            description: Some("rough cut".into()),
            status: Status::Today,
            energy_level: EnergyLevel::High,
            tags: vec![],
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "title": "Plan sprint",
                "description": "rough cut",
                "status": "today",
                "energyLevel": "high",
                "tags": []
            })
        );
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        assert_eq!(
            serde_json::to_value(TaskPatch::status(Status::Done)).unwrap(),
            json!({"status": "done"})
        );
        assert_eq!(
            serde_json::to_value(TaskPatch::energy(EnergyLevel::Low)).unwrap(),
            json!({"energyLevel": "low"})
        );
        assert_eq!(
            serde_json::to_value(TaskPatch::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_patch_applies_to_held_copy() {
        let mut task: Task = serde_json::from_value(task_json("1", "Old title", "backlog")).unwrap();

        let patch = TaskPatch {
            status: Some(Status::Review),
            energy_level: Some(EnergyLevel::High),
            ..Default::default()
        };
        patch.apply_to(&mut task);

        assert_eq!(task.status, Status::Review);
        assert_eq!(task.energy_level, EnergyLevel::High);
        // untouched fields survive
        assert_eq!(task.title, "Old title");
        assert_eq!(task.description, None);
    }

    #[tokio::test]
    async fn test_create_posts_payload_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/tasks")
            .match_body(mockito::Matcher::Json(json!({
                "title": "Ship it",
                "description": null,
                "status": "backlog",
                "energyLevel": "medium",
                "tags": []
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(task_json("42", "Ship it", "backlog").to_string())
            .create_async()
            .await;

        let service = TaskService::new(HttpClient::new(server.url()));
        let created = service
            .create(&NewTask {
                title: "Ship it".into(),
                description: None,
                status: Status::Backlog,
                energy_level: EnergyLevel::Medium,
                tags: vec![],
            })
            .await
            .unwrap();

        assert_eq!(created.id, "42");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_patches_by_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/tasks/42")
            .match_body(mockito::Matcher::Json(json!({"status": "done"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(task_json("42", "Ship it", "done").to_string())
            .create_async()
            .await;

        let service = TaskService::new(HttpClient::new(server.url()));
        let updated = service
            .update("42", &TaskPatch::status(Status::Done))
            .await
            .unwrap();

        assert_eq!(updated.status, Status::Done);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_parses_collection() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    task_json("1", "First", "backlog"),
                    task_json("2", "Second", "done"),
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let service = TaskService::new(HttpClient::new(server.url()));
        let tasks = service.list().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "First");
        assert_eq!(tasks[1].status, Status::Done);
    }
}
