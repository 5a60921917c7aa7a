use serde::Serialize;

use crate::model::{Status, Task};

/// A derived board column: the tasks carrying one status, in collection
/// order. Never persisted or mutated — recomputed from the flat task
/// collection on every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column<'a> {
    #[serde(rename = "id")]
    pub status: Status,
    pub title: &'static str,
    pub tasks: Vec<&'a Task>,
}

/// Partition the flat collection into the five fixed columns.
///
/// Pure and deterministic: every task lands in exactly one column, the
/// column order is always `Status::ALL`, and each column preserves the
/// collection's relative order.
pub fn partition(tasks: &[Task]) -> [Column<'_>; 5] {
    Status::ALL.map(|status| Column {
        status,
        title: status.label(),
        tasks: tasks.iter().filter(|t| t.status == status).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnergyLevel;
    use pretty_assertions::assert_eq;

    fn task(id: &str, status: Status) -> Task {
        Task {
            id: id.into(),
            title: format!("Task {}", id),
            description: None,
            status,
            energy_level: EnergyLevel::Medium,
            created_at: chrono::NaiveDateTime::default(),
            updated_at: chrono::NaiveDateTime::default(),
            tags: vec![],
        }
    }

    #[test]
    fn test_partition_is_total_and_exclusive() {
        let tasks = vec![
            task("1", Status::Done),
            task("2", Status::Backlog),
            task("3", Status::InProgress),
            task("4", Status::Backlog),
            task("5", Status::Review),
        ];
        let columns = partition(&tasks);

        // every task appears in exactly one column
        let placed: usize = columns.iter().map(|c| c.tasks.len()).sum();
        assert_eq!(placed, tasks.len());
        for column in &columns {
            for t in &column.tasks {
                assert_eq!(t.status, column.status);
            }
        }
    }

    #[test]
    fn test_column_order_is_fixed() {
        let columns = partition(&[]);
        let order: Vec<Status> = columns.iter().map(|c| c.status).collect();
        assert_eq!(order, Status::ALL.to_vec());

        // all five exist even with no occupants
        assert!(columns.iter().all(|c| c.tasks.is_empty()));
        assert_eq!(columns[2].title, "In Progress");
    }

    #[test]
    fn test_columns_preserve_relative_order() {
        let tasks = vec![
            task("a", Status::Today),
            task("b", Status::Backlog),
            task("c", Status::Today),
            task("d", Status::Today),
        ];
        let columns = partition(&tasks);
        let today: Vec<&str> = columns[1].tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(today, vec!["a", "c", "d"]);
    }
}
