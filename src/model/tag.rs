use serde::{Deserialize, Serialize};

/// A tag as the backend stores it. Listable and creatable on its own;
/// not associated with tasks in any client flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
