use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Workflow status — one board column per variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Backlog,
    Today,
    InProgress,
    Review,
    Done,
}

impl Status {
    /// Fixed board order; every column exists even when empty
    pub const ALL: [Status; 5] = [
        Status::Backlog,
        Status::Today,
        Status::InProgress,
        Status::Review,
        Status::Done,
    ];

    /// Column header / selector label
    pub fn label(self) -> &'static str {
        match self {
            Status::Backlog => "Backlog",
            Status::Today => "Today",
            Status::InProgress => "In Progress",
            Status::Review => "Review",
            Status::Done => "Done",
        }
    }

    /// The wire spelling (also what the CLI accepts)
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Backlog => "backlog",
            Status::Today => "today",
            Status::InProgress => "in-progress",
            Status::Review => "review",
            Status::Done => "done",
        }
    }

    /// Next status in board order, wrapping at the end
    pub fn cycle_next(self) -> Status {
        match self {
            Status::Backlog => Status::Today,
            Status::Today => Status::InProgress,
            Status::InProgress => Status::Review,
            Status::Review => Status::Done,
            Status::Done => Status::Backlog,
        }
    }

    /// Previous status in board order, wrapping at the start
    pub fn cycle_prev(self) -> Status {
        match self {
            Status::Backlog => Status::Done,
            Status::Today => Status::Backlog,
            Status::InProgress => Status::Today,
            Status::Review => Status::InProgress,
            Status::Done => Status::Review,
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(Status::Backlog),
            "today" => Ok(Status::Today),
            "in-progress" => Ok(Status::InProgress),
            "review" => Ok(Status::Review),
            "done" => Ok(Status::Done),
            _ => Err(format!(
                "unknown status '{}' (expected backlog, today, in-progress, review or done)",
                s
            )),
        }
    }
}

/// Subjective effort rating; display-only, no workflow semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    pub fn label(self) -> &'static str {
        match self {
            EnergyLevel::Low => "Low Effort",
            EnergyLevel::Medium => "Medium Effort",
            EnergyLevel::High => "High Effort",
        }
    }

    /// The marker shown on a card
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyLevel::Low => "\u{2582}",
            EnergyLevel::Medium => "\u{2584}",
            EnergyLevel::High => "\u{2588}",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        }
    }

    pub fn cycle_next(self) -> EnergyLevel {
        match self {
            EnergyLevel::Low => EnergyLevel::Medium,
            EnergyLevel::Medium => EnergyLevel::High,
            EnergyLevel::High => EnergyLevel::Low,
        }
    }

    pub fn cycle_prev(self) -> EnergyLevel {
        match self {
            EnergyLevel::Low => EnergyLevel::High,
            EnergyLevel::Medium => EnergyLevel::Low,
            EnergyLevel::High => EnergyLevel::Medium,
        }
    }
}

impl std::str::FromStr for EnergyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(EnergyLevel::Low),
            "medium" => Ok(EnergyLevel::Medium),
            "high" => Ok(EnergyLevel::High),
            _ => Err(format!(
                "unknown energy level '{}' (expected low, medium or high)",
                s
            )),
        }
    }
}

/// A task as the backend stores it.
///
/// `id`, `created_at` and `updated_at` are assigned and maintained by the
/// backend; the client never writes them. Wire field names are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Status,
    pub energy_level: EnergyLevel,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(default)]
    pub tags: Vec<String>,
}
