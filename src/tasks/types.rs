//! Types for task operations

use serde::{Deserialize, Serialize};

/// A task, as owned and returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// The task ID
    pub id: i64,

    /// ID of the owning user
    #[serde(rename = "user_id")]
    pub user_id: String,

    /// The task title
    pub title: String,

    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the task is completed
    pub completed: bool,

    /// The creation time
    #[serde(rename = "created_at")]
    pub created_at: String,

    /// The update time
    #[serde(rename = "updated_at")]
    pub updated_at: String,
}

/// Request body for creating a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreate {
    /// The task title
    pub title: String,

    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update for an existing task; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New completion state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Task listing with aggregate counts
///
/// The counts are computed by the backend and trusted as returned; the
/// client never recomputes them from the task list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskListResponse {
    /// The tasks matching the requested filter
    pub tasks: Vec<Task>,

    /// Total number of tasks for the user
    pub total: i64,

    /// Number of completed tasks
    pub completed: i64,

    /// Number of pending tasks
    pub pending: i64,
}

/// Listing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    /// The query-string value for this filter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}
