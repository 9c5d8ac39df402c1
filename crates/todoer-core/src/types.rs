use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named container of todo items.
///
/// The identifier is assigned by the engine on insert; callers never choose
/// ids for new lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: u32,
    pub title: String,
}

impl TodoList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
        }
    }
}

/// A single task belonging to exactly one list.
///
/// `due_date` is absent by default; an unset due date is represented as
/// `None`, never as a zero timestamp. `labels` is an ordered sequence that
/// may contain duplicates and empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub list_id: u32,
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    pub fn new(list_id: u32, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            list_id,
            description: description.into(),
            comments: String::new(),
            due_date: None,
            labels: Vec::new(),
            done: false,
        }
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}
