use thiserror::Error;

/// Storage engine errors.
///
/// Every failing operation reports exactly one of these kinds; a failed
/// validation or lookup leaves the engine state untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo list title is empty")]
    EmptyTitle,

    #[error("todo item description is empty")]
    EmptyDescription,

    #[error("todo list not found")]
    ListNotFound,

    #[error("todo not found")]
    TodoNotFound,
}

impl StoreError {
    /// True for validation failures, as opposed to missing-entity lookups.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyTitle | Self::EmptyDescription)
    }

    /// True when the referenced entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound | Self::TodoNotFound)
    }
}
