use crate::error::StoreError;
use crate::types::{Todo, TodoList};
use std::collections::HashMap;

/// Storage contract consumed by the transport adapters.
///
/// One in-memory implementation ships with the engine; the trait leaves room
/// for an alternative backing store without requiring one.
pub trait TodoStore {
    /// Validates the title, assigns the next list id and stores the list.
    /// Returns a copy of the stored list.
    fn insert_list(&mut self, list: TodoList) -> Result<TodoList, StoreError>;

    /// All stored lists. Map-backed: the order is not significant.
    fn all_lists(&self) -> Vec<TodoList>;

    fn list_by_id(&self, id: u32) -> Result<TodoList, StoreError>;

    /// Replaces the stored list in place. Existence is checked before the
    /// title; the id is immutable across the update.
    fn update_list(&mut self, list: TodoList) -> Result<(), StoreError>;

    /// Removes the list entry. Does not cascade to the list's todos or its
    /// membership entry; see the module tests pinning that behavior.
    fn delete_list_by_id(&mut self, id: u32) -> Result<(), StoreError>;

    /// Validates the owning list exists, then the description, then assigns
    /// the next todo id and records the membership. Returns a copy.
    fn insert_todo(&mut self, todo: Todo) -> Result<Todo, StoreError>;

    fn todo_by_id(&self, id: u32) -> Result<Todo, StoreError>;

    /// Todos of a list in membership order. A list with no membership entry
    /// yields an empty vec, not an error.
    fn todos_by_list_id(&self, list_id: u32) -> Result<Vec<Todo>, StoreError>;

    /// Replaces the stored todo in place. The owning list id is carried from
    /// the input and not re-validated on update, only on insert.
    fn update_todo(&mut self, todo: Todo) -> Result<(), StoreError>;

    /// Removes the todo keyed by `todo.id`, then drops its id from the
    /// membership entry of `todo.list_id` if one exists.
    fn delete_todo(&mut self, todo: &Todo) -> Result<(), StoreError>;
}

/// In-memory storage engine.
///
/// Two monotonically increasing counters, two entity tables and the
/// list-to-todo membership index. Identifiers start at zero and are never
/// reused. All multi-step mutations are unguarded: embedders must serialize
/// access, e.g. behind a mutex in the adapter layer.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    next_list_id: u32,
    next_todo_id: u32,
    lists: HashMap<u32, TodoList>,
    todos: HashMap<u32, Todo>,
    // Maps each list id to the ordered ids of its todos. An entry is dropped
    // entirely once its last todo is deleted.
    membership: HashMap<u32, Vec<u32>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored lists. Exposed for state assertions in tests.
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Number of stored todos.
    pub fn todo_count(&self) -> usize {
        self.todos.len()
    }

    /// Whether any membership entry exists for the given list.
    pub fn has_membership(&self, list_id: u32) -> bool {
        self.membership.contains_key(&list_id)
    }
}

impl TodoStore for MemoryStore {
    fn insert_list(&mut self, mut list: TodoList) -> Result<TodoList, StoreError> {
        if list.title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        list.id = self.next_list_id;
        self.lists.insert(list.id, list.clone());
        self.next_list_id += 1;
        Ok(list)
    }

    fn all_lists(&self) -> Vec<TodoList> {
        self.lists.values().cloned().collect()
    }

    fn list_by_id(&self, id: u32) -> Result<TodoList, StoreError> {
        self.lists.get(&id).cloned().ok_or(StoreError::ListNotFound)
    }

    fn update_list(&mut self, list: TodoList) -> Result<(), StoreError> {
        if !self.lists.contains_key(&list.id) {
            return Err(StoreError::ListNotFound);
        }
        if list.title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        self.lists.insert(list.id, list);
        Ok(())
    }

    fn delete_list_by_id(&mut self, id: u32) -> Result<(), StoreError> {
        if !self.lists.contains_key(&id) {
            return Err(StoreError::ListNotFound);
        }

        self.lists.remove(&id);
        Ok(())
    }

    fn insert_todo(&mut self, mut todo: Todo) -> Result<Todo, StoreError> {
        if !self.lists.contains_key(&todo.list_id) {
            return Err(StoreError::ListNotFound);
        }
        if todo.description.is_empty() {
            return Err(StoreError::EmptyDescription);
        }

        todo.id = self.next_todo_id;
        self.membership.entry(todo.list_id).or_default().push(todo.id);
        self.todos.insert(todo.id, todo.clone());
        self.next_todo_id += 1;
        Ok(todo)
    }

    fn todo_by_id(&self, id: u32) -> Result<Todo, StoreError> {
        self.todos.get(&id).cloned().ok_or(StoreError::TodoNotFound)
    }

    fn todos_by_list_id(&self, list_id: u32) -> Result<Vec<Todo>, StoreError> {
        if !self.lists.contains_key(&list_id) {
            return Err(StoreError::ListNotFound);
        }

        let ids = match self.membership.get(&list_id) {
            Some(ids) => ids,
            None => return Ok(Vec::new()),
        };

        Ok(ids
            .iter()
            .filter_map(|id| self.todos.get(id).cloned())
            .collect())
    }

    fn update_todo(&mut self, todo: Todo) -> Result<(), StoreError> {
        if !self.todos.contains_key(&todo.id) {
            return Err(StoreError::TodoNotFound);
        }
        if todo.description.is_empty() {
            return Err(StoreError::EmptyDescription);
        }

        self.todos.insert(todo.id, todo);
        Ok(())
    }

    fn delete_todo(&mut self, todo: &Todo) -> Result<(), StoreError> {
        if !self.todos.contains_key(&todo.id) {
            return Err(StoreError::TodoNotFound);
        }
        self.todos.remove(&todo.id);

        // A list without a membership entry is not an error here: the entry
        // may already have been dropped or never created.
        if let Some(ids) = self.membership.get_mut(&todo.list_id) {
            ids.retain(|id| *id != todo.id);
            if ids.is_empty() {
                self.membership.remove(&todo.list_id);
            }
        }

        Ok(())
    }
}
