use crate::todo::models::Todo;

// Pure list operations. Every function returns a fresh Vec and leaves its
// input untouched; absent matches degrade to copies or None, never errors.

pub fn add_todo(list: &[Todo], todo: Todo) -> Vec<Todo> {
    let mut next = list.to_vec();
    next.push(todo);
    next
}

pub fn remove_todo(id: u64, list: &[Todo]) -> Vec<Todo> {
    list.iter().filter(|todo| todo.id != id).cloned().collect()
}

pub fn find_by_id(id: u64, list: &[Todo]) -> Option<&Todo> {
    list.iter().find(|todo| todo.id == id)
}

pub fn toggle_todo(todo: &Todo) -> Todo {
    Todo {
        is_complete: !todo.is_complete,
        ..todo.clone()
    }
}

pub fn update_todo(list: &[Todo], updated: Todo) -> Vec<Todo> {
    list.iter()
        .map(|todo| {
            if todo.id == updated.id {
                updated.clone()
            } else {
                todo.clone()
            }
        })
        .collect()
}

pub fn filter_todos(list: &[Todo], route: &str) -> Vec<Todo> {
    match route {
        "/complete" => list.iter().filter(|t| t.is_complete).cloned().collect(),
        "/active" => list.iter().filter(|t| !t.is_complete).cloned().collect(),
        // Root and anything unrecognized show the full list.
        _ => list.to_vec(),
    }
}

/// Next unused id: one past the highest id currently in the list.
pub fn generate_id(list: &[Todo]) -> u64 {
    list.iter().map(|todo| todo.id).max().unwrap_or(0) + 1
}
