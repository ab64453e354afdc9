#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub name: String,
    pub is_complete: bool,
}

impl Todo {
    pub fn new(id: u64, name: impl Into<String>, is_complete: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_complete,
        }
    }
}

/// The list shown on a fresh start.
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "Learn Rust", true),
        Todo::new(2, "Read the ratatui book", false),
        Todo::new(3, "Ship the TUI", false),
    ]
}
