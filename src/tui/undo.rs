use crate::todo::models::Todo;

pub struct UndoManager {
    undo_stack: Vec<Vec<Todo>>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
        }
    }

    pub fn save_state(&mut self, todos: Vec<Todo>) {
        self.undo_stack.push(todos);

        // Limit undo stack to 20 snapshots
        if self.undo_stack.len() > 20 {
            self.undo_stack.remove(0);
        }
    }

    pub fn undo(&mut self) -> Option<Vec<Todo>> {
        self.undo_stack.pop()
    }
}
