use crate::todo::helpers::{
    add_todo, filter_todos, find_by_id, generate_id, remove_todo, toggle_todo, update_todo,
};
use crate::todo::models::Todo;
use crate::tui::handlers::{EntryModeAction, HelpModeAction, KeyHandler, NormalModeAction};
use crate::tui::input::EntryState;
use crate::tui::router::Router;
use crate::tui::undo::UndoManager;
use anyhow::Result;
use crossterm::event::KeyEvent;

/// Owns the todo collection and all per-session UI state. Every mutation of
/// `todos` goes through the pure helpers and replaces the whole Vec.
pub struct App {
    pub todos: Vec<Todo>,
    pub router: Router,
    pub entry: EntryState,
    pub error_message: Option<String>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub should_quit: bool,
    pub help_mode: bool,
    undo: UndoManager,
}

impl App {
    pub fn new(todos: Vec<Todo>, location: &str) -> Self {
        Self {
            todos,
            router: Router::new(location),
            entry: EntryState::new(),
            error_message: None,
            selected_index: 0,
            scroll_offset: 0,
            should_quit: false,
            help_mode: false,
            undo: UndoManager::new(),
        }
    }

    /// The subset shown for the current route, in original order.
    pub fn visible_todos(&self) -> Vec<Todo> {
        filter_todos(&self.todos, self.router.route())
    }

    pub fn total_items(&self) -> usize {
        self.todos.len()
    }

    pub fn completed_items(&self) -> usize {
        self.todos.iter().filter(|t| t.is_complete).count()
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event)
        } else if self.entry.active {
            self.handle_entry_mode_key(key_event)
        } else {
            self.handle_normal_mode_key(key_event)
        }
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::MoveSelectionUp => self.move_selection_up(),
            NormalModeAction::MoveSelectionDown => self.move_selection_down(),
            NormalModeAction::ToggleTodo => self.toggle_selected_todo(),
            NormalModeAction::EnterEntryMode => self.entry.activate(),
            NormalModeAction::DeleteTodo => self.delete_selected_todo(),
            NormalModeAction::ShowAll => self.navigate_to("/"),
            NormalModeAction::ShowActive => self.navigate_to("/active"),
            NormalModeAction::ShowComplete => self.navigate_to("/complete"),
            NormalModeAction::Undo => self.undo(),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::None => {}
        }
        Ok(())
    }

    fn handle_entry_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_entry_mode_key(key_event) {
            EntryModeAction::CancelEntry => {
                self.entry.clear();
                self.entry.deactivate();
                self.error_message = None;
            }
            EntryModeAction::Submit => self.submit_entry(),
            EntryModeAction::Backspace => self.entry.backspace(),
            EntryModeAction::Delete => self.entry.delete(),
            EntryModeAction::MoveCursorLeft => self.entry.move_cursor_left(),
            EntryModeAction::MoveCursorRight => self.entry.move_cursor_right(),
            EntryModeAction::MoveCursorHome => self.entry.move_cursor_home(),
            EntryModeAction::MoveCursorEnd => self.entry.move_cursor_end(),
            EntryModeAction::InsertChar(c) => self.entry.insert_char(c),
            EntryModeAction::None => {}
        }
        Ok(())
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) -> Result<()> {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => self.help_mode = false,
            HelpModeAction::None => {}
        }
        Ok(())
    }

    /// Appends the entry text as a new incomplete todo, or surfaces an error
    /// when the entry is empty. A successful submit clears both the entry
    /// text and any previous error; entry mode stays active so several todos
    /// can be added in a row.
    pub fn submit_entry(&mut self) {
        if self.entry.text.is_empty() {
            self.error_message = Some("Please supply a todo name".to_string());
            return;
        }

        self.undo.save_state(self.todos.clone());
        let new_id = generate_id(&self.todos);
        let new_todo = Todo::new(new_id, self.entry.text.clone(), false);
        self.todos = add_todo(&self.todos, new_todo);
        self.entry.clear();
        self.error_message = None;
    }

    /// Flips completion of the highlighted item. Selection indexes the
    /// visible (route-filtered) list, so the id is resolved there first.
    pub fn toggle_selected_todo(&mut self) {
        let visible = self.visible_todos();
        let Some(selected) = visible.get(self.selected_index) else {
            return;
        };
        if let Some(todo) = find_by_id(selected.id, &self.todos) {
            self.undo.save_state(self.todos.clone());
            let toggled = toggle_todo(todo);
            self.todos = update_todo(&self.todos, toggled);
            self.clamp_selection();
        }
    }

    pub fn delete_selected_todo(&mut self) {
        let visible = self.visible_todos();
        let Some(selected) = visible.get(self.selected_index) else {
            return;
        };
        self.undo.save_state(self.todos.clone());
        self.todos = remove_todo(selected.id, &self.todos);
        self.clamp_selection();
    }

    pub fn navigate_to(&mut self, route: &str) {
        self.router.handle_link_click(route);
        self.clamp_selection();
    }

    fn undo(&mut self) {
        if let Some(todos) = self.undo.undo() {
            self.todos = todos;
            self.clamp_selection();
        }
    }

    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.update_scroll();
        }
    }

    fn move_selection_down(&mut self) {
        if self.selected_index < self.visible_todos().len().saturating_sub(1) {
            self.selected_index += 1;
            self.update_scroll();
        }
    }

    // Keep the selection inside the visible list after it shrinks.
    fn clamp_selection(&mut self) {
        let max = self.visible_todos().len().saturating_sub(1);
        if self.selected_index > max {
            self.selected_index = max;
        }
        self.update_scroll();
    }

    fn update_scroll(&mut self) {
        // Simple scroll logic - keep selected item visible
        const VISIBLE_ITEMS: usize = 20;

        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + VISIBLE_ITEMS {
            self.scroll_offset = self.selected_index.saturating_sub(VISIBLE_ITEMS - 1);
        }
    }
}
