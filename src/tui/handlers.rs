use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Quit
            }
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveSelectionDown,
            KeyCode::Enter | KeyCode::Char(' ') => NormalModeAction::ToggleTodo,
            KeyCode::Char('a') => NormalModeAction::EnterEntryMode,
            KeyCode::Char('d') => NormalModeAction::DeleteTodo,
            KeyCode::Char('1') => NormalModeAction::ShowAll,
            KeyCode::Char('2') => NormalModeAction::ShowActive,
            KeyCode::Char('3') => NormalModeAction::ShowComplete,
            KeyCode::Char('u') => NormalModeAction::Undo,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_entry_mode_key(key_event: KeyEvent) -> EntryModeAction {
        match key_event.code {
            KeyCode::Esc => EntryModeAction::CancelEntry,
            KeyCode::Enter => EntryModeAction::Submit,
            KeyCode::Backspace => EntryModeAction::Backspace,
            KeyCode::Delete => EntryModeAction::Delete,
            KeyCode::Left => EntryModeAction::MoveCursorLeft,
            KeyCode::Right => EntryModeAction::MoveCursorRight,
            KeyCode::Home => EntryModeAction::MoveCursorHome,
            KeyCode::End => EntryModeAction::MoveCursorEnd,
            KeyCode::Char(c) => EntryModeAction::InsertChar(c),
            _ => EntryModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    ToggleTodo,
    EnterEntryMode,
    DeleteTodo,
    ShowAll,
    ShowActive,
    ShowComplete,
    Undo,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum EntryModeAction {
    None,
    CancelEntry,
    Submit,
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_basic_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleTodo);

        let key_event = KeyEvent::from(KeyCode::Char(' '));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleTodo);

        let key_event = KeyEvent::from(KeyCode::Char('a'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::EnterEntryMode);

        let key_event = KeyEvent::from(KeyCode::Char('d'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::DeleteTodo);

        let key_event = KeyEvent::from(KeyCode::Char('u'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Undo);
    }

    #[test]
    fn test_normal_mode_navigation_keys() {
        let key_event = KeyEvent::from(KeyCode::Up);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionUp);

        let key_event = KeyEvent::from(KeyCode::Char('j'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionDown);

        let key_event = KeyEvent::from(KeyCode::Char('k'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionUp);
    }

    #[test]
    fn test_normal_mode_filter_link_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('1'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ShowAll);

        let key_event = KeyEvent::from(KeyCode::Char('2'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ShowActive);

        let key_event = KeyEvent::from(KeyCode::Char('3'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ShowComplete);
    }

    #[test]
    fn test_normal_mode_ctrl_keys() {
        let mut key_event = KeyEvent::from(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);
    }

    #[test]
    fn test_entry_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_entry_mode_key(key_event), EntryModeAction::CancelEntry);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_entry_mode_key(key_event), EntryModeAction::Submit);

        let key_event = KeyEvent::from(KeyCode::Backspace);
        assert_eq!(KeyHandler::handle_entry_mode_key(key_event), EntryModeAction::Backspace);

        let key_event = KeyEvent::from(KeyCode::Delete);
        assert_eq!(KeyHandler::handle_entry_mode_key(key_event), EntryModeAction::Delete);

        let key_event = KeyEvent::from(KeyCode::Home);
        assert_eq!(KeyHandler::handle_entry_mode_key(key_event), EntryModeAction::MoveCursorHome);

        let key_event = KeyEvent::from(KeyCode::End);
        assert_eq!(KeyHandler::handle_entry_mode_key(key_event), EntryModeAction::MoveCursorEnd);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_entry_mode_key(key_event), EntryModeAction::InsertChar('x'));
    }

    #[test]
    fn test_entry_mode_captures_normal_mode_keys_as_text() {
        // Keys that mean something in normal mode are plain characters here
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_entry_mode_key(key_event), EntryModeAction::InsertChar('q'));

        let key_event = KeyEvent::from(KeyCode::Char('1'));
        assert_eq!(KeyHandler::handle_entry_mode_key(key_event), EntryModeAction::InsertChar('1'));
    }

    #[test]
    fn test_help_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('?'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::None);
    }
}
