//! Keybindings for the grid and the bulk-select popover.

use artgrid_core::{AppViewModel, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    PrevPage,
    NextPage,
    MoveUp,
    MoveDown,
    ToggleRow,
    TogglePage,
    ClearSelection,
    TogglePopover,
    CountInput(char),
    CountBackspace,
    ConfirmBulkSelect,
    Refresh,
}

/// Map a key press. While the popover is open, keys edit the count instead.
pub fn map_key(event: KeyEvent, popover_open: bool) -> Option<KeyAction> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;
    if kind != KeyEventKind::Press {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            KeyCode::Char('r') => Some(KeyAction::Refresh),
            _ => None,
        };
    }

    if popover_open {
        return match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => Some(KeyAction::CountInput(c)),
            KeyCode::Backspace => Some(KeyAction::CountBackspace),
            KeyCode::Enter => Some(KeyAction::ConfirmBulkSelect),
            KeyCode::Esc => Some(KeyAction::TogglePopover),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => Some(KeyAction::PrevPage),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => Some(KeyAction::NextPage),
        KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::MoveDown),
        KeyCode::Char(' ') => Some(KeyAction::ToggleRow),
        KeyCode::Char('a') => Some(KeyAction::TogglePage),
        KeyCode::Char('c') => Some(KeyAction::ClearSelection),
        KeyCode::Char('s') => Some(KeyAction::TogglePopover),
        KeyCode::Char('r') => Some(KeyAction::Refresh),
        _ => None,
    }
}

/// Translate an action into a core message against the current view.
///
/// `Quit` is handled by the caller and never produces a message.
pub fn action_to_msg(action: KeyAction, view: &AppViewModel) -> Option<Msg> {
    match action {
        KeyAction::Quit => None,
        KeyAction::PrevPage => Some(Msg::PrevPage),
        KeyAction::NextPage => Some(Msg::NextPage),
        KeyAction::MoveUp => Some(Msg::CursorUp),
        KeyAction::MoveDown => Some(Msg::CursorDown),
        KeyAction::ToggleRow => view
            .rows
            .get(view.cursor)
            .map(|row| Msg::RowToggled(row.record.clone())),
        KeyAction::TogglePage => Some(Msg::PageSelectionToggled),
        KeyAction::ClearSelection => Some(Msg::SelectionCleared),
        KeyAction::TogglePopover => Some(Msg::BulkSelectToggled),
        KeyAction::CountInput(c) => {
            let mut text = view.pending_input.clone();
            text.push(c);
            Some(Msg::PendingCountChanged(text))
        }
        KeyAction::CountBackspace => {
            let mut text = view.pending_input.clone();
            text.pop();
            Some(Msg::PendingCountChanged(text))
        }
        KeyAction::ConfirmBulkSelect => Some(Msg::BulkSelectConfirmed),
        KeyAction::Refresh => Some(Msg::Refresh),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artgrid_core::{Artwork, ArtworkRowView};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn grid_keys() {
        assert_eq!(map_key(press(KeyCode::Right), false), Some(KeyAction::NextPage));
        assert_eq!(map_key(press(KeyCode::Char('h')), false), Some(KeyAction::PrevPage));
        assert_eq!(map_key(press(KeyCode::Char(' ')), false), Some(KeyAction::ToggleRow));
        assert_eq!(map_key(press(KeyCode::Char('s')), false), Some(KeyAction::TogglePopover));
        assert_eq!(map_key(press(KeyCode::Char('7')), false), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), false),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn popover_captures_count_keys() {
        assert_eq!(map_key(press(KeyCode::Char('7')), true), Some(KeyAction::CountInput('7')));
        assert_eq!(map_key(press(KeyCode::Char('-')), true), Some(KeyAction::CountInput('-')));
        assert_eq!(map_key(press(KeyCode::Char('q')), true), None);
        assert_eq!(map_key(press(KeyCode::Enter), true), Some(KeyAction::ConfirmBulkSelect));
        assert_eq!(map_key(press(KeyCode::Esc), true), Some(KeyAction::TogglePopover));
    }

    #[test]
    fn releases_are_ignored() {
        let mut event = press(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event, false), None);
    }

    #[test]
    fn count_edits_build_on_current_input() {
        let view = AppViewModel {
            pending_input: "1".to_string(),
            ..AppViewModel::default()
        };
        assert_eq!(
            action_to_msg(KeyAction::CountInput('5'), &view),
            Some(Msg::PendingCountChanged("15".to_string()))
        );
        assert_eq!(
            action_to_msg(KeyAction::CountBackspace, &view),
            Some(Msg::PendingCountChanged(String::new()))
        );
    }

    #[test]
    fn toggle_row_uses_record_under_cursor() {
        let record = |id| Artwork {
            id,
            ..Artwork::default()
        };
        let view = AppViewModel {
            rows: vec![
                ArtworkRowView {
                    record: record(1),
                    selected: false,
                },
                ArtworkRowView {
                    record: record(2),
                    selected: true,
                },
            ],
            cursor: 1,
            ..AppViewModel::default()
        };
        assert_eq!(
            action_to_msg(KeyAction::ToggleRow, &view),
            Some(Msg::RowToggled(record(2)))
        );
        assert_eq!(
            action_to_msg(KeyAction::ToggleRow, &AppViewModel::default()),
            None
        );
    }
}
