use crossterm::event::KeyCode;

use crate::app::{Action, AppState, CardAction, Mode};
use crate::ui::event_card::CardView;

pub fn handle_key(key: KeyCode, state: &mut AppState) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => {
            state.move_event_selection_down();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.move_event_selection_up();
            None
        }
        KeyCode::Char('a') => {
            state.toggle_form();
            None
        }
        KeyCode::Char('x') => selected_card_action(state, CardView::delete_action),
        KeyCode::Char('A') => selected_card_action(state, CardView::archive_action),
        KeyCode::Char('f') => {
            let next = state.category_filter.next();
            state.set_filter(next);
            None
        }
        KeyCode::Char('r') => Some(Action::Reload),
        KeyCode::Char(':') => {
            enter_command_mode(state);
            None
        }
        KeyCode::Char('?') => {
            state.show_help = true;
            None
        }
        _ => None,
    }
}

fn selected_card_action(state: &AppState, action: fn(&CardView) -> CardAction) -> Option<Action> {
    if state.loading {
        return None;
    }
    let event = state.selected_event()?;
    let card = CardView::from_event(event, true);
    Some(action(&card).into())
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}
