use crossterm::event::KeyCode;

use crate::app::{Action, AppState};

pub fn handle_key(key: KeyCode, state: &mut AppState) -> Option<Action> {
    let form = state.event_form.as_mut()?;

    match key {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(c) => form.push_char(c),
        KeyCode::Enter => {
            let outcome = form.submit()?;
            return state.handle_form_outcome(outcome);
        }
        KeyCode::Esc => {
            let outcome = form.cancel();
            return state.handle_form_outcome(outcome);
        }
        _ => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{EventForm, FormField, Mode};
    use crate::calendar::CreateEventData;

    fn setup_state_with_form() -> AppState {
        let mut state = AppState::new();
        state.open_form(EventForm::new());
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(KeyCode::Char(c), state);
        }
    }

    #[test]
    fn tab_moves_to_next_field() {
        let mut state = setup_state_with_form();

        handle_key(KeyCode::Tab, &mut state);

        assert_eq!(state.event_form.as_ref().unwrap().active_field, FormField::Date);
    }

    #[test]
    fn char_appends_to_title_field() {
        let mut state = setup_state_with_form();

        type_text(&mut state, "Hi");

        assert_eq!(state.event_form.as_ref().unwrap().value(FormField::Title), "Hi");
    }

    #[test]
    fn enter_on_complete_form_emits_create() {
        let mut state = setup_state_with_form();
        type_text(&mut state, "Lunch");
        handle_key(KeyCode::Tab, &mut state);
        type_text(&mut state, "2025-05-05");
        handle_key(KeyCode::Tab, &mut state);
        type_text(&mut state, "12:30");

        let action = handle_key(KeyCode::Enter, &mut state);

        assert_eq!(
            action,
            Some(Action::Create(CreateEventData {
                title: "Lunch".to_string(),
                date: "2025-05-05".to_string(),
                time: "12:30".to_string(),
                notes: String::new(),
            }))
        );
        assert!(state.show_form());
        assert_eq!(state.event_form.as_ref().unwrap().value(FormField::Title), "");
    }

    #[test]
    fn enter_on_incomplete_form_shows_errors() {
        let mut state = setup_state_with_form();

        let action = handle_key(KeyCode::Enter, &mut state);

        assert_eq!(action, None);
        assert!(state.event_form.as_ref().unwrap().has_errors());
    }

    #[test]
    fn esc_closes_the_form() {
        let mut state = setup_state_with_form();
        type_text(&mut state, "Draft");

        assert_eq!(handle_key(KeyCode::Esc, &mut state), None);

        assert!(!state.show_form());
        assert_eq!(state.mode, Mode::Normal);
    }
}
