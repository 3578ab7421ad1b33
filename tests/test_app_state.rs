// ABOUTME: Integration tests for the TUI state machine driven through the
// public event handler, without any network

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use linkdeck::api::RemoteOption;
use linkdeck::app::state::{AppState, WizardField};
use linkdeck::app::EventHandler;
use linkdeck::config::AppConfig;
use linkdeck::models::Company;
use linkdeck::wizard::FetchedOptions;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(state: &mut AppState, code: KeyCode) {
    if let Some(event) = EventHandler::handle_key_event(key(code), state) {
        EventHandler::process_event(event, state);
    }
}

fn roster() -> Vec<Company> {
    vec![
        Company {
            id: 1,
            name: "Acme".to_string(),
            created_at: None,
            monday_connected: false,
        },
        Company {
            id: 2,
            name: "Globex".to_string(),
            created_at: None,
            monday_connected: true,
        },
    ]
}

#[test]
fn test_wizard_opens_from_roster_and_token_typing_flows_to_controller() {
    let mut state = AppState::new(AppConfig::default());
    state.set_companies(roster());

    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);

    let wizard = state.monday_wizard.as_ref().expect("wizard opens on Enter");
    assert_eq!(wizard.session.company_id(), 2);

    for c in "tok123".chars() {
        press(&mut state, KeyCode::Char(c));
    }
    press(&mut state, KeyCode::Enter);

    let wizard = state.monday_wizard.as_mut().unwrap();
    assert_eq!(wizard.session.api_token(), "tok123");
    assert_eq!(wizard.focus, WizardField::Workspace);
    assert_eq!(wizard.session.take_pending_requests().len(), 1);
}

#[test]
fn test_option_selection_walks_the_cascade() {
    let mut state = AppState::new(AppConfig::default());
    state.set_companies(roster());
    press(&mut state, KeyCode::Enter);
    for c in "tok123".chars() {
        press(&mut state, KeyCode::Char(c));
    }
    press(&mut state, KeyCode::Enter);

    // Resolve the workspace lookup out of band, as the app tick would.
    {
        let wizard = state.monday_wizard.as_mut().unwrap();
        let request = wizard.session.take_pending_requests().pop().unwrap();
        wizard.session.apply_fetch(
            &request,
            Ok(FetchedOptions::Workspaces(vec![
                RemoteOption::new("w1", "Main"),
                RemoteOption::new("w2", "Side"),
            ])),
        );
    }

    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);

    let wizard = state.monday_wizard.as_ref().unwrap();
    assert_eq!(wizard.session.workspace_id(), Some("w2"));
    assert_eq!(wizard.focus, WizardField::Board);
}

#[test]
fn test_cancelling_wizard_returns_to_roster_with_nothing_staged() {
    let mut state = AppState::new(AppConfig::default());
    state.set_companies(roster());
    press(&mut state, KeyCode::Enter);
    for c in "secret".chars() {
        press(&mut state, KeyCode::Char(c));
    }

    press(&mut state, KeyCode::Esc);

    assert!(state.monday_wizard.is_none());
    assert!(state.pending_connect.is_none());
    assert!(!state.should_quit, "Esc in the wizard must not quit the app");

    // A re-opened wizard starts from scratch.
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.monday_wizard.as_ref().unwrap().token_input, "");
}

#[test]
fn test_premature_connect_stages_nothing() {
    let mut state = AppState::new(AppConfig::default());
    state.set_companies(roster());
    press(&mut state, KeyCode::Enter);

    // Jump straight to the Connect button and press Enter.
    for _ in 0..6 {
        press(&mut state, KeyCode::Tab);
    }
    assert_eq!(state.monday_wizard.as_ref().unwrap().focus, WizardField::Connect);
    press(&mut state, KeyCode::Enter);

    assert!(state.pending_connect.is_none());
    assert!(
        !state.get_current_notifications().is_empty(),
        "the user should see why the connect was refused"
    );
}
