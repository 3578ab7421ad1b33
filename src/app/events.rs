// ABOUTME: Event handling system for keyboard input and app actions

#![allow(dead_code)]

use crate::app::state::{AppState, WizardField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    RefreshCompanies,
    NextCompany,
    PreviousCompany,
    OpenWizard,
    // Wizard modal events
    WizardCancel,
    WizardNextField,
    WizardPreviousField,
    WizardCursorUp,
    WizardCursorDown,
    WizardApply,
    WizardInputChar(char),
    WizardBackspace,
}

pub struct EventHandler;

impl EventHandler {
    /// Translate a key press into an app event for the current state.
    pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.monday_wizard.is_some() {
            return Self::handle_wizard_key(key, state);
        }

        if state.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    Some(AppEvent::ToggleHelp)
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::Quit)
            }
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('r') => Some(AppEvent::RefreshCompanies),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::NextCompany),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::PreviousCompany),
            KeyCode::Enter | KeyCode::Char('m') => Some(AppEvent::OpenWizard),
            _ => None,
        }
    }

    fn handle_wizard_key(key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let token_focused = state
            .monday_wizard
            .as_ref()
            .is_some_and(|w| w.focus == WizardField::Token);

        match key.code {
            KeyCode::Esc => Some(AppEvent::WizardCancel),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::WizardCancel)
            }
            KeyCode::Tab => Some(AppEvent::WizardNextField),
            KeyCode::BackTab => Some(AppEvent::WizardPreviousField),
            KeyCode::Up => Some(AppEvent::WizardCursorUp),
            KeyCode::Down => Some(AppEvent::WizardCursorDown),
            KeyCode::Enter => Some(AppEvent::WizardApply),
            KeyCode::Backspace if token_focused => Some(AppEvent::WizardBackspace),
            KeyCode::Char(c) if token_focused => Some(AppEvent::WizardInputChar(c)),
            _ => None,
        }
    }

    /// Apply an app event to the state.
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing event: {:?}", event);
        match event {
            AppEvent::Quit => state.should_quit = true,
            AppEvent::ToggleHelp => {
                state.help_visible = !state.help_visible;
                state.ui_needs_refresh = true;
            }
            AppEvent::RefreshCompanies => state.needs_company_refresh = true,
            AppEvent::NextCompany => state.next_company(),
            AppEvent::PreviousCompany => state.previous_company(),
            AppEvent::OpenWizard => state.open_monday_wizard(),
            AppEvent::WizardCancel => state.close_monday_wizard(),
            AppEvent::WizardNextField => state.wizard_focus_next(),
            AppEvent::WizardPreviousField => state.wizard_focus_previous(),
            AppEvent::WizardCursorUp => state.wizard_cursor_up(),
            AppEvent::WizardCursorDown => state.wizard_cursor_down(),
            AppEvent::WizardApply => state.wizard_apply_selection(),
            AppEvent::WizardInputChar(c) => state.wizard_input_char(c),
            AppEvent::WizardBackspace => state.wizard_backspace(),
        }
    }
}
