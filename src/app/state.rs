// ABOUTME: Application state management for the linkdeck TUI - company
// roster, notifications, and the Monday.com wizard overlay

#![allow(dead_code)]

use crate::api::ConnectRequest;
use crate::config::AppConfig;
use crate::models::Company;
use crate::wizard::{MetricRole, WizardSession};
use std::time::{Duration, Instant};
use tracing::info;

/// Notification system for TUI messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Success,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Error,
            created_at: Instant::now(),
            duration: Duration::from_secs(5),
        }
    }

    pub fn info(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Info,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn warning(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Warning,
            created_at: Instant::now(),
            duration: Duration::from_secs(4),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Input focus inside the wizard modal, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardField {
    Token,
    Workspace,
    Board,
    Views,
    Likes,
    Comments,
    Connect,
}

impl WizardField {
    pub const fn all() -> [Self; 7] {
        [
            Self::Token,
            Self::Workspace,
            Self::Board,
            Self::Views,
            Self::Likes,
            Self::Comments,
            Self::Connect,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Token => "API Token",
            Self::Workspace => "Workspace",
            Self::Board => "Board",
            Self::Views => "Views Column",
            Self::Likes => "Likes Column",
            Self::Comments => "Comments Column",
            Self::Connect => "Connect",
        }
    }

    pub const fn metric_role(self) -> Option<MetricRole> {
        match self {
            Self::Views => Some(MetricRole::Views),
            Self::Likes => Some(MetricRole::Likes),
            Self::Comments => Some(MetricRole::Comments),
            _ => None,
        }
    }

    fn next(self) -> Self {
        let fields = Self::all();
        let pos = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(pos + 1) % fields.len()]
    }

    fn previous(self) -> Self {
        let fields = Self::all();
        let pos = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(pos + fields.len() - 1) % fields.len()]
    }
}

/// UI state for one open wizard modal. The wizard's configuration itself
/// lives in the embedded `WizardSession`; this struct only adds what the
/// terminal needs: focus, the token being typed, and list cursors.
#[derive(Debug)]
pub struct MondayWizardState {
    pub session: WizardSession,
    pub focus: WizardField,
    pub token_input: String,
    pub option_cursor: usize,
    /// True while the connect call is on the wire; input is ignored.
    pub connecting: bool,
}

impl MondayWizardState {
    pub fn new(company: &Company) -> Self {
        Self {
            session: WizardSession::open(company),
            focus: WizardField::Token,
            token_input: String::new(),
            option_cursor: 0,
            connecting: false,
        }
    }

    /// Number of selectable rows for the focused field.
    pub fn option_count(&self) -> usize {
        match self.focus {
            WizardField::Workspace => self.session.workspaces().len(),
            WizardField::Board => self.session.boards().len(),
            WizardField::Views | WizardField::Likes | WizardField::Comments => {
                self.session.columns().len()
            }
            WizardField::Token | WizardField::Connect => 0,
        }
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub app_config: AppConfig,

    pub companies: Vec<Company>,
    pub selected_company: usize,
    pub companies_loading: bool,
    /// Set to request a roster re-fetch on the next tick.
    pub needs_company_refresh: bool,

    pub monday_wizard: Option<MondayWizardState>,
    /// Connect payload awaiting execution on the next tick.
    pub pending_connect: Option<ConnectRequest>,

    pub notifications: Vec<Notification>,
    pub help_visible: bool,
    pub ui_needs_refresh: bool,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            should_quit: false,
            app_config,
            companies: Vec::new(),
            selected_company: 0,
            companies_loading: false,
            needs_company_refresh: true,
            monday_wizard: None,
            pending_connect: None,
            notifications: Vec::new(),
            help_visible: false,
            ui_needs_refresh: false,
        }
    }

    // Company roster navigation

    pub fn selected_company(&self) -> Option<&Company> {
        self.companies.get(self.selected_company)
    }

    pub fn next_company(&mut self) {
        if !self.companies.is_empty() {
            self.selected_company = (self.selected_company + 1) % self.companies.len();
        }
    }

    pub fn previous_company(&mut self) {
        if !self.companies.is_empty() {
            self.selected_company =
                (self.selected_company + self.companies.len() - 1) % self.companies.len();
        }
    }

    pub fn set_companies(&mut self, companies: Vec<Company>) {
        self.companies = companies;
        if self.selected_company >= self.companies.len() {
            self.selected_company = self.companies.len().saturating_sub(1);
        }
        self.ui_needs_refresh = true;
    }

    // Wizard lifecycle

    /// Open the wizard for the currently selected company.
    pub fn open_monday_wizard(&mut self) {
        if let Some(company) = self.selected_company() {
            info!("Opening Monday.com wizard for company '{}'", company.name);
            self.monday_wizard = Some(MondayWizardState::new(company));
            self.ui_needs_refresh = true;
        } else {
            self.add_warning_notification("No company selected".to_string());
        }
    }

    /// Close the wizard, discarding its configuration and credential.
    pub fn close_monday_wizard(&mut self) {
        if self.monday_wizard.take().is_some() {
            info!("Monday.com wizard closed");
            self.ui_needs_refresh = true;
        }
    }

    // Wizard input handling (delegating field semantics to the controller)

    pub fn wizard_focus_next(&mut self) {
        if let Some(wizard) = &mut self.monday_wizard {
            wizard.focus = wizard.focus.next();
            wizard.option_cursor = 0;
        }
    }

    pub fn wizard_focus_previous(&mut self) {
        if let Some(wizard) = &mut self.monday_wizard {
            wizard.focus = wizard.focus.previous();
            wizard.option_cursor = 0;
        }
    }

    pub fn wizard_cursor_up(&mut self) {
        if let Some(wizard) = &mut self.monday_wizard {
            wizard.option_cursor = wizard.option_cursor.saturating_sub(1);
        }
    }

    pub fn wizard_cursor_down(&mut self) {
        if let Some(wizard) = &mut self.monday_wizard {
            let count = wizard.option_count();
            if count > 0 && wizard.option_cursor + 1 < count {
                wizard.option_cursor += 1;
            }
        }
    }

    pub fn wizard_input_char(&mut self, c: char) {
        if let Some(wizard) = &mut self.monday_wizard {
            if wizard.focus == WizardField::Token && !wizard.connecting {
                wizard.token_input.push(c);
            }
        }
    }

    pub fn wizard_backspace(&mut self) {
        if let Some(wizard) = &mut self.monday_wizard {
            if wizard.focus == WizardField::Token && !wizard.connecting {
                wizard.token_input.pop();
            }
        }
    }

    /// Apply the focused field: commit the token, select the highlighted
    /// option, or (on the Connect button) stage the submission.
    pub fn wizard_apply_selection(&mut self) {
        let (focus, connecting) = match &self.monday_wizard {
            Some(wizard) => (wizard.focus, wizard.connecting),
            None => return,
        };
        if connecting {
            return;
        }

        if focus == WizardField::Connect {
            self.wizard_request_submit();
            self.ui_needs_refresh = true;
            return;
        }

        if let Some(wizard) = &mut self.monday_wizard {
            match focus {
                WizardField::Token => {
                    wizard.session.set_credential(wizard.token_input.clone());
                    wizard.focus = WizardField::Workspace;
                    wizard.option_cursor = 0;
                }
                WizardField::Workspace => {
                    if let Some(option) = wizard.session.workspaces().get(wizard.option_cursor) {
                        let id = option.id.clone();
                        wizard.session.set_workspace(&id);
                        wizard.focus = WizardField::Board;
                        wizard.option_cursor = 0;
                    }
                }
                WizardField::Board => {
                    if let Some(option) = wizard.session.boards().get(wizard.option_cursor) {
                        let id = option.id.clone();
                        wizard.session.set_board(&id);
                        wizard.focus = WizardField::Views;
                        wizard.option_cursor = 0;
                    }
                }
                WizardField::Views | WizardField::Likes | WizardField::Comments => {
                    let role = focus.metric_role().unwrap_or(MetricRole::Views);
                    if let Some(column) = wizard.session.columns().get(wizard.option_cursor) {
                        let id = column.id.clone();
                        wizard.session.set_column_mapping(role, &id);
                        wizard.focus = focus.next();
                        wizard.option_cursor = 0;
                    }
                }
                WizardField::Connect => {}
            }
        }
        self.ui_needs_refresh = true;
    }

    /// Stage the connect call if the gate allows it.
    pub fn wizard_request_submit(&mut self) {
        let submit_result = match &self.monday_wizard {
            Some(wizard) => wizard.session.submit(),
            None => return,
        };
        match submit_result {
            Ok(request) => {
                if let Some(wizard) = &mut self.monday_wizard {
                    wizard.connecting = true;
                }
                self.pending_connect = Some(request);
            }
            Err(err) => {
                self.add_warning_notification(err.to_string());
            }
        }
    }

    // Notifications

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
        self.ui_needs_refresh = true;
    }

    pub fn add_success_notification(&mut self, message: String) {
        self.add_notification(Notification::success(message));
    }

    pub fn add_error_notification(&mut self, message: String) {
        self.add_notification(Notification::error(message));
    }

    pub fn add_info_notification(&mut self, message: String) {
        self.add_notification(Notification::info(message));
    }

    pub fn add_warning_notification(&mut self, message: String) {
        self.add_notification(Notification::warning(message));
    }

    pub fn cleanup_expired_notifications(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    pub fn get_current_notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| !n.is_expired()).collect()
    }
}

// Include the test module inline
#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
