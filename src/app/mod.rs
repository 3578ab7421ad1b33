// ABOUTME: Main application structure and async tick loop for the TUI

pub mod events;
pub mod state;

pub use events::EventHandler;
pub use state::AppState;

use crate::api::{DashboardApiClient, IntegrationGateway};
use crate::config::{AppConfig, ACCESS_TOKEN_ENV};
use crate::wizard;
use anyhow::{Context, Result};
use tracing::{error, info, warn};

pub struct App {
    pub state: AppState,
    client: DashboardApiClient,
}

impl App {
    /// Build the app from config files and the environment.
    pub fn new() -> Result<Self> {
        let config = AppConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let access_token = config.api.resolve_access_token().with_context(|| {
            format!(
                "No backend access token. Set {ACCESS_TOKEN_ENV} or api.access_token in the config file"
            )
        })?;

        let client =
            DashboardApiClient::new(&config.api.base_url, access_token, config.api.timeout())?;

        Ok(Self {
            state: AppState::new(config),
            client,
        })
    }

    /// Initial data load before the first frame.
    pub async fn init(&mut self) {
        self.refresh_companies().await;
    }

    async fn refresh_companies(&mut self) {
        self.state.companies_loading = true;
        match self.client.list_companies().await {
            Ok(companies) => {
                info!("Loaded {} companies", companies.len());
                self.state.set_companies(companies);
            }
            Err(e) => {
                error!("Failed to load companies: {}", e);
                self.state.add_error_notification(format!("Failed to load companies: {e}"));
            }
        }
        self.state.companies_loading = false;
        self.state.needs_company_refresh = false;
    }

    /// Periodic work: expire notifications, refresh the roster when asked,
    /// run the wizard's queued lookups, and execute a staged connect call.
    pub async fn tick(&mut self) -> Result<()> {
        self.state.cleanup_expired_notifications();

        if self.state.needs_company_refresh {
            self.refresh_companies().await;
        }

        if let Some(wizard_state) = &mut self.state.monday_wizard {
            let errors = wizard::drain_fetches(&mut wizard_state.session, &self.client).await;
            if !errors.is_empty() {
                wizard_state.option_cursor = 0;
            }
            for err in errors {
                self.state.add_error_notification(err.to_string());
            }
        }

        if let Some(request) = self.state.pending_connect.take() {
            match self.client.connect(&request).await {
                Ok(response) => {
                    info!("Monday.com connected for company {}", request.company_id);
                    self.state.close_monday_wizard();
                    let message = response
                        .message
                        .unwrap_or_else(|| "Monday.com connected successfully".to_string());
                    self.state.add_success_notification(message);
                    self.state.needs_company_refresh = true;
                }
                Err(err) => {
                    error!("Connect call failed: {}", err);
                    // Leave the wizard state intact so the user can retry
                    // without re-entering anything.
                    if let Some(wizard_state) = &mut self.state.monday_wizard {
                        wizard_state.connecting = false;
                    }
                    self.state.add_error_notification(err.to_string());
                }
            }
        }

        Ok(())
    }

    /// Whether the UI should redraw immediately after async work.
    pub fn needs_ui_refresh(&mut self) -> bool {
        std::mem::take(&mut self.state.ui_needs_refresh)
    }
}
