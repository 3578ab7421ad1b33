// ABOUTME: Backend REST API client, wire types, and error taxonomy

pub mod client;
pub mod error;
pub mod types;

pub use client::{DashboardApiClient, IntegrationGateway};
pub use error::{ApiError, ConnectError, FetchError};
pub use types::{ColumnOption, ConnectRequest, ConnectResponse, RemoteOption};

#[cfg(test)]
pub use client::MockIntegrationGateway;
