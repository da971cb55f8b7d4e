use std::time::Duration;

use crate::clients::ServiceClients;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub clients: ServiceClients,
    /// Upper bound on every backend call
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(clients: ServiceClients, request_timeout: Duration) -> Self {
        Self {
            clients,
            request_timeout,
        }
    }
}
