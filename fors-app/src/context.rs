//! Application context
//!
//! Explicit dependency container handed to every view-model: the commerce API
//! handle and the notification queue. Replaces the ambient provider globals of
//! the original client with a single, injected state object.

use std::sync::Arc;

use fors_client::CommerceApi;

use crate::notify::Notifier;

/// Shared application dependencies
#[derive(Clone)]
pub struct AppContext {
    api: Arc<dyn CommerceApi>,
    notifier: Notifier,
}

impl AppContext {
    pub fn new(api: Arc<dyn CommerceApi>) -> Self {
        Self {
            api,
            notifier: Notifier::new(),
        }
    }

    /// The commerce API the view-models call out to
    pub fn api(&self) -> &dyn CommerceApi {
        self.api.as_ref()
    }

    /// The toast notification queue
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
