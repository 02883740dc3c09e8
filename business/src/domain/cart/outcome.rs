use std::sync::Arc;

use crate::domain::notification::Notification;

use super::errors::CartError;
use super::state::CartSnapshot;

/// Result of a cart action: the snapshot now installed and what to tell the user.
#[derive(Debug, Clone)]
pub struct CartOutcome {
    pub snapshot: Arc<CartSnapshot>,
    pub notification: Option<Notification>,
}

impl CartOutcome {
    pub fn silent(snapshot: Arc<CartSnapshot>) -> Self {
        Self {
            snapshot,
            notification: None,
        }
    }

    pub fn notify(snapshot: Arc<CartSnapshot>, notification: Notification) -> Self {
        Self {
            snapshot,
            notification: Some(notification),
        }
    }

    pub fn rejected(snapshot: Arc<CartSnapshot>, error: &CartError) -> Self {
        Self::notify(snapshot, error.notification())
    }
}
