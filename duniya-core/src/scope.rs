//! Cancellation scopes tied to view lifetimes.

use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Cancellation scope for one mounted view.
///
/// Acquired when a page service is created and released (cancelled) when it
/// is dropped or explicitly unmounted, so loads started by a view cannot
/// write state after the view is gone.
#[derive(Debug)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Scope for a widget with a shorter lifetime than its page. Cancelling
    /// the page cancels the child; not the other way around.
    pub fn child(&self) -> ViewScope {
        Self {
            token: self.token.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run a future to completion unless the scope is cancelled first.
    /// Returns None when cancelled; the future is dropped mid-flight.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            _ = self.token.cancelled() => None,
            output = fut => Some(output),
        }
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
