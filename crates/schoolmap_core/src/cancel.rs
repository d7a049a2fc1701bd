//! Cooperative cancellation token for storage operations.
//!
//! # Responsibility
//! - Carry a caller-owned cancellation signal into every storage call.
//!
//! # Invariants
//! - Cancellation is cooperative: the token is checked at each blocking
//!   I/O boundary, it never preempts a running statement.
//! - Once cancelled, a token stays cancelled; clones share one flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag passed explicitly through storage calls.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals cancellation to every clone of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns whether cancellation has been signalled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
