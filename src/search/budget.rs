// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deadlines and cancellation for an in-flight search.
//!
//! A `Budget` is cloned into every term matcher. Clones share one cancel flag,
//! so `cancel()` on any clone (or on the original held by the caller) stops
//! all of them at their next checkpoint. Matchers check between lines, which
//! bounds the overrun to one line's worth of work per term.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::SearchError;

/// How often, in lines, a matcher consults its budget.
pub const CHECK_INTERVAL: usize = 64;

#[derive(Debug, Clone, Default)]
pub struct Budget {
    deadline: Option<(Instant, Duration)>,
    cancelled: Arc<AtomicBool>,
}

impl Budget {
    /// No deadline. Only `cancel()` stops it.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some((Instant::now() + timeout, timeout)),
            cancelled: Arc::default(),
        }
    }

    /// Stop every matcher sharing this budget.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// `Ok` while there is budget left.
    pub fn check(&self) -> Result<(), SearchError> {
        if self.is_cancelled() {
            return Err(SearchError::Cancelled);
        }
        match self.deadline {
            Some((deadline, timeout)) if Instant::now() >= deadline => {
                Err(SearchError::TimedOut(timeout))
            }
            _ => Ok(()),
        }
    }

    /// Check only every [`CHECK_INTERVAL`] lines.
    #[inline]
    pub fn checkpoint(&self, line: usize) -> Result<(), SearchError> {
        if line % CHECK_INTERVAL == 0 {
            self.check()
        } else {
            Ok(())
        }
    }
}
