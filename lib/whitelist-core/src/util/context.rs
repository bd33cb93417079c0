//! Caller-bound cancellation and deadline for a single service call.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Interrupted {
    #[error("Cancelled by caller")]
    Cancelled,
    #[error("Deadline exceeded")]
    DeadlineExceeded,
}

#[derive(Clone, Debug)]
pub struct RequestContext {
    cancellation_token: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestContext {
    /// Context that is never cancelled and has no deadline.
    pub fn new() -> Self {
        Self {
            cancellation_token: CancellationToken::new(),
            deadline: None,
        }
    }

    pub fn with_cancellation_token(mut self, cancellation_token: CancellationToken) -> Self {
        self.cancellation_token = cancellation_token;
        self
    }

    /// Sets the deadline. An earlier deadline already present wins.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn check(&self) -> Result<(), Interrupted> {
        if self.cancellation_token.is_cancelled() {
            return Err(Interrupted::Cancelled);
        }

        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => Err(Interrupted::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Drives `future` until it completes, the token is cancelled or the deadline passes.
    ///
    /// On interruption `future` is dropped, aborting whatever I/O it had in flight.
    pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, Interrupted> {
        self.check()?;

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancellation_token.cancelled() => Err(Interrupted::Cancelled),
            _ = deadline => Err(Interrupted::DeadlineExceeded),
            output = future => Ok(output),
        }
    }
}
