//! What every view is built from: client, session, notifier, and a
//! cancellation scope.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use portal_client::{ApiClient, CallOptions, CancellationToken, ClientError};
use portal_core::Envelope;
use portal_session::Session;

/// Sink for blocking user notifications (the browser `alert` of a web UI).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that keeps every message, for tests and transcripts.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.messages().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// Cancellation scope of one mounted view.
///
/// Each request gets a child token, so ending the lifetime abandons every
/// call still in flight.
#[derive(Debug, Clone, Default)]
pub struct Lifetime {
    token: CancellationToken,
}

impl Lifetime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A lifetime that also ends when `parent` is cancelled.
    #[must_use]
    pub fn within(parent: &CancellationToken) -> Self {
        Self {
            token: parent.child_token(),
        }
    }

    /// Options for one request made during this lifetime.
    #[must_use]
    pub fn options(&self) -> CallOptions {
        CallOptions::cancellable(self.token.child_token())
    }

    pub fn end(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.token.is_cancelled()
    }

    #[must_use]
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// Notification texts of one secondary action.
///
/// An application failure is reported as `"{failed}: {server message}"`, a
/// transport failure as `"{error}: {error text}"`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActionTexts {
    pub failed: &'static str,
    pub error: &'static str,
}

/// Shared dependencies of a view.
#[derive(Clone)]
pub struct ViewContext {
    pub client: ApiClient,
    pub session: Session,
    pub notifier: Arc<dyn Notifier>,
    root: CancellationToken,
}

impl fmt::Debug for ViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewContext")
            .field("client", &self.client)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl ViewContext {
    #[must_use]
    pub fn new(client: ApiClient, session: Session, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            session,
            notifier,
            root: CancellationToken::new(),
        }
    }

    /// Tie every view built from this context to `token`, so cancelling it
    /// ends all of them at once.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.root = token;
        self
    }

    /// A fresh lifetime for a view built from this context.
    #[must_use]
    pub fn lifetime(&self) -> Lifetime {
        Lifetime::within(&self.root)
    }

    pub fn notify(&self, message: &str) {
        tracing::info!(text = message, "notification");
        self.notifier.notify(message);
    }

    /// Interpret the reply of a secondary action.
    ///
    /// Returns the envelope only on success. Failures are reported through
    /// the notifier; replies arriving after `lifetime` ended are dropped
    /// silently.
    pub(crate) fn settle(
        &self,
        lifetime: &Lifetime,
        result: Result<Envelope, ClientError>,
        texts: ActionTexts,
    ) -> Option<Envelope> {
        if lifetime.has_ended() {
            tracing::debug!("view unmounted; dropping reply");
            return None;
        }
        match result {
            Err(error) if error.is_cancelled() => None,
            Err(error) => {
                self.notify(&format!("{}: {error}", texts.error));
                None
            }
            Ok(envelope) if envelope.is_success() => Some(envelope),
            Ok(envelope) => {
                self.report_rejection(&envelope, texts);
                None
            }
        }
    }

    pub(crate) fn report_rejection(&self, envelope: &Envelope, texts: ActionTexts) {
        self.notify(&format!(
            "{}: {}",
            texts.failed,
            envelope.message().unwrap_or_default()
        ));
    }
}
