#![allow(dead_code)]

use std::sync::Arc;

use portal_client::fake::FakeBackend;
use portal_session::{MemorySessionStore, Session};
use portal_views::{RecordingNotifier, ViewContext};

pub struct Harness {
    pub backend: FakeBackend,
    pub notifier: Arc<RecordingNotifier>,
    pub store: Arc<MemorySessionStore>,
    pub ctx: ViewContext,
}

/// Fake backend plus a context whose session holds `entries`.
pub fn harness(entries: &[(&str, &str)]) -> Harness {
    let backend = FakeBackend::start();
    let notifier = Arc::new(RecordingNotifier::new());
    let store = Arc::new(MemorySessionStore::with_entries(entries.iter().copied()));
    let session = Session::load(store.clone());
    let ctx = ViewContext::new(backend.client(), session, notifier.clone());
    Harness {
        backend,
        notifier,
        store,
        ctx,
    }
}
