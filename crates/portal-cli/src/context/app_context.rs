use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use portal_client::{ApiClient, CancellationToken};
use portal_config::PortalConfig;
use portal_session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
use portal_views::{RecordingNotifier, ViewContext};

use crate::cli::{GlobalFlags, OutputFormat};

/// Shared resources initialized once at startup.
pub struct AppContext {
    pub config: PortalConfig,
    pub format: OutputFormat,
    pub view: ViewContext,
    pub notifier: Arc<RecordingNotifier>,
    /// Session file, or `None` for an in-memory session.
    pub session_path: Option<PathBuf>,
}

impl AppContext {
    /// Open the session store, build the API client and wire Ctrl-C to
    /// cancel whatever the current view is waiting on.
    pub fn init(config: PortalConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let (store, session_path) = open_store(&config)?;
        let client = ApiClient::new(&config.api).context("failed to build API client")?;
        tracing::debug!(base_url = client.base_url(), "api client ready");

        let notifier = Arc::new(RecordingNotifier::new());
        let view = ViewContext::new(client, Session::load(store), notifier.clone())
            .with_cancellation(interrupt_token());

        Ok(Self {
            format: flags.format_or(&config.general.default_format),
            config,
            view,
            notifier,
            session_path,
        })
    }

    /// Context around an already-built view context, with an in-memory
    /// session and JSON output.
    #[cfg(test)]
    pub(crate) fn with_view(view: ViewContext, notifier: Arc<RecordingNotifier>) -> Self {
        Self {
            config: PortalConfig::default(),
            format: OutputFormat::Json,
            view,
            notifier,
            session_path: None,
        }
    }

    /// Notifications raised so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<String> {
        self.notifier.messages()
    }
}

fn open_store(
    config: &PortalConfig,
) -> anyhow::Result<(Arc<dyn SessionStore>, Option<PathBuf>)> {
    if config.session.ephemeral {
        return Ok((Arc::new(MemorySessionStore::new()), None));
    }

    let store = match config.session.path_override() {
        Some(path) => FileSessionStore::open(path),
        None => FileSessionStore::open_default(),
    }
    .context("failed to open session store")?;
    let path = store.path().to_path_buf();
    Ok((Arc::new(store), Some(path)))
}

fn interrupt_token() -> CancellationToken {
    let token = CancellationToken::new();
    let cancel = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupted; cancelling in-flight requests");
            cancel.cancel();
        }
    });
    token
}
