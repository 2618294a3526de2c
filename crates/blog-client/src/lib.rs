//! # Blog Client
//!
//! Handling for the outbound signals the UI layer emits while the app is
//! running: persisting the access token and driving the third-party
//! comment/share widgets when the visible post changes.
//!
//! The widget integrations and token storage sit behind capability traits,
//! so the signal-handling logic runs in tests without touching a DOM or
//! loading any scripts. The "widgets already loaded" flag lives on
//! [`Bootstrap`] rather than in module-level state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;

/// Delay before re-highlighting and re-embedding widgets after a slug
/// change, giving the UI layer time to finish its DOM updates.
pub const WIDGET_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Outbound signals emitted by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMsg {
    /// Persist an access token for later sessions.
    SaveAccessToken(String),
    /// The visible post changed to the given slug.
    SlugChanged(String),
}

/// Client-side capability errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Widget failure: {0}")]
    Widget(String),
}

/// Token persistence (local storage in the browser).
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn save_access_token(&self, token: &str) -> Result<(), ClientError>;

    async fn access_token(&self) -> Option<String>;
}

/// Comment widget provider (disqus-style embed).
#[async_trait]
pub trait CommentWidget: Send + Sync {
    /// Load the widget script. Called at most once per session.
    async fn load(&self) -> Result<(), ClientError>;

    /// Point the widget at a new page identifier.
    async fn reset(&self, page_identifier: &str) -> Result<(), ClientError>;

    /// Re-embed the widget into the current page.
    async fn embed(&self) -> Result<(), ClientError>;
}

/// Share widget provider (addtoany-style menu).
#[async_trait]
pub trait ShareWidget: Send + Sync {
    /// Load the widget script. Called at most once per session.
    async fn load(&self) -> Result<(), ClientError>;

    /// Re-initialize share links for the current page.
    async fn init(&self, link_name: &str) -> Result<(), ClientError>;
}

/// Syntax highlighting over rendered code blocks.
#[async_trait]
pub trait Highlighter: Send + Sync {
    async fn highlight_all(&self);
}

/// Client bootstrap state: reacts to [`OutboundMsg`] signals.
#[derive(Clone)]
pub struct Bootstrap {
    tokens: Arc<dyn TokenStore>,
    comments: Arc<dyn CommentWidget>,
    share: Arc<dyn ShareWidget>,
    highlighter: Arc<dyn Highlighter>,
    widgets_loaded: Arc<AtomicBool>,
    settle_delay: Duration,
}

impl Bootstrap {
    pub fn new(
        tokens: Arc<dyn TokenStore>,
        comments: Arc<dyn CommentWidget>,
        share: Arc<dyn ShareWidget>,
        highlighter: Arc<dyn Highlighter>,
    ) -> Self {
        Self {
            tokens,
            comments,
            share,
            highlighter,
            widgets_loaded: Arc::new(AtomicBool::new(false)),
            settle_delay: WIDGET_SETTLE_DELAY,
        }
    }

    /// Override the settle delay (tests).
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Handle one outbound signal.
    ///
    /// Slug changes spawn the delayed highlight/re-embed pass and return its
    /// handle; the delayed work is never cancelled, so a rapid sequence of
    /// slug changes produces overlapping callbacks, same as the original
    /// page. Callers that do not care can drop the handle.
    pub async fn handle(&self, msg: OutboundMsg) -> Option<JoinHandle<()>> {
        match msg {
            OutboundMsg::SaveAccessToken(token) => {
                if let Err(e) = self.tokens.save_access_token(&token).await {
                    tracing::error!("Failed to persist access token: {e}");
                }
                None
            }
            OutboundMsg::SlugChanged(slug) => Some(self.on_slug_changed(slug).await),
        }
    }

    async fn on_slug_changed(&self, slug: String) -> JoinHandle<()> {
        let already_loaded = self.widgets_loaded.load(Ordering::SeqCst);

        if already_loaded {
            if let Err(e) = self.comments.reset(&slug).await {
                tracing::warn!(%slug, "Comment widget reset failed: {e}");
            }
        }

        let this = self.clone();
        let delayed = tokio::spawn(async move {
            tokio::time::sleep(this.settle_delay).await;

            this.highlighter.highlight_all().await;

            if already_loaded {
                if let Err(e) = this.comments.embed().await {
                    tracing::warn!("Comment widget embed failed: {e}");
                }
                if let Err(e) = this.share.init(&slug).await {
                    tracing::warn!("Share widget init failed: {e}");
                }
            }
        });

        if !already_loaded {
            if let Err(e) = self.comments.load().await {
                tracing::warn!("Comment widget load failed: {e}");
            }
            if let Err(e) = self.share.load().await {
                tracing::warn!("Share widget load failed: {e}");
            }
            self.widgets_loaded.store(true, Ordering::SeqCst);
        }

        delayed
    }
}
