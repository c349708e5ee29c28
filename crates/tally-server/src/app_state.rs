//! Shared application state.
//!
//! The store handle, notification sink, and compiled allow-list are injected
//! at construction so tests can substitute an in-memory store and a recording
//! sink.

use std::sync::Arc;

use tally_core::error::Result;

use crate::config::ServiceConfig;
use crate::notify::{NotificationSink, NotifyList, WebhookSink};
use crate::obs::ServiceMetrics;
use crate::store::CounterStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    store: Arc<dyn CounterStore>,
    sink: Option<Arc<dyn NotificationSink>>,
    notify_keys: NotifyList,
    metrics: ServiceMetrics,
}

impl AppState {
    /// Build application state, constructing the webhook sink from config.
    pub fn new(cfg: ServiceConfig, store: Arc<dyn CounterStore>) -> Result<Self> {
        let sink = match &cfg.notify.webhook_url {
            Some(url) => {
                Some(Arc::new(WebhookSink::new(url.clone())?) as Arc<dyn NotificationSink>)
            }
            None => None,
        };
        Ok(Self::with_sink(cfg, store, sink))
    }

    /// Build state with an explicit sink; tests inject a recording fake here.
    ///
    /// Notification stays disabled unless both a sink and a non-empty
    /// allow-list are present.
    pub fn with_sink(
        cfg: ServiceConfig,
        store: Arc<dyn CounterStore>,
        sink: Option<Arc<dyn NotificationSink>>,
    ) -> Self {
        // Parse the allow-list once; membership checks are per-request.
        let notify_keys = NotifyList::parse(&cfg.notify.keys);
        let sink = if notify_keys.is_empty() { None } else { sink };
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                sink,
                notify_keys,
                metrics: ServiceMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &dyn CounterStore {
        self.inner.store.as_ref()
    }

    pub fn sink(&self) -> Option<&dyn NotificationSink> {
        self.inner.sink.as_deref()
    }

    pub fn notify_keys(&self) -> &NotifyList {
        &self.inner.notify_keys
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }
}
