//! Application state management
use parking_lot::Mutex;
use std::sync::Arc;

use stackbrowser_core::{
    Config, HttpRequest, HttpResponse, NavigationEngine, RequestRouter, StaticAssets,
};

/// Thread-safe application state wrapper.
///
/// Every request runs its transition and state capture under a single lock
/// acquisition, so concurrent clients never observe a half-applied change.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<Mutex<NavigationEngine>>,
    router: RequestRouter,
}

impl AppState {
    pub fn new(config: &Config, assets: Arc<dyn StaticAssets>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(NavigationEngine::with_capacity(
                config.history_capacity,
            ))),
            router: RequestRouter::new(assets),
        }
    }

    pub fn with_engine<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut NavigationEngine) -> T,
    {
        let mut engine = self.engine.lock();
        f(&mut engine)
    }

    pub fn handle(&self, request: &HttpRequest) -> HttpResponse {
        self.with_engine(|engine| self.router.handle(engine, request))
    }
}
