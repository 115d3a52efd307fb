//! The storefront session: event loop, catalog loading, debounced search.

use tokio::sync::mpsc;

use montra_commerce::catalog::Catalog;
use montra_data::{FetchClient, LoadError};

use crate::config::StorefrontConfig;
use crate::debounce::Debouncer;
use crate::intent::Intent;
use crate::presenter::{apply, Presenter};
use crate::state::{update, StoreState};

/// Handle for sending intents into the dispatch loop.
///
/// The presentation adapter holds one and reports user interactions with
/// it; internal tasks (the catalog fetch, the debouncer) use clones to
/// re-enter the loop.
#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: mpsc::UnboundedSender<Intent>,
}

impl IntentSender {
    /// Send an intent. Sends after the session ended are dropped.
    pub fn send(&self, intent: Intent) {
        let _ = self.tx.send(intent);
    }
}

/// A storefront session: owned state plus the presenter, driven by
/// intents.
///
/// Intents are dispatched one at a time against `&mut self`, so each
/// mutation together with the renders it triggers is a single atomic step
/// from the perspective of any later event.
pub struct Storefront<P: Presenter> {
    config: StorefrontConfig,
    state: StoreState,
    presenter: P,
    fetcher: FetchClient,
    debouncer: Debouncer,
    intents: IntentSender,
    rx: mpsc::UnboundedReceiver<Intent>,
}

impl<P: Presenter> Storefront<P> {
    /// Create a session. Returns the storefront and the sender the
    /// presentation adapter reports user intents with.
    pub fn new(
        config: StorefrontConfig,
        presenter: P,
    ) -> Result<(Self, IntentSender), LoadError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let fetcher = FetchClient::with_timeout(config.request_timeout)?;
        let intents = IntentSender { tx };
        let storefront = Self {
            config,
            state: StoreState::new(),
            presenter,
            fetcher,
            debouncer: Debouncer::new(),
            intents: intents.clone(),
            rx,
        };
        Ok((storefront, intents))
    }

    /// The current session state.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// The presenter, for inspection.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Consume the session and return the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Dispatch a single intent: mutate state, apply the resulting
    /// renders, and kick off any side effect.
    pub fn dispatch(&mut self, intent: Intent) {
        tracing::debug!(intent = intent.name(), "dispatch");
        match intent {
            Intent::LoadCatalog => {
                self.spawn_load();
                self.run_update(Intent::LoadCatalog);
            }
            Intent::SearchEdited(criteria) => {
                // Each keystroke replaces the previously scheduled
                // recomputation; only the last edit of a burst lands.
                let intents = self.intents.clone();
                self.debouncer.schedule(self.config.search_debounce, async move {
                    intents.send(Intent::FiltersChanged(criteria));
                });
            }
            other => self.run_update(other),
        }
    }

    /// Receive and dispatch the next intent. Returns `false` once the
    /// channel has closed.
    pub async fn step(&mut self) -> bool {
        match self.rx.recv().await {
            Some(intent) => {
                self.dispatch(intent);
                true
            }
            None => false,
        }
    }

    /// Run the dispatch loop for the life of the session. The session
    /// has no teardown; it ends when this future is dropped.
    pub async fn run(mut self) {
        while self.step().await {}
    }

    fn run_update(&mut self, intent: Intent) {
        for effect in update(&mut self.state, intent) {
            apply(&mut self.presenter, effect);
        }
    }

    /// Fetch the catalog on a spawned task; completion re-enters the
    /// loop as `CatalogLoaded`. Concurrent loads are not cancelled, the
    /// last completed one wins.
    fn spawn_load(&self) {
        let intents = self.intents.clone();
        let fetcher = self.fetcher.clone();
        let url = self.config.catalog_url.clone();
        tokio::spawn(async move {
            let result = fetcher.get_json::<Catalog>(&url).await;
            intents.send(Intent::CatalogLoaded(result));
        });
    }
}
