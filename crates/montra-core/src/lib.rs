//! Storefront application shell for Montra.
//!
//! Wires the pure domain logic from `montra-commerce` to a running
//! session: owned state, an intent/effect dispatch pipeline, the
//! presentation boundary, catalog loading and the search debouncer.
//!
//! # Architecture
//!
//! - [`Intent`] — a user or system event entering the loop. The
//!   presentation adapter constructs these from its controls and sends
//!   them through an [`IntentSender`].
//! - [`state::update`] — the pure transition: mutates [`state::StoreState`]
//!   and returns [`effect::Effect`]s, with no I/O.
//! - [`Presenter`] — the boundary trait the effects are applied to.
//! - [`Storefront`] — owns all of the above and runs the event loop on a
//!   Tokio runtime. The catalog fetch is the only suspending operation;
//!   it runs on a spawned task and reports back as an intent, so every
//!   mutation plus its renders is one atomic step.
//!
//! # Example
//!
//! ```rust,ignore
//! use montra_core::prelude::*;
//!
//! let config = StorefrontConfig::new("https://shop.example/catalog.json");
//! let (storefront, intents) = Storefront::new(config, MyDomPresenter::new())?;
//!
//! intents.send(Intent::LoadCatalog);
//! storefront.run().await; // for the life of the page session
//! ```

pub mod app;
pub mod config;
pub mod debounce;
pub mod effect;
pub mod intent;
pub mod presenter;
pub mod state;

pub use app::{IntentSender, Storefront};
pub use config::StorefrontConfig;
pub use intent::Intent;
pub use presenter::Presenter;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::app::{IntentSender, Storefront};
    pub use crate::config::StorefrontConfig;
    pub use crate::debounce::Debouncer;
    pub use crate::effect::{
        CalculationOutcome, CalculationView, CartLineView, CartView, Effect, ProductCard,
        ProductDetailView, ProductListView, ProductOption, Severity,
    };
    pub use crate::intent::Intent;
    pub use crate::presenter::{apply, Presenter};
    pub use crate::state::{update, StoreState};
}
