//! Client-side product store for the catalog frontend.
//!
//! [`state::ProductStore`] is an immutable snapshot of the products the UI
//! renders. [`actions::ProductActions`] performs one HTTP call per user action
//! through a [`gateway::ProductGateway`] and hands back the next snapshot
//! together with a [`actions::StoreOutcome`] suitable for a toast.

pub mod actions;
pub mod gateway;
pub mod http_gateway;
pub mod model;
pub mod state;
