#![doc(test(attr(deny(warnings))))]

//! Money Balance offers the ledger primitives behind a personal income and
//! expense tracker: expanding a single transaction intent into dated entry
//! series, scoped deletion of those series, and per-month summaries.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Money Balance tracing initialized.");
    });
}
