// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod analytics;
pub mod archive;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod decoder;
pub mod diagnostics;
pub mod error;
pub mod filter;
pub mod ledger;
pub mod models;
pub mod reconcile;
pub mod store;
pub mod utils;

pub use analytics::{AnalyticsSnapshot, compute_analytics, compute_analytics_in};
pub use archive::{ArchiveContents, load};
pub use error::{DecodeError, StoreError};
pub use ledger::LedgerStore;
pub use reconcile::reconcile;
