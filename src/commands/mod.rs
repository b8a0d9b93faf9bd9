// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::AnalyticsSnapshot;
use crate::ledger::LedgerStore;
use crate::store::KeyValueStore;

pub mod budgets;
pub mod exporter;
pub mod load;
pub mod reminders;
pub mod reports;
pub mod transactions;

/// The current snapshot, or a hint to load an archive first.
pub(crate) fn snapshot_or_hint<S: KeyValueStore>(
    ledger: &LedgerStore<S>,
) -> Option<&AnalyticsSnapshot> {
    let snapshot = ledger.analytics();
    if snapshot.is_none() {
        println!("No data loaded. Run `moneylens load --path <zip>` first.");
    }
    snapshot
}
