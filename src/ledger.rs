// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The authoritative in-memory ledger and its persisted copy.
//!
//! Collections are replaced together or not at all, and the analytics
//! snapshot is swapped in only after it has been fully computed.

use crate::analytics::{AnalyticsSnapshot, compute_analytics};
use crate::archive;
use crate::diagnostics::Diagnostics;
use crate::error::{DecodeError, StoreError};
use crate::filter::{TransactionFilter, filter_transactions};
use crate::models::{Budget, PaymentReminder, Transaction};
use crate::reconcile::reconcile_with;
use crate::store::KeyValueStore;
use log::{debug, info, warn};
use serde::Serialize;

pub const TRANSACTIONS_KEY: &str = "expenseTransactions";
pub const BUDGETS_KEY: &str = "expenseBudgets";
pub const REMINDERS_KEY: &str = "expensePaymentReminders";

const SLOTS: [&str; 3] = [TRANSACTIONS_KEY, BUDGETS_KEY, REMINDERS_KEY];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummary {
    pub transactions: usize,
    pub budgets: usize,
    pub payment_reminders: usize,
}

type Collections = (Vec<Transaction>, Vec<Budget>, Vec<PaymentReminder>);

pub struct LedgerStore<S: KeyValueStore> {
    store: S,
    diagnostics: Box<dyn Diagnostics>,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    payment_reminders: Vec<PaymentReminder>,
    analytics: Option<AnalyticsSnapshot>,
    loaded: bool,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Restore from `store` with no diagnostics.
    pub fn open(store: S) -> Self {
        Self::with_diagnostics(store, Box::new(()))
    }

    /// Restore from `store`. Persisted budgets are reconciled again; slots that
    /// fail to deserialize are discarded and the ledger starts empty.
    pub fn with_diagnostics(store: S, diagnostics: Box<dyn Diagnostics>) -> Self {
        let mut ledger = LedgerStore {
            store,
            diagnostics,
            transactions: Vec::new(),
            budgets: Vec::new(),
            payment_reminders: Vec::new(),
            analytics: None,
            loaded: false,
        };
        match ledger.read_slots() {
            Ok(Some((transactions, budgets, reminders))) => {
                debug!("Loaded from storage - re-synchronizing budgets");
                let budgets = reconcile_with(&budgets, &transactions, ledger.diagnostics.as_ref());
                ledger.install(transactions, budgets, reminders);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Discarding persisted ledger: {}", e);
                ledger.remove_slots();
            }
        }
        ledger
    }

    fn read_slots(&self) -> Result<Option<Collections>, StoreError> {
        let (Some(tx_json), Some(budget_json)) = (
            self.store.get(TRANSACTIONS_KEY)?,
            self.store.get(BUDGETS_KEY)?,
        ) else {
            return Ok(None);
        };
        let transactions: Vec<Transaction> = serde_json::from_str(&tx_json)?;
        let budgets: Vec<Budget> = serde_json::from_str(&budget_json)?;
        let reminders: Vec<PaymentReminder> = match self.store.get(REMINDERS_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        Ok(Some((transactions, budgets, reminders)))
    }

    fn install(
        &mut self,
        transactions: Vec<Transaction>,
        budgets: Vec<Budget>,
        payment_reminders: Vec<PaymentReminder>,
    ) {
        let snapshot = compute_analytics(&transactions, &budgets);
        self.transactions = transactions;
        self.budgets = budgets;
        self.payment_reminders = payment_reminders;
        self.analytics = Some(snapshot);
        self.loaded = true;
    }

    /// Decode, reconcile and install an export archive. On error the current
    /// state is left untouched. An archive without transactions is not
    /// persisted, and any previously persisted slots are dropped.
    pub fn load_archive(&mut self, bytes: &[u8]) -> Result<LoadSummary, DecodeError> {
        let contents = archive::load(bytes, self.diagnostics.as_ref())?;
        let summary = LoadSummary {
            transactions: contents.transactions.len(),
            budgets: contents.budgets.len(),
            payment_reminders: contents.payment_reminders.len(),
        };
        self.install(
            contents.transactions,
            contents.budgets,
            contents.payment_reminders,
        );
        if self.transactions.is_empty() {
            self.remove_slots();
        } else if let Err(e) = self.persist() {
            warn!("Error saving ledger: {}", e);
        }
        Ok(summary)
    }

    /// Write all three collections to their slots.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let transactions = serde_json::to_string(&self.transactions)?;
        let budgets = serde_json::to_string(&self.budgets)?;
        let reminders = serde_json::to_string(&self.payment_reminders)?;
        self.store.set(TRANSACTIONS_KEY, &transactions)?;
        self.store.set(BUDGETS_KEY, &budgets)?;
        self.store.set(REMINDERS_KEY, &reminders)?;
        debug!("Ledger saved");
        Ok(())
    }

    /// Recompute the snapshot; a ledger without transactions keeps its current one.
    pub fn refresh_analytics(&mut self) {
        if self.transactions.is_empty() {
            return;
        }
        self.analytics = Some(compute_analytics(&self.transactions, &self.budgets));
        debug!("Analytics refreshed");
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
        self.budgets.clear();
        self.payment_reminders.clear();
        self.analytics = None;
        self.loaded = false;
        self.remove_slots();
        info!("Ledger cleared");
    }

    fn remove_slots(&mut self) {
        for key in SLOTS {
            if let Err(e) = self.store.remove(key) {
                warn!("Failed to remove slot {}: {}", key, e);
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn active_transactions(&self) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.is_active()).collect()
    }

    pub fn filter_transactions(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        filter_transactions(&self.transactions, filter)
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn payment_reminders(&self) -> &[PaymentReminder] {
        &self.payment_reminders
    }

    pub fn analytics(&self) -> Option<&AnalyticsSnapshot> {
        self.analytics.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
