// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::decoder::{DecodedMember, RecordKind, decode_member};
use crate::diagnostics::Diagnostics;
use crate::error::DecodeError;
use crate::models::{Budget, PaymentReminder, Transaction};
use crate::reconcile::reconcile_with;
use log::info;
use serde::Serialize;
use std::io::{Cursor, Read};
use zip::ZipArchive;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveContents {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub payment_reminders: Vec<PaymentReminder>,
}

/// Decode every recognised CSV member. Budgets come back exactly as exported.
///
/// When two members map to the same kind, the later one in the archive wins.
pub fn read_archive(bytes: &[u8], diag: &dyn Diagnostics) -> Result<ArchiveContents, DecodeError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut contents = ArchiveContents::default();

    for i in 0..archive.len() {
        let mut member = archive.by_index(i)?;
        if member.is_dir() {
            continue;
        }
        let name = member.name().to_string();
        if !name.ends_with(".csv") {
            continue;
        }
        let Some(kind) = RecordKind::from_member_name(&name) else {
            diag.member_ignored(&name);
            continue;
        };

        let mut raw = Vec::new();
        member
            .read_to_end(&mut raw)
            .map_err(|source| DecodeError::Member {
                name: name.clone(),
                source,
            })?;
        let text = String::from_utf8_lossy(&raw);

        let decoded = decode_member(kind, &text, diag);
        diag.member_decoded(&name, kind, decoded.len());
        match decoded {
            DecodedMember::Transactions(v) => contents.transactions = v,
            DecodedMember::Budgets(v) => contents.budgets = v,
            DecodedMember::PaymentReminders(v) => contents.payment_reminders = v,
        }
    }
    Ok(contents)
}

/// Decode an export archive and reconcile its budgets against its transactions.
pub fn load(bytes: &[u8], diag: &dyn Diagnostics) -> Result<ArchiveContents, DecodeError> {
    let mut contents = read_archive(bytes, diag)?;
    contents.budgets = reconcile_with(&contents.budgets, &contents.transactions, diag);
    info!(
        "Loaded {} transactions, {} budgets, {} payment reminders",
        contents.transactions.len(),
        contents.budgets.len(),
        contents.payment_reminders.len()
    );
    Ok(contents)
}
