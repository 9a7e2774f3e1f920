//! Snapshot domain models.

use serde::{Deserialize, Serialize};

use crate::holdings::Holding;
use crate::reports::PortfolioSummary;

/// A named, frozen copy of the holdings list taken at save time.
///
/// The copy is deep: later edits to the live list never touch a snapshot,
/// and only `name` may change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// Creation-timestamp string, unique within the store.
    pub id: String,
    pub name: String,
    /// Human-readable local timestamp; display only, never a sort key.
    pub saved_at: String,
    #[serde(default)]
    pub data: Vec<Holding>,
}

/// A snapshot joined with the summary computed from its frozen data.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDetail {
    pub snapshot: PortfolioSnapshot,
    pub summary: PortfolioSummary,
}
