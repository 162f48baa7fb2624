//! Serde mirror of the catalog snapshot JSON.
//!
//! Schema: `DEPARTMENT -> COURSE -> SECTION -> record`, e.g.
//! `snapshot["CPSC"]["CPSC 121"]["CPSC 121 101"]`. Records carry parallel
//! arrays indexed by meeting-pattern row.

use indexmap::IndexMap;
use serde::Deserialize;

/// One raw section record as it appears in the snapshot file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionRecord {
    #[serde(default)]
    pub activity: Vec<String>,
    /// Each entry is a space-separated day list, e.g. `"Mon Wed Fri"`.
    #[serde(default)]
    pub days: Vec<String>,
    /// `"HH:MM"` strings; may be empty or missing for untimed sections.
    #[serde(default)]
    pub start_time: Vec<String>,
    #[serde(default)]
    pub end_time: Vec<String>,
    #[serde(default)]
    pub term: Vec<String>,
    #[serde(default)]
    pub interval: String,
    #[serde(default)]
    pub status: String,
}

/// `IndexMap` keeps snapshot order, so section enumeration (and therefore
/// schedule enumeration) is deterministic across identical requests.
pub type Snapshot = IndexMap<String, IndexMap<String, IndexMap<String, SectionRecord>>>;
