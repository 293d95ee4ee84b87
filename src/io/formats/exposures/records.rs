// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Catalog records stored in the footer.
//!
//! Records are plain data. Cross references (a mode's platform, a species'
//! actor range) are carried as stored and never checked against the other
//! catalogs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scenario the simulation was run from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub name: String,
    pub guid: Uuid,
}

/// One simulated platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRecord {
    pub actor_id: i32,
    pub name: String,
    pub guid: Uuid,
}

/// One mode, owned by the platform identified by `platform_guid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRecord {
    pub actor_id: i32,
    pub name: String,
    pub guid: Uuid,
    pub platform_guid: Uuid,
}

/// One species of animats.
///
/// Its animats hold the contiguous actor IDs
/// `start_actor_id .. start_actor_id + animat_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub animat_count: i32,
    pub start_actor_id: i32,
    pub name: String,
    pub guid: Uuid,
}

impl SpeciesRecord {
    /// Whether `actor_id` falls in this species' actor range.
    ///
    /// Non-positive counts own no actors.
    pub fn contains_actor(&self, actor_id: i32) -> bool {
        let start = i64::from(self.start_actor_id);
        let end = start + i64::from(self.animat_count.max(0));
        (start..end).contains(&i64::from(actor_id))
    }
}
