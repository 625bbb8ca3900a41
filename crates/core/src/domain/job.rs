// Job Entity & Settings Value Object

use crate::domain::catalog::{JobKind, MaterialKind};
use crate::domain::money::Money;
use serde::{Deserialize, Serialize};

/// Job ID: monotonically assigned, never reused within one controller.
pub type JobId = u64;

/// A print job instantiated from a catalog kind.
///
/// Never mutated in place. Re-customization builds a new [`Settings`],
/// not a new job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub kind: JobKind,
    pub created_at: i64, // epoch ms
}

impl Job {
    /// Create a new job.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique job ID (injected, not generated)
    /// * `kind` - Catalog kind
    /// * `created_at` - Creation timestamp in epoch ms (injected, not system time)
    pub fn new(id: JobId, kind: JobKind, created_at: i64) -> Self {
        Self {
            id,
            kind,
            created_at,
        }
    }

    /// Base cost plus all material surcharges.
    pub fn total_cost(&self, settings: &Settings) -> Money {
        self.kind.cost() + settings.total_material_cost()
    }

    /// Base duration plus all material time modifiers.
    pub fn total_duration_min(&self, settings: &Settings) -> u32 {
        self.kind.base_duration_min() + settings.total_time_modifier_min()
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.kind, f)
    }
}

/// The materials applied to one job instance.
///
/// Duplicates are permitted and insertion order is preserved for display;
/// neither affects the derived totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    materials: Vec<MaterialKind>,
}

impl Settings {
    pub fn new(materials: Vec<MaterialKind>) -> Self {
        Self { materials }
    }

    /// Zero materials is a valid configuration.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn materials(&self) -> &[MaterialKind] {
        &self.materials
    }

    pub fn total_time_modifier_min(&self) -> u32 {
        self.materials.iter().map(|m| m.time_modifier_min()).sum()
    }

    pub fn total_material_cost(&self) -> Money {
        self.materials.iter().map(|m| m.additional_cost()).sum()
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for material in &self.materials {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", material)?;
            first = false;
        }
        Ok(())
    }
}
