// Print Catalog - closed enumerations of job and material types
//
// The catalog is pure data: base durations, costs and values per kind.
// No state, no dispatch.

use crate::domain::error::{DomainError, Result};
use crate::domain::money::Money;
use serde::{Deserialize, Serialize};

/// Billable print job kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobKind {
    HighDetail,
    StandardDetail,
    FastPrint,
}

impl JobKind {
    pub const ALL: [JobKind; 3] = [
        JobKind::HighDetail,
        JobKind::StandardDetail,
        JobKind::FastPrint,
    ];

    pub fn by_index(index: usize) -> Result<JobKind> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(DomainError::InvalidIndex {
                index,
                len: Self::ALL.len(),
            })
    }

    pub fn name(&self) -> &'static str {
        match self {
            JobKind::HighDetail => "High Detail",
            JobKind::StandardDetail => "Standard Detail",
            JobKind::FastPrint => "Fast Print",
        }
    }

    /// Base processing time before material modifiers.
    pub fn base_duration_min(&self) -> u32 {
        match self {
            JobKind::HighDetail => 120,
            JobKind::StandardDetail => 60,
            JobKind::FastPrint => 30,
        }
    }

    pub fn cost(&self) -> Money {
        match self {
            JobKind::HighDetail => Money::from_dollars(45),
            JobKind::StandardDetail => Money::from_dollars(30),
            JobKind::FastPrint => Money::from_dollars(15),
        }
    }

    pub fn profit(&self) -> Money {
        match self {
            JobKind::HighDetail => Money::from_dollars(25),
            JobKind::StandardDetail => Money::from_dollars(15),
            JobKind::FastPrint => Money::from_dollars(5),
        }
    }

    pub fn revenue(&self) -> Money {
        match self {
            JobKind::HighDetail => Money::from_dollars(115),
            JobKind::StandardDetail => Money::from_dollars(70),
            JobKind::FastPrint => Money::from_dollars(35),
        }
    }

    /// Knapsack value of one job of this kind under the given objective.
    ///
    /// Profit and revenue are in cents; Count is a constant 1 so the
    /// planner maximizes the number of jobs instead.
    pub fn objective_value(&self, objective: Objective) -> u64 {
        match objective {
            Objective::Profit => self.profit().cents(),
            Objective::Revenue => self.revenue().cents(),
            Objective::Count => 1,
        }
    }
}

impl std::fmt::Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: time = {} min, cost = {}",
            self.name(),
            self.base_duration_min(),
            self.cost()
        )
    }
}

/// Filament material applied to a job. Each adds time and cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialKind {
    Pla,
    Abs,
    Nylon,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 3] = [MaterialKind::Pla, MaterialKind::Abs, MaterialKind::Nylon];

    pub fn by_index(index: usize) -> Result<MaterialKind> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(DomainError::InvalidIndex {
                index,
                len: Self::ALL.len(),
            })
    }

    pub fn name(&self) -> &'static str {
        match self {
            MaterialKind::Pla => "PLA",
            MaterialKind::Abs => "ABS",
            MaterialKind::Nylon => "Nylon",
        }
    }

    pub fn time_modifier_min(&self) -> u32 {
        match self {
            MaterialKind::Pla => 5,
            MaterialKind::Abs => 10,
            MaterialKind::Nylon => 15,
        }
    }

    pub fn additional_cost(&self) -> Money {
        match self {
            MaterialKind::Pla => Money::from_dollars(10),
            MaterialKind::Abs => Money::from_dollars(20),
            MaterialKind::Nylon => Money::from_dollars(30),
        }
    }

    /// The minimal filament surcharge, used when pricing speculative jobs.
    pub fn cheapest() -> MaterialKind {
        Self::ALL
            .into_iter()
            .min_by_key(|m| m.additional_cost())
            .unwrap_or(MaterialKind::Pla)
    }
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (+{} min, +{})",
            self.name(),
            self.time_modifier_min(),
            self.additional_cost()
        )
    }
}

/// What the planner maximizes. Supplied per invocation, never hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Objective {
    Profit,
    Revenue,
    Count,
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Objective::Profit => write!(f, "profit"),
            Objective::Revenue => write!(f, "revenue"),
            Objective::Count => write!(f, "job count"),
        }
    }
}
