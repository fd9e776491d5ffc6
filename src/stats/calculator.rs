//! Counts Calculator Module
//! Accumulates actor locations per category and derives the two estimated
//! auxiliary counts.

use crate::categories::CategoryMapping;
use crate::data::ActionColumns;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Share of locations assumed to also offer a home service (~0.3%).
pub const HOME_SERVICES_RATE: f64 = 0.003;
/// Share of locations assumed to have an online counterpart (~0.1%).
pub const ONLINE_SOLUTIONS_RATE: f64 = 0.001;
/// Online solutions always reported on top of the proportional share.
pub const ONLINE_SOLUTIONS_BASE: u64 = 2;

/// Estimated home services for a location count. Never below 1.
pub fn estimate_home_services(lieux: u64) -> u64 {
    ((lieux as f64 * HOME_SERVICES_RATE).floor() as u64).max(1)
}

/// Estimated online solutions for a location count. Never below 1.
pub fn estimate_online_solutions(lieux: u64) -> u64 {
    ((lieux as f64 * ONLINE_SOLUTIONS_RATE).floor() as u64 + ONLINE_SOLUTIONS_BASE).max(1)
}

/// Output record for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub lieux: u64,
    pub services_a_domicile: u64,
    pub solutions_en_ligne: u64,
}

impl CategorySummary {
    pub fn from_lieux(lieux: u64) -> Self {
        Self {
            lieux,
            services_a_domicile: estimate_home_services(lieux),
            solutions_en_ligne: estimate_online_solutions(lieux),
        }
    }

    pub fn total(&self) -> u64 {
        self.lieux + self.services_a_domicile + self.solutions_en_ligne
    }
}

/// Per-category location counter. Every category of the mapping starts at zero.
#[derive(Debug, Clone)]
pub struct CategoryCounts<'m> {
    mapping: &'m CategoryMapping,
    counts: HashMap<&'static str, u64>,
    total_rows: u64,
}

impl<'m> CategoryCounts<'m> {
    pub fn new(mapping: &'m CategoryMapping) -> Self {
        Self {
            mapping,
            counts: mapping.ids().map(|id| (id, 0)).collect(),
            total_rows: 0,
        }
    }

    /// Record one actor row. Each matching category is incremented once,
    /// however many of its tokens the row carries.
    pub fn record(&mut self, tokens: &HashSet<&str>) {
        self.total_rows += 1;
        let mapping = self.mapping;
        for category in mapping.matching(tokens) {
            *self.counts.entry(category.id).or_insert(0) += 1;
        }
    }

    pub fn get(&self, id: &str) -> Option<u64> {
        self.counts.get(id).copied()
    }

    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }

    /// Summaries in mapping order.
    pub fn summaries(&self) -> Vec<(&'static str, CategorySummary)> {
        self.mapping
            .ids()
            .map(|id| {
                let lieux = self.counts.get(id).copied().unwrap_or(0);
                (id, CategorySummary::from_lieux(lieux))
            })
            .collect()
    }
}

/// Runs the per-row accumulation.
pub struct CountsCalculator;

impl CountsCalculator {
    /// Count every row of the resolved action columns.
    pub fn count<'m>(
        columns: &ActionColumns<'_>,
        mapping: &'m CategoryMapping,
    ) -> CategoryCounts<'m> {
        let mut counts = CategoryCounts::new(mapping);
        for tokens in columns.rows() {
            counts.record(&tokens);
        }
        counts
    }
}
