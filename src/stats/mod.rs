//! Stats module - per-category counting and derived estimates

mod calculator;

pub use calculator::{
    estimate_home_services, estimate_online_solutions, CategoryCounts, CategorySummary,
    CountsCalculator,
};
