//! Reporting utilities: batch results, totals, text and JSON output.

use crate::domain::{Profile, ProfileTag};

pub mod format;
pub mod response;

pub use format::*;
pub use response::*;

/// One analysed household from a batch run.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub id: String,
    pub profile: Profile,
}

/// Aggregates over a batch run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchTotals {
    pub households: usize,
    pub high_consumers: usize,
    pub carbon_kg: f64,
    pub trees_to_offset: u64,
}

impl BatchTotals {
    pub fn mean_carbon_kg(&self) -> f64 {
        if self.households == 0 {
            0.0
        } else {
            self.carbon_kg / self.households as f64
        }
    }
}

/// Sum monthly carbon and offset trees across a batch.
pub fn summarize_batch(results: &[BatchResult]) -> BatchTotals {
    results.iter().fold(
        BatchTotals {
            households: 0,
            high_consumers: 0,
            carbon_kg: 0.0,
            trees_to_offset: 0,
        },
        |mut acc, r| {
            acc.households += 1;
            if r.profile.has_tag(&ProfileTag::HighConsumer) {
                acc.high_consumers += 1;
            }
            acc.carbon_kg += r.profile.carbon_kg;
            acc.trees_to_offset += r.profile.trees_to_offset;
            acc
        },
    )
}
