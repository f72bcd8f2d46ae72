//! Profile engine: habits text in, footprint and recommendations out.
//!
//! Responsibilities:
//!
//! - classify habits into keyword groups and estimate load (`habits`)
//! - stage the action plan and pick renewable options (`plan`)
//! - sample efficiency tips (`tips`)
//! - assemble the full `Profile` (`profile`)

pub mod habits;
pub mod plan;
pub mod profile;
pub mod tips;

pub use habits::{BASE_LOAD_KW, HABIT_RULES, HabitMatch, HabitRule, classify_habits};
pub use profile::{compute_profile, compute_profile_with_rng, parse_daily_hours};
