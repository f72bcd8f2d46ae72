//! Efficiency tip selection.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::tips::{general_tips, tips_for};
use crate::domain::HabitGroup;

pub const MAX_TIPS: usize = 4;
const TIPS_PER_GROUP: usize = 2;

/// Pick up to [`MAX_TIPS`] unique tips.
///
/// Each matched group contributes two distinct tips from its pool. Short
/// lists are topped up with independent draws from the general pool (draws
/// may repeat), then duplicates are dropped keeping first occurrence.
pub fn select_tips<R: Rng + ?Sized>(groups: &[HabitGroup], rng: &mut R) -> Vec<&'static str> {
    let mut picked: Vec<&'static str> = Vec::new();

    for &group in groups {
        picked.extend(tips_for(group).choose_multiple(rng, TIPS_PER_GROUP).copied());
    }

    while picked.len() < MAX_TIPS {
        match general_tips().choose(rng) {
            Some(tip) => picked.push(*tip),
            None => break,
        }
    }

    let mut unique: Vec<&'static str> = Vec::with_capacity(MAX_TIPS);
    for tip in picked {
        if !unique.contains(&tip) {
            unique.push(tip);
        }
    }
    unique.truncate(MAX_TIPS);
    unique
}
