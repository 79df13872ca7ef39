//! Load-balancing exercise selector.
//!
//! Picks the exercises of a split whose target muscles have accumulated the
//! least exposure so far:
//!
//! 1. Pool = the split's exercises, in catalog order
//! 2. Load = sum of the accumulator scores of the exercise's muscles
//! 3. Stable ascending sort by load (ties keep catalog order)
//! 4. Take the first `k`
//! 5. Credit one hit to every muscle of every chosen exercise
//!
//! Dual-muscle exercises are scored by the sum of both muscles, so they fall
//! behind single-muscle exercises sooner. That bias is intentional.

use crate::{Catalog, Exercise, MuscleHitAccumulator, SplitCategory};

/// An exercise together with the load it was ranked by
#[derive(Clone, Debug, PartialEq)]
pub struct RankedExercise {
    pub exercise: Exercise,
    pub load: u64,
}

/// Rank a split's exercises by current muscle load without mutating anything
pub fn rank(
    split: SplitCategory,
    accumulator: &MuscleHitAccumulator,
    catalog: &Catalog,
) -> Vec<RankedExercise> {
    let mut ranked: Vec<RankedExercise> = catalog
        .pool(split)
        .map(|exercise| RankedExercise {
            load: exercise_load(exercise, accumulator, catalog),
            exercise: exercise.clone(),
        })
        .collect();

    // sort_by_key is stable
    ranked.sort_by_key(|r| r.load);
    ranked
}

/// Sum of accumulated hits over an exercise's muscles
pub fn exercise_load(
    exercise: &Exercise,
    accumulator: &MuscleHitAccumulator,
    catalog: &Catalog,
) -> u64 {
    catalog
        .muscles
        .muscles_for(&exercise.name)
        .iter()
        .map(|m| accumulator.get(m))
        .sum()
}

/// Select the `k` least-loaded exercises of a split and record the hits
///
/// Returns `min(k, pool size)` exercises. An empty pool or `k == 0` returns
/// nothing and leaves the accumulator untouched. The caller persists the
/// accumulator afterwards.
pub fn select(
    split: SplitCategory,
    k: usize,
    accumulator: &mut MuscleHitAccumulator,
    catalog: &Catalog,
) -> Vec<Exercise> {
    if k == 0 {
        tracing::debug!("Selection for {} requested zero exercises", split);
        return Vec::new();
    }

    let chosen: Vec<Exercise> = rank(split, accumulator, catalog)
        .into_iter()
        .take(k)
        .map(|r| r.exercise)
        .collect();

    if chosen.is_empty() {
        tracing::info!("No exercises in catalog for split {}", split);
        return chosen;
    }

    for exercise in &chosen {
        for muscle in catalog.muscles.muscles_for(&exercise.name) {
            accumulator.increment(muscle, 1);
        }
    }

    tracing::info!(
        "Selected {} exercises for {}: {:?}",
        chosen.len(),
        split,
        chosen.iter().map(|e| e.name.as_str()).collect::<Vec<_>>()
    );
    chosen
}
