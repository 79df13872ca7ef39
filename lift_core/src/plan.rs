//! Workout planning and weight progression.
//!
//! Turns selected exercises into concrete prescriptions:
//! - Readiness check → intensity adjustment advice
//! - Sets and reps from the profile goal (or catalog defaults)
//! - Suggested weight from the profile's progression history
//! - Goal-dependent weight increase after a logged session

use crate::profile::Profile;
use crate::types::{AdjustLevel, DefaultLoad, Exercise, Goal, Readiness};

/// Suggested starting weight for weighted exercises the profile has never logged
/// and the catalog has no weight for
pub const FALLBACK_WEIGHT: f64 = 10.0;

/// A selected exercise with its prescription for today
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedExercise {
    pub exercise: Exercise,
    pub sets: u32,
    pub reps: u32,
    pub load: DefaultLoad,
}

/// Intensity adjustment from a readiness check
///
/// Poor recovery markers take precedence over good sleep.
pub fn adjust_level(readiness: &Readiness) -> AdjustLevel {
    if readiness.rpe > 8 || readiness.stress > 7 || readiness.soreness > 6 {
        AdjustLevel::Reduce
    } else if readiness.sleep >= 8 && readiness.stress <= 4 {
        AdjustLevel::Boost
    } else {
        AdjustLevel::None
    }
}

/// Working reps per set for a goal
pub fn target_reps(goal: Goal) -> u32 {
    match goal {
        Goal::Strength => 5,
        Goal::Hypertrophy => 10,
        Goal::Endurance => 15,
        Goal::Recomposition => 8,
    }
}

/// Fractional weight increase applied after each logged session
pub fn progression_rate(goal: Goal) -> f64 {
    match goal {
        Goal::Strength => 0.05,
        Goal::Hypertrophy => 0.025,
        Goal::Endurance | Goal::Recomposition => 0.01,
    }
}

/// Planned sets: one extra when warm-up sets are enabled
pub fn planned_sets(warmup: bool) -> u32 {
    if warmup {
        5
    } else {
        4
    }
}

/// Training volume in weight × reps
pub fn volume(weight: f64, reps: u64) -> f64 {
    weight * reps as f64
}

/// Today's suggested load for an exercise
///
/// A weight stored on the profile wins; otherwise the catalog default.
pub fn suggested_load(exercise: &Exercise, profile: Option<&Profile>) -> DefaultLoad {
    profile
        .and_then(|p| p.exercise_weights.get(&exercise.name))
        .map(|w| DefaultLoad::Weight(*w))
        .unwrap_or(exercise.default_load)
}

/// Prescription for one exercise
///
/// Without a profile the catalog defaults are used as-is.
pub fn plan_exercise(exercise: &Exercise, profile: Option<&Profile>) -> PlannedExercise {
    let (sets, reps) = match profile {
        Some(p) => (planned_sets(p.settings.warmup), target_reps(p.goal)),
        None => (exercise.default_sets, exercise.default_reps),
    };

    PlannedExercise {
        exercise: exercise.clone(),
        sets,
        reps,
        load: suggested_load(exercise, profile),
    }
}

/// Advance the profile's suggested weight for an exercise after it was logged
///
/// Returns the new suggestion, or `None` for exercises without a weight
/// (bodyweight or timed) that the profile has never tracked.
pub fn advance_weight(profile: &mut Profile, exercise: &str, default_load: Option<DefaultLoad>) -> Option<f64> {
    let current = match profile.exercise_weights.get(exercise) {
        Some(w) => *w,
        None => match default_load {
            Some(DefaultLoad::Weight(w)) => w,
            Some(DefaultLoad::Unweighted(_)) => return None,
            None => FALLBACK_WEIGHT,
        },
    };

    let next = current * (1.0 + progression_rate(profile.goal));
    profile.exercise_weights.insert(exercise.to_string(), next);

    tracing::info!(
        "Progressed {} from {:.1} to {:.1} lbs ({:?})",
        exercise,
        current,
        next,
        profile.goal
    );
    Some(next)
}
