#![forbid(unsafe_code)]

//! Core domain model and business logic for liftlog.
//!
//! This crate provides:
//! - Domain types (splits, exercises, session logs)
//! - Catalog management
//! - Load-balancing exercise selection
//! - Persistence (accumulator, day logs, cycle tags, profiles)
//! - Trailing-window summaries, adjustment and exercise trends, reports
//! - Planning and weight progression

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod store;
pub mod accumulator;
pub mod selector;
pub mod session_log;
pub mod aggregator;
pub mod cycle;
pub mod adjustments;
pub mod profile;
pub mod plan;
pub mod report;
pub mod clock;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, CatalogRecord};
pub use config::Config;
pub use accumulator::MuscleHitAccumulator;
pub use selector::{rank, select, RankedExercise};
pub use session_log::{SessionDraft, SessionLogStore};
pub use aggregator::{
    adjustment_counts, exercise_trend, summarize, volume_by_exercise, AdjustmentCounts,
    SummaryWindow, TrendPoint,
};
pub use cycle::CycleTags;
pub use adjustments::AdjustmentLog;
pub use profile::{NewProfile, Profile, ProfileStore};
pub use plan::{plan_exercise, PlannedExercise};
pub use clock::{Clock, FixedClock, SystemClock};
