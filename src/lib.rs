//! CareerPath - learning progress gamification and salary outlook
//!
//! Two pure engines evaluate a [`UserProgressSnapshot`]:
//!
//! 1. **Achievements**: a catalog of achievements and milestones, unlock
//!    checks, points and levels, and the summary a dashboard renders.
//!
//! 2. **Salary**: a deterministic estimate over the NSQF framework with
//!    multi-year projections, insights and recommendations.
//!
//! Around them sit a TOML configuration layer for overriding the built-in
//! tables and a flat JSON store for per-user progress.

pub mod achievements;
pub mod config;
pub mod domain;
pub mod salary;
pub mod store;

pub use domain::*;
