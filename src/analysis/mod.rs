//! Analysis tools for evaluated game trees

pub mod stats;

pub use stats::{OutcomeDistribution, TreeStats};
