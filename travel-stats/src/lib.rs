//! Travel statistics from Träwelling exports.
//!
//! Loads one or more check-in exports, works out which transit company ran
//! each trip, and prints summaries of where, how and with whom you
//! travelled.

pub mod categories;
pub mod classify;
pub mod config;
pub mod declarative;
pub mod domain;
pub mod export;
pub mod operators;
pub mod report;
