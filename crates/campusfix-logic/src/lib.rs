//! Pure simulation logic for CampusFix.
//!
//! This crate holds the rules of the campus maintenance game that do not
//! depend on a running session: static reference data, severity tables,
//! scoring and risk formulas, and the simulated clock arithmetic. Functions
//! take plain data and return results, so every rule is unit-testable without
//! a random source or an event log.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Campus buildings and the incident description pool |
//! | [`display`] | Currency and risk formatting for log lines and reports |
//! | [`scoring`] | Resolution score, overdue/neglect penalties, risk accrual |
//! | [`severity`] | Severity levels, their profiles, and the weighted severity roll |
//! | [`time`] | Day/hour simulated clock arithmetic |

pub mod catalog;
pub mod display;
pub mod scoring;
pub mod severity;
pub mod time;
