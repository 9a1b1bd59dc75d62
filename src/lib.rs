//! Statutory wage engine for Korean standard labor contracts
//!
//! This crate turns a weekly working schedule into the monthly pay a
//! standard labor contract must state under the Labor Standards Act: base
//! pay, weekly holiday pay (주휴수당), overtime pay and night pay, each with
//! an audit trail of the rules applied, plus a check against the minimum
//! wage in force.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
