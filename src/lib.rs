//! Statutory Benefit Engine
//!
//! This crate computes end-of-service gratuity, overtime premium pay, and
//! annual leave entitlement with encashment from per-jurisdiction labor-law
//! rule sets, using exact decimal arithmetic and producing an audit trail
//! for every result.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod facade;
pub mod models;
