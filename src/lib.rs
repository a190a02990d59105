//! Cycle Companion - Menstrual cycle tracking core
//!
//! This crate implements the cycle phase ring geometry, daily tracking
//! selections and the read models behind the dashboard, tracker, insights
//! and settings screens.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
