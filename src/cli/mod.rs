//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`dashboard`]: Interactive terminal dashboard
//! - [`listing`]: Print the products of one view
//! - [`review_once`]: Submit a single review decision
//! - [`stats`]: Print catalogue statistics or the API health report
//!
//! Output formatting utilities are in [`output`].

pub mod dashboard;
pub mod listing;
pub mod output;
pub mod review_once;
pub mod stats;
