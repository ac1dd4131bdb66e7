//! Domain types and pure logic for the trivia API.
//!
//! This crate has no database or HTTP dependencies so the pagination and
//! quiz-selection rules can be unit tested without a running server.

pub mod error;
pub mod pagination;
pub mod quiz;
pub mod types;
