//! Core use-case services.
//!
//! # Responsibility
//! - Accept raw user tokens and turn them into typed repository calls.
//! - Keep the shell decoupled from storage details.
//!
//! # Invariants
//! - Identifier tokens are parsed before any store round trip, so a
//!   malformed token never reaches a mutation path.

pub mod feedback_service;
pub mod survey_service;
