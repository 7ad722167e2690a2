//! Core domain logic for the FlatFly relocation assistant.
//!
//! Everything in this crate is synchronous and side-effect free: the
//! housing search, the outreach composer, the onboarding checklist, and
//! the help responder are plain functions over plain values. The HTTP
//! router in [`housing::router`] is the only axum-aware surface; the
//! `services/api` binary assembles it into a running service.

pub mod assistant;
pub mod auth;
pub mod config;
pub mod error;
pub mod housing;
pub mod onboarding;
pub mod telemetry;
