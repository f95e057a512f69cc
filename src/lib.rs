//! Decision Engine - Risk-adjusted comparison of options under uncertainty.
//!
//! For each named option, described by a discrete probability distribution
//! over numeric outcomes, this crate computes expected value, variance, and
//! the risk-adjusted score `EV − λ·Var`, then ranks the options with
//! deterministic tie handling. The scoring core is pure and stateless; a thin
//! HTTP adapter exposes it as a service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
