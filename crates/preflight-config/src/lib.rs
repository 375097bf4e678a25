// preflight-config/src/lib.rs
// ============================================================================
// Module: Preflight Config Library
// Description: Canonical config model, validation, and component assembly.
// Purpose: Single source of truth for preflight.toml semantics.
// Dependencies: preflight-core, serde, toml, url
// ============================================================================

//! ## Overview
//! `preflight-config` defines the canonical configuration model for
//! Preflight. It provides strict, fail-closed validation, deployment
//! environment selection, and assembly of validated sections into runtime
//! components.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod env;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use env::ENVIRONMENT_ENV_VAR;
pub use env::EnvironmentReader;
pub use examples::config_toml_example;
