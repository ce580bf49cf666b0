//! Read-only GitHub REST client.
//!
//! Implements [`srcmove_core::GithubApiPort`] over a pluggable transport.
//! Production code uses [`DefaultGithubApi`], backed by reqwest.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultGithubApi is meant to be used through the GithubApiPort trait, not
// its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod models;
mod paths;
mod port;
mod profiler;
mod transport;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultGithubApi;

// Configuration
pub use config::GithubClientConfig;

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockito as _;
