//! Shared types, errors, and configuration for Nagorik.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error taxonomy
//! - Configuration management
//! - JWT session tokens and auth payloads
//! - SMTP email service

pub mod auth;
pub mod config;
pub mod email;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::Claims;
pub use config::AppConfig;
pub use email::{EmailError, EmailService};
pub use error::{RegistryError, RegistryResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
