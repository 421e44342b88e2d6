//! Shared types, errors, and configuration for Inspecta.
//!
//! This crate provides common types used across all other crates:
//! - Lenient decimal amounts for free-text numeric form input
//! - Typed IDs for backend records and local drafts
//! - Pagination types for list endpoints
//! - The injected authentication context (session lifecycle)
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::{AuthContext, LoginRequest, LoginResponse, Role, Session, SessionUser};
pub use config::{AppConfig, BackendConfig, TrackingConfig};
pub use error::{AppError, AppResult};
pub use jwt::{AccessClaims, JwtError};
