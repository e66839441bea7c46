//! Platform Crate - Technical Infrastructure
//!
//! Domain-agnostic building blocks for the portal backend:
//! - Password hashing (Argon2id) with registration policy checks
//! - JWT encoding/decoding (HS256)
//! - `Authorization: Bearer` header extraction

pub mod bearer;
pub mod jwt;
pub mod password;
