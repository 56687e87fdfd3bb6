//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, hex tokens, constant-time compare)
//! - Cookie management
//! - Environment configuration helpers
//! - Blob storage client (upload + signed URLs)
//! - Caller identity lookup against the same project's auth service

pub mod config;
pub mod cookie;
pub mod crypto;
pub mod identity;
pub mod storage;
