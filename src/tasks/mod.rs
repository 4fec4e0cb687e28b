//! Background Tasks Module
//!
//! Contains the timer tasks that run alongside the cache.
//!
//! # Tasks
//! - Expiry: one-shot delayed removal of a single cache entry

mod expiry;

pub use expiry::spawn_expiry;
