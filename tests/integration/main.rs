//! Integration tests for singleton lifecycle strategies
//!
//! Exercises the public facade the way a host application would: shared
//! resolvers, concurrent obtain, persistence across slot lifetimes, and
//! the build-time preload protocol feeding runtime-mode lookups.

mod common;
mod host;
mod lifecycle;
mod persistence;
