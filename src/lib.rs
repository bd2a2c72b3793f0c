//! Frontdesk - Session State Engine for Voice Conversations
//!
//! This crate implements the stateful core behind a family of short voice
//! interactions: slot-filling session records, keyword extraction, a
//! single-active-service router, teach-back scoring, and JSON file
//! persistence with history-aware context generation. Speech I/O,
//! transport, and worker lifecycle live in the embedding host.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
