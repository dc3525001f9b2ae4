//! # CommUnityFix Architecture
//!
//! CommUnityFix is a **UI-agnostic community-issue reporting library**. The
//! bundled CLI is just one client; the same core could sit behind a web
//! dashboard or any other front end.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the session; enforces the admin gate                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: submit, triage, query, export       │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SnapshotStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The session
//!
//! All state for one interactive run lives in [`session::Session`]: the
//! report collection (loaded once at startup) and the admin-authentication
//! flag. Every mutation rewrites the full JSON snapshot; a failed save is a
//! warning, never a rollback.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, never writes to stdout/stderr, and never calls
//! `std::process::exit`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`session`]: Per-run state: report collection + auth flag
//! - [`store`]: Snapshot persistence abstraction and implementations
//! - [`model`]: Core data types (`Report`, `Comment`, status enums)
//! - [`contacts`]: Static emergency-contact and tips tables
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod contacts;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
