//! # Educheck Architecture
//!
//! Educheck is a **UI-agnostic checklist engine** for a personal study
//! planner: named checklists of tasks with subject, priority, and due-date
//! metadata, derived status, filtering, and aggregate progress. It is not an
//! application that happens to have some library code—it's the engine any
//! client (desktop shell, web view, TUI) renders from and drives.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the one in-memory collection per session            │
//! │  - Persists wholesale after every mutation                  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the collection                  │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StorageBackend trait (key → JSON blob)          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, and never assumes a terminal
//! or a DOM. Notifications come back as [`commands::CmdMessage`] values for
//! whatever sink the caller wires up; rendering engine state is entirely
//! the caller's problem.
//!
//! ## Sessions, Not Globals
//!
//! There is no ambient "current user". A [`session::Session`] is passed
//! into [`api::ChecklistApi::new`] and namespaces every storage key; a
//! guest session behaves as an empty, non-persisting collection. One live
//! api instance owns one user's collection; switching users means building
//! a new instance.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation, plus result/message types
//! - [`model`]: Core data types (`Checklist`, `Task`, `Priority`, `Subject`)
//! - [`status`]: Derived status classification and due-date formatting
//! - [`store`]: Storage abstraction and implementations
//! - [`session`]: Explicit per-user session context
//! - [`settings`]: Per-user notification preferences
//! - [`quotes`]: Daily quote rotation
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod quotes;
pub mod session;
pub mod settings;
pub mod status;
pub mod store;
