//! # Recipebox Architecture
//!
//! Recipebox is a **UI-agnostic recipe library** with a small CLI client.
//! Everything the CLI does goes through the library, so the same core
//! could back a desktop window or a web page.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (names, typed ingredient entries)      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecipeStore owns the collection, persists on mutation    │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! The whole collection is rewritten after every `add` and `delete`.
//! Storage failures never abort an operation: they are logged through
//! `tracing` and the change stays in memory for the rest of the session.
//! A missing data file is an empty collection; an unreadable one is
//! logged, treated as empty, and left on disk until the next write.
//!
//! Recipe names are case-insensitive lookup keys but are not unique:
//! `find` returns the first match in insertion order and `delete` removes
//! every match.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the recipe store
//! - [`model`]: Core data types (`Recipe`, `Ingredient`)
//! - [`input`]: Parsing of typed ingredient entries
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod store;
