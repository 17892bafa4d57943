//! # CourseBuilder Architecture
//!
//! CourseBuilder assembles a course: an ordered list of modules, links and
//! uploaded files that survives restarts. It is a **UI-agnostic library**
//! with a command-line client; a graphical or web front end would drive the
//! same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders items, handles terminal I/O    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the item store, open form, item menu, file host     │
//! │  - Normalizes inputs (positions → ids)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per user action, returns CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (items.rs, editor.rs, reorder.rs, menu.rs)            │
//! │  - Item store with write-through persistence                │
//! │  - Create/edit form state machine                           │
//! │  - Single-element moves                                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Substrate (store/, host.rs)                                │
//! │  - Key-value text store: FileStore, InMemoryStore           │
//! │  - File host for uploaded blobs                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence
//!
//! The whole collection is stored as one JSON array under a single key
//! (`"modules"` by default). It is read once when a course is opened and
//! rewritten after every change. See [`items`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each user action
//! - [`items`]: The ordered item collection
//! - [`editor`]: Create/edit form protocol
//! - [`reorder`]: Drag-and-drop moves
//! - [`menu`]: Per-item contextual menu
//! - [`host`]: Uploaded file storage
//! - [`store`]: Key-value persistence
//! - [`model`]: Core data types (`Item`, `ItemKind`, `FileRef`)
//! - [`config`]: Configuration management
//! - [`init`]: Locating and opening a course
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod host;
pub mod init;
pub mod items;
pub mod menu;
pub mod model;
pub mod reorder;
pub mod store;
