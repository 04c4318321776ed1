//! # Study Planner Backend
//!
//! Contains all non-UI logic for the study planner application.
//!
//! This crate serves as the orchestration layer that brings together:
//! - **Domain**: application state, onboarding, exam, progress and chat rules
//! - **Storage**: the key-value persistence boundary and the adapter that
//!   mirrors profile and tasks into it
//! - **IO**: the client for the external text generation service
//!
//! The crate is UI-agnostic. The yew frontend drives it in the browser, and
//! every piece of it can be exercised natively in tests with an in-memory
//! store and a scripted generation transport.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! Domain Layer (state machines, StudyShell)
//!     ↓                      ↓
//! Storage Layer          IO Layer (GenerationClient → transport)
//! ```

pub mod domain;
pub mod io;
pub mod storage;

pub use domain::*;
pub use io::*;
pub use storage::*;
