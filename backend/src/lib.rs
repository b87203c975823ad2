//! # Backend
//!
//! Contains all non-UI logic for the clinic calendar.
//!
//! This crate is the layer that brings together:
//! - **Domain**: month grid generation, appointment reconciliation, day
//!   grouping, form validation, session and theme handling
//! - **Storage**: the key-value store abstraction and the repositories that
//!   read and write appointments, the session flag and the theme preference
//!
//! The backend is UI-agnostic. The browser frontend plugs its localStorage in
//! through [`storage::KeyValueStore`]; tests use [`storage::MemoryStore`].
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! View controllers (CalendarViewController, AppContext)
//!     ↓
//! Domain services (CalendarService, AppointmentReconciler, ...)
//!     ↓
//! Storage (KeyValueStore + repositories)
//! ```

pub mod domain;
pub mod storage;

pub use domain::*;
pub use storage::*;
