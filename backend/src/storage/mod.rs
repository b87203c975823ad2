//! # Storage Module
//!
//! Handles all persistence for the clinic calendar.
//!
//! Everything is kept in a flat key-value store (the browser's localStorage in
//! production). The domain never touches the store directly; it goes through
//! the repositories here, each of which owns one well-known key from
//! [`shared::storage_keys`].
//!
//! ## Key Responsibilities
//!
//! - **Appointments**: the full list, serialized as one JSON array
//! - **Session**: the `isLoggedIn` flag
//! - **Theme**: the `dark` / `light` preference
//!
//! Reads are forgiving: a missing or corrupt value is treated as "no data"
//! rather than an error.

pub mod memory;
pub mod repositories;
pub mod traits;

pub use memory::MemoryStore;
pub use repositories::{AppointmentRepository, SessionRepository, ThemeRepository};
pub use traits::KeyValueStore;
