//! # Domain Module
//!
//! Contains all business logic for the clinic calendar.
//!
//! ## Module Organization
//!
//! - **calendar**: month grid generation, month navigation and date formatting
//! - **day_grouping**: filtering and ordering appointments for a single day
//! - **appointment_form**: validation of the appointment modal input
//! - **appointment_service**: the reconciler that applies create/update/delete
//!   intents to the full appointment list
//! - **session_service**: hardcoded staff login, logout and route guarding
//! - **theme_service**: dark/light preference with OS fallback
//! - **app_context**: session and theme state read once at startup
//! - **calendar_view**: the controller shared by the grid and day views
//!
//! ## Business Rules
//!
//! - Appointments cannot be created, edited or deleted on past dates
//! - Time, patient and doctor are all required
//! - Every mutation produces a new full list, which is then persisted whole
//! - Day views list appointments in ascending time order

pub mod app_context;
pub mod appointment_form;
pub mod appointment_service;
pub mod calendar;
pub mod calendar_view;
pub mod day_grouping;
pub mod session_service;
pub mod theme_service;

pub use app_context::*;
pub use appointment_form::*;
pub use appointment_service::*;
pub use calendar::*;
pub use calendar_view::*;
pub use day_grouping::*;
pub use session_service::*;
pub use theme_service::*;
