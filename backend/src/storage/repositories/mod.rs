// Repository modules
pub mod appointment_repository;
pub mod session_repository;
pub mod theme_repository;

// Re-export repository types
pub use appointment_repository::AppointmentRepository;
pub use session_repository::SessionRepository;
pub use theme_repository::ThemeRepository;
