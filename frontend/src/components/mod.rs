pub mod appointment_modal;
pub mod calendar;
pub mod calendar_page;
pub mod day_view;
pub mod header;
pub mod login;
