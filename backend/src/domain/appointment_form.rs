//! Appointment form domain logic.
//!
//! Validation of the values entered in the appointment modal. The UI only
//! shows the messages; which inputs are acceptable is decided here.

use chrono::{NaiveDate, NaiveTime};
use shared::{
    AppointmentDraft, AppointmentFormState, AppointmentFormValidation,
    AppointmentValidationError, SchedulerConfig,
};

/// Appointment form service that handles validation and form setup
#[derive(Clone, Debug, Default)]
pub struct AppointmentFormService {
    config: SchedulerConfig,
}

impl AppointmentFormService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Create an empty form for adding an appointment
    pub fn create_form_state() -> AppointmentFormState {
        AppointmentFormState::default()
    }

    /// Validate the draft entered in the modal
    pub fn validate_draft(&self, draft: &AppointmentDraft) -> AppointmentFormValidation {
        let mut errors = Vec::new();

        let time = draft.time.trim();
        if time.is_empty() {
            errors.push(AppointmentValidationError::MissingTime);
        } else if !is_valid_time(time) {
            errors.push(AppointmentValidationError::InvalidTime(time.to_string()));
        }

        if draft.patient_name.trim().is_empty() {
            errors.push(AppointmentValidationError::MissingPatient);
        }

        if draft.doctor_name.trim().is_empty() {
            errors.push(AppointmentValidationError::MissingDoctor);
        }

        AppointmentFormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Patients offered in the modal's select
    pub fn patient_options(&self) -> &[String] {
        &self.config.patients
    }

    /// Doctors offered in the modal's select
    pub fn doctor_options(&self) -> &[String] {
        &self.config.doctors
    }
}

/// Whether `value` is a zero-padded 24-hour `HH:mm` time
pub fn is_valid_time(value: &str) -> bool {
    value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok()
}

/// Parse a zero-padded `yyyy-MM-dd` date
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
