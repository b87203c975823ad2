use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::{Datelike, NaiveDate};

/// Well-known keys in the browser's key-value storage
pub mod storage_keys {
    /// JSON array holding every appointment
    pub const APPOINTMENTS: &str = "appointments";
    /// `"true"` while a staff member is signed in
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    /// `"dark"` or `"light"`
    pub const THEME: &str = "theme";
}

/// A single booked appointment.
///
/// Serialized as `{"date":"yyyy-MM-dd","time":"HH:mm","name":..,"doctor":..}`.
/// Records created by this application also carry a generated `id`; older
/// records without one are still accepted and are matched by their natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Calendar date in `yyyy-MM-dd` form
    pub date: String,
    /// Local time in zero-padded `HH:mm` form
    pub time: String,
    /// Patient name, picked from the clinic roster
    #[serde(rename = "name")]
    pub patient_name: String,
    /// Doctor name, picked from the clinic roster
    #[serde(rename = "doctor")]
    pub doctor_name: String,
    /// Generated identifier, absent on records written before ids existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Appointment {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        patient_name: impl Into<String>,
        doctor_name: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            patient_name: patient_name.into(),
            doctor_name: doctor_name.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The natural key `(date, time, patient, doctor)`
    pub fn key(&self) -> AppointmentKey {
        AppointmentKey {
            date: self.date.clone(),
            time: self.time.clone(),
            patient_name: self.patient_name.clone(),
            doctor_name: self.doctor_name.clone(),
        }
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} with {}",
            self.date, self.time, self.patient_name, self.doctor_name
        )
    }
}

/// Natural key of an appointment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentKey {
    pub date: String,
    pub time: String,
    pub patient_name: String,
    pub doctor_name: String,
}

/// The user-editable part of an appointment (the date comes from the selected day)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub time: String,
    pub patient_name: String,
    pub doctor_name: String,
}

impl AppointmentDraft {
    pub fn new(
        time: impl Into<String>,
        patient_name: impl Into<String>,
        doctor_name: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            patient_name: patient_name.into(),
            doctor_name: doctor_name.into(),
        }
    }
}

/// A user intent forwarded from the appointment modal to the reconciler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppointmentIntent {
    /// Append a new appointment on the target date
    Create(AppointmentDraft),
    /// Replace `original` with the draft values
    Update {
        original: Appointment,
        draft: AppointmentDraft,
    },
    /// Remove the given appointment
    Delete(Appointment),
}

impl AppointmentIntent {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentIntent::Create(_) => "create",
            AppointmentIntent::Update { .. } => "update",
            AppointmentIntent::Delete(_) => "delete",
        }
    }
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Filler day from the month before the displayed one
    PreviousMonth,
    /// Actual day within the displayed month
    CurrentMonth,
    /// Filler day from the month after the displayed one
    NextMonth,
}

/// Represents a single cell in the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    pub is_past: bool,
    /// Appointments on this day in list order (empty for filler cells)
    pub appointments: Vec<Appointment>,
}

impl DayCell {
    /// A non-interactive cell from an adjacent month
    pub fn filler(date: NaiveDate, day_type: CalendarDayType) -> Self {
        Self {
            date,
            day: date.day(),
            day_type,
            is_today: false,
            is_past: false,
            appointments: Vec::new(),
        }
    }

    pub fn belongs_to_displayed_month(&self) -> bool {
        self.day_type == CalendarDayType::CurrentMonth
    }

    /// Whether clicking this cell may open the appointment modal
    pub fn is_selectable(&self) -> bool {
        self.belongs_to_displayed_month() && !self.is_past
    }

    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// The first `max` appointments; the rest are summarized as "+N more"
    pub fn visible_appointments(&self, max: usize) -> &[Appointment] {
        &self.appointments[..self.appointments.len().min(max)]
    }

    pub fn hidden_count(&self, max: usize) -> usize {
        self.appointments.len().saturating_sub(max)
    }
}

/// One row of the month grid, always seven cells from Sunday to Saturday
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarWeek {
    pub days: Vec<DayCell>,
}

/// A month laid out as week rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthGrid {
    pub month: u32,
    pub year: i32,
    /// Filler cells before day 1 (0 = month starts on Sunday)
    pub lead_offset: u32,
    pub days_in_month: u32,
    pub weeks: Vec<CalendarWeek>,
}

impl MonthGrid {
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn current_month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells().filter(|cell| cell.belongs_to_displayed_month())
    }

    pub fn find_cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.current_month_cells().find(|cell| cell.date == date)
    }
}

/// A single day's appointments for the list-style view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayView {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_past: bool,
    /// Sorted ascending by time
    pub appointments: Vec<Appointment>,
}

impl DayView {
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Which calendar layout to render for the current viewport
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewVariant {
    /// Desktop month grid
    Grid,
    /// Mobile single-day list
    Day,
}

impl ViewVariant {
    /// Narrow viewports get the day list, everything else the month grid
    pub fn for_viewport_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            ViewVariant::Day
        } else {
            ViewVariant::Grid
        }
    }
}

/// Colour scheme preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level pages of the application
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Route {
    Login,
    Calendar,
}

/// Credentials entered on the login page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Form state for the appointment modal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentFormState {
    pub time: String,
    pub patient_name: String,
    pub doctor_name: String,
    /// The appointment being edited, `None` when adding a new one
    pub editing: Option<Appointment>,
    pub error_message: Option<String>,
}

impl AppointmentFormState {
    pub fn for_edit(appointment: &Appointment) -> Self {
        Self {
            time: appointment.time.clone(),
            patient_name: appointment.patient_name.clone(),
            doctor_name: appointment.doctor_name.clone(),
            editing: Some(appointment.clone()),
            error_message: None,
        }
    }

    pub fn draft(&self) -> AppointmentDraft {
        AppointmentDraft::new(
            self.time.trim(),
            self.patient_name.trim(),
            self.doctor_name.trim(),
        )
    }

    /// The intent this form submits: an update when editing, otherwise a create
    pub fn to_intent(&self) -> AppointmentIntent {
        match &self.editing {
            Some(original) => AppointmentIntent::Update {
                original: original.clone(),
                draft: self.draft(),
            },
            None => AppointmentIntent::Create(self.draft()),
        }
    }
}

/// Validation result for appointment form input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentFormValidation {
    pub is_valid: bool,
    pub errors: Vec<AppointmentValidationError>,
}

impl AppointmentFormValidation {
    /// Message shown to the user when the form is rejected
    pub fn user_message(&self) -> String {
        let missing_field = self.errors.iter().any(|error| {
            matches!(
                error,
                AppointmentValidationError::MissingTime
                    | AppointmentValidationError::MissingPatient
                    | AppointmentValidationError::MissingDoctor
            )
        });

        if missing_field {
            "Fill all fields".to_string()
        } else {
            self.errors
                .first()
                .map(|error| error.to_string())
                .unwrap_or_default()
        }
    }
}

/// Specific appointment validation errors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppointmentValidationError {
    MissingTime,
    MissingPatient,
    MissingDoctor,
    InvalidTime(String),
    InvalidDate(String),
}

impl fmt::Display for AppointmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentValidationError::MissingTime => write!(f, "Please choose a time"),
            AppointmentValidationError::MissingPatient => write!(f, "Please select a patient"),
            AppointmentValidationError::MissingDoctor => write!(f, "Please select a doctor"),
            AppointmentValidationError::InvalidTime(value) => {
                write!(f, "'{}' is not a valid time (expected HH:mm)", value)
            }
            AppointmentValidationError::InvalidDate(value) => {
                write!(f, "'{}' is not a valid date (expected yyyy-MM-dd)", value)
            }
        }
    }
}

/// Clinic-wide settings for the scheduler
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchedulerConfig {
    pub patients: Vec<String>,
    pub doctors: Vec<String>,
    /// Appointment chips shown per grid cell before "+N more"
    pub max_visible_appointments: usize,
    /// Viewports narrower than this (in CSS pixels) get the day view
    pub mobile_breakpoint_px: u32,
    pub staff_email: String,
    pub staff_password: String,
    /// Artificial delay before the login result is shown
    pub login_delay_ms: u32,
    pub past_date_notice: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            patients: vec![
                "John Doe".to_string(),
                "Jane Smith".to_string(),
                "Alice Roy".to_string(),
                "David Paul".to_string(),
            ],
            doctors: vec![
                "Dr. Smith".to_string(),
                "Dr. Emily".to_string(),
                "Dr. Raj".to_string(),
                "Dr. Kavya".to_string(),
            ],
            max_visible_appointments: 3,
            mobile_breakpoint_px: 768,
            staff_email: "staff@clinic.com".to_string(),
            staff_password: "123456".to_string(),
            login_delay_ms: 800,
            past_date_notice: "appointment not possible".to_string(),
        }
    }
}
