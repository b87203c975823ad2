//! # Calendar View Controller
//!
//! The state behind the calendar page, shared by the desktop month grid and
//! the mobile day list so both variants apply the same rules.
//!
//! ## Responsibilities:
//! - Holding the appointment list loaded once when the page mounts
//! - Month navigation
//! - Building the month grid and single-day views from the list
//! - Forwarding modal intents to the reconciler, persisting the result and
//!   replacing the in-memory list
//! - Blocking every change on past dates

use chrono::NaiveDate;
use log::{info, warn};
use shared::{Appointment, AppointmentIntent, DayView, MonthGrid, SchedulerConfig, ViewVariant};

use super::appointment_form::AppointmentFormService;
use super::appointment_service::{AppointmentReconciler, ReconcileError};
use super::calendar::CalendarService;
use super::day_grouping::appointments_for_day_view;
use crate::storage::{AppointmentRepository, KeyValueStore};

#[derive(Clone, Debug)]
pub struct CalendarViewController<S: KeyValueStore> {
    repository: AppointmentRepository<S>,
    calendar_service: CalendarService,
    reconciler: AppointmentReconciler,
    config: SchedulerConfig,
    appointments: Vec<Appointment>,
    /// Day 1 of the displayed month
    reference_month: NaiveDate,
    today: NaiveDate,
}

impl<S: KeyValueStore> CalendarViewController<S> {
    /// Load the stored appointments and show the month containing `today`
    pub fn load(store: S, today: NaiveDate) -> Self {
        Self::load_with_config(store, today, SchedulerConfig::default())
    }

    pub fn load_with_config(store: S, today: NaiveDate, config: SchedulerConfig) -> Self {
        let repository = AppointmentRepository::new(store);
        let appointments = repository.load();
        let calendar_service = CalendarService::new();
        let reconciler =
            AppointmentReconciler::with_form_service(AppointmentFormService::with_config(config.clone()));

        Self {
            repository,
            reference_month: calendar_service.month_start(today),
            calendar_service,
            reconciler,
            config,
            appointments,
            today,
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn reference_month(&self) -> NaiveDate {
        self.reference_month
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Move "today" forward, e.g. when the page stays open past midnight
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn month_grid(&self) -> MonthGrid {
        self.calendar_service
            .generate_month_grid(self.reference_month, self.today, &self.appointments)
    }

    pub fn month_title(&self) -> String {
        self.calendar_service.format_month_title(self.reference_month)
    }

    pub fn show_previous_month(&mut self) {
        self.reference_month = self.calendar_service.previous_month(self.reference_month);
        info!("📅 Navigated to previous month: {}", self.month_title());
    }

    pub fn show_next_month(&mut self) {
        self.reference_month = self.calendar_service.next_month(self.reference_month);
        info!("📅 Navigated to next month: {}", self.month_title());
    }

    /// Display the month containing `date`
    pub fn show_month_of(&mut self, date: NaiveDate) {
        self.reference_month = self.calendar_service.month_start(date);
    }

    /// Which layout to render at the given viewport width
    pub fn view_variant(&self, viewport_width: u32) -> ViewVariant {
        ViewVariant::for_viewport_width(viewport_width, self.config.mobile_breakpoint_px)
    }

    /// The appointments on `date`, sorted by time
    pub fn day_view(&self, date: NaiveDate) -> DayView {
        let iso_date = date.format("%Y-%m-%d").to_string();

        DayView {
            date,
            is_today: date == self.today,
            is_past: date < self.today,
            appointments: appointments_for_day_view(&self.appointments, &iso_date),
        }
    }

    /// The day to show in the appointment modal; past days cannot be opened
    pub fn open_day(&self, date: NaiveDate) -> Result<DayView, ReconcileError> {
        let day = self.day_view(date);
        if day.is_past {
            warn!("⛔ {} is in the past: {}", day.iso_date(), self.config.past_date_notice);
            return Err(ReconcileError::PastDate(day.iso_date()));
        }
        Ok(day)
    }

    /// Apply `intent` on `date`, persist the new list and keep it.
    ///
    /// On any error the in-memory list is left as it was.
    pub fn submit(&mut self, date: NaiveDate, intent: AppointmentIntent) -> Result<(), ReconcileError> {
        let iso_date = date.format("%Y-%m-%d").to_string();

        if date < self.today {
            warn!("⛔ Refusing to {} an appointment on past date {}", intent.label(), iso_date);
            return Err(ReconcileError::PastDate(iso_date));
        }

        let updated = self
            .reconciler
            .reconcile(&self.appointments, &iso_date, intent, self.today)?;

        self.repository.save(&updated)?;
        self.appointments = updated;
        Ok(())
    }
}
