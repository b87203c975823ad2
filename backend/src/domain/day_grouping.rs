//! Per-day views over the appointment list.
//!
//! Appointments are matched to a day by exact `yyyy-MM-dd` string equality.
//! Times are zero-padded `HH:mm`, so sorting the strings sorts chronologically
//! within a day.

use shared::Appointment;
use std::collections::HashMap;

/// Appointments on `date`, in list order
pub fn appointments_for_date(appointments: &[Appointment], date: &str) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|appointment| appointment.date == date)
        .cloned()
        .collect()
}

/// Appointments on `date`, ordered by time for the single-day list
///
/// The sort is stable: appointments at the same time keep their list order.
pub fn appointments_for_day_view(appointments: &[Appointment], date: &str) -> Vec<Appointment> {
    let mut day = appointments_for_date(appointments, date);
    sort_by_time(&mut day);
    day
}

pub fn sort_by_time(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| a.time.cmp(&b.time));
}

/// Group appointments by date string, preserving list order inside each day
pub fn group_by_date(appointments: &[Appointment]) -> HashMap<String, Vec<Appointment>> {
    let mut by_date: HashMap<String, Vec<Appointment>> = HashMap::new();

    for appointment in appointments {
        by_date
            .entry(appointment.date.clone())
            .or_default()
            .push(appointment.clone());
    }

    by_date
}
