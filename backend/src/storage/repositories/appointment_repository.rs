use anyhow::Result;
use log::{info, warn};
use serde_json::Value;
use shared::{storage_keys, Appointment};

use crate::storage::traits::KeyValueStore;

/// Repository for the appointment list
///
/// The whole list lives under a single key as one JSON array; every save
/// rewrites it completely.
#[derive(Clone, Debug)]
pub struct AppointmentRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AppointmentRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load every stored appointment.
    ///
    /// Never fails: a missing key, an unreadable store or a value that is not
    /// a JSON array all come back as an empty list. Malformed entries inside
    /// the array are skipped so the rest of the list survives the next save.
    pub fn load(&self) -> Vec<Appointment> {
        let raw = match self.store.get_item(storage_keys::APPOINTMENTS) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("⚠️ Could not read appointments from storage: {}", e);
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("⚠️ Stored appointments are not a JSON array, starting empty: {}", e);
                return Vec::new();
            }
        };

        let total = entries.len();
        let appointments: Vec<Appointment> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Appointment>(entry) {
                Ok(appointment) => Some(appointment),
                Err(e) => {
                    warn!("⚠️ Skipping malformed appointment #{}: {}", index, e);
                    None
                }
            })
            .collect();

        info!(
            "📋 Loaded {} of {} stored appointments",
            appointments.len(),
            total
        );
        appointments
    }

    /// Replace the stored list with `appointments`
    pub fn save(&self, appointments: &[Appointment]) -> Result<()> {
        let raw = serde_json::to_string(appointments)?;
        self.store.set_item(storage_keys::APPOINTMENTS, &raw)?;
        info!("💾 Saved {} appointments", appointments.len());
        Ok(())
    }
}
