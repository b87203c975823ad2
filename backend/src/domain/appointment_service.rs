//! Appointment reconciliation.
//!
//! Applies a create/update/delete intent to the full appointment list and
//! returns the new full list. The input list is never modified; persisting the
//! result is the caller's job.
//!
//! Records are located by their generated id when the target has one. Records
//! without an id are matched on the natural key `(date, time, patient,
//! doctor)`: an update replaces the first match and a delete removes every
//! match.

use chrono::NaiveDate;
use log::{info, warn};
use shared::{Appointment, AppointmentDraft, AppointmentFormValidation, AppointmentIntent};
use thiserror::Error;
use uuid::Uuid;

use super::appointment_form::{parse_iso_date, AppointmentFormService};

/// Reasons an intent is rejected; the message is meant for the user
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("{}", .0.user_message())]
    Validation(AppointmentFormValidation),

    #[error("'{0}' is not a valid date")]
    InvalidDate(String),

    #[error("Appointments cannot be changed on past dates ({0})")]
    PastDate(String),

    #[error("Appointment not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Applies appointment intents to the full list
#[derive(Clone, Debug, Default)]
pub struct AppointmentReconciler {
    form_service: AppointmentFormService,
}

impl AppointmentReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form_service(form_service: AppointmentFormService) -> Self {
        Self { form_service }
    }

    /// Produce the list that results from applying `intent` on `date`.
    ///
    /// Creates and updates are rejected when a field is missing or malformed,
    /// or when `date` is before `today`. Deletes are not date-checked here.
    pub fn reconcile(
        &self,
        current: &[Appointment],
        date: &str,
        intent: AppointmentIntent,
        today: NaiveDate,
    ) -> Result<Vec<Appointment>, ReconcileError> {
        match intent {
            AppointmentIntent::Create(draft) => {
                self.validate(date, &draft, today)?;

                let appointment = Appointment::new(
                    date,
                    draft.time.trim(),
                    draft.patient_name.trim(),
                    draft.doctor_name.trim(),
                )
                .with_id(Uuid::new_v4().to_string());

                info!("➕ Creating appointment {}", appointment);

                let mut updated = current.to_vec();
                updated.push(appointment);
                Ok(updated)
            }
            AppointmentIntent::Update { original, draft } => {
                self.validate(date, &draft, today)?;

                let position = current
                    .iter()
                    .position(|candidate| matches_record(candidate, &original))
                    .ok_or_else(|| {
                        warn!("⚠️ Update target not found: {}", original);
                        ReconcileError::NotFound(original.to_string())
                    })?;

                let replacement = Appointment {
                    date: date.to_string(),
                    time: draft.time.trim().to_string(),
                    patient_name: draft.patient_name.trim().to_string(),
                    doctor_name: draft.doctor_name.trim().to_string(),
                    id: current[position].id.clone(),
                };

                info!("✏️ Updating appointment {} -> {}", original, replacement);

                let mut updated = current.to_vec();
                updated[position] = replacement;
                Ok(updated)
            }
            AppointmentIntent::Delete(record) => {
                let updated: Vec<Appointment> = current
                    .iter()
                    .filter(|candidate| !matches_record(candidate, &record))
                    .cloned()
                    .collect();

                info!(
                    "🗑️ Deleting appointment {} ({} removed)",
                    record,
                    current.len() - updated.len()
                );

                Ok(updated)
            }
        }
    }

    fn validate(
        &self,
        date: &str,
        draft: &AppointmentDraft,
        today: NaiveDate,
    ) -> Result<(), ReconcileError> {
        let validation = self.form_service.validate_draft(draft);
        if !validation.is_valid {
            return Err(ReconcileError::Validation(validation));
        }

        let target = parse_iso_date(date).ok_or_else(|| ReconcileError::InvalidDate(date.to_string()))?;
        if target < today {
            return Err(ReconcileError::PastDate(date.to_string()));
        }

        Ok(())
    }
}

/// Whether `candidate` is the record identified by `target`
pub fn matches_record(candidate: &Appointment, target: &Appointment) -> bool {
    match &target.id {
        Some(id) => candidate.id.as_deref() == Some(id.as_str()),
        None => candidate.key() == target.key(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::day_grouping::appointments_for_day_view;
    use shared::AppointmentValidationError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    fn create(time: &str, patient: &str, doctor: &str) -> AppointmentIntent {
        AppointmentIntent::Create(AppointmentDraft::new(time, patient, doctor))
    }

    fn legacy_list() -> Vec<Appointment> {
        vec![
            Appointment::new("2025-07-05", "10:00", "John Doe", "Dr. Smith"),
            Appointment::new("2025-07-06", "11:00", "Jane Smith", "Dr. Emily"),
            Appointment::new("2025-07-07", "12:00", "Alice Roy", "Dr. Raj"),
        ]
    }

    #[test]
    fn test_create_appends_record() {
        let reconciler = AppointmentReconciler::new();
        let current = legacy_list();

        let updated = reconciler
            .reconcile(&current, "2025-07-05", create("09:00", "Jane Smith", "Dr. Kavya"), today())
            .unwrap();

        assert_eq!(updated.len(), current.len() + 1);
        assert_eq!(&updated[..3], &current[..]);

        let created = updated.last().unwrap();
        assert_eq!(
            created.key(),
            Appointment::new("2025-07-05", "09:00", "Jane Smith", "Dr. Kavya").key()
        );
        assert!(created.id.is_some());
    }

    #[test]
    fn test_create_does_not_modify_input() {
        let reconciler = AppointmentReconciler::new();
        let current = legacy_list();
        let snapshot = current.clone();

        let _ = reconciler
            .reconcile(&current, "2025-07-05", create("09:00", "Jane Smith", "Dr. Kavya"), today())
            .unwrap();

        assert_eq!(current, snapshot);
    }

    #[test]
    fn test_create_allows_duplicate_slot() {
        let reconciler = AppointmentReconciler::new();
        let current = legacy_list();

        let updated = reconciler
            .reconcile(&current, "2025-07-05", create("10:00", "John Doe", "Dr. Smith"), today())
            .unwrap();

        assert_eq!(updated.len(), 4);
        assert_eq!(updated[0].key(), updated[3].key());
    }

    #[test]
    fn test_create_generates_distinct_ids() {
        let reconciler = AppointmentReconciler::new();
        let once = reconciler
            .reconcile(&[], "2025-07-05", create("10:00", "John Doe", "Dr. Smith"), today())
            .unwrap();
        let twice = reconciler
            .reconcile(&once, "2025-07-05", create("10:00", "John Doe", "Dr. Smith"), today())
            .unwrap();

        assert_ne!(twice[0].id, twice[1].id);
    }

    #[test]
    fn test_create_rejects_missing_fields() {
        let reconciler = AppointmentReconciler::new();

        let err = reconciler
            .reconcile(&[], "2025-07-05", create("10:00", "", "Dr. Smith"), today())
            .unwrap_err();

        match &err {
            ReconcileError::Validation(validation) => {
                assert_eq!(validation.errors, vec![AppointmentValidationError::MissingPatient]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), "Fill all fields");
    }

    #[test]
    fn test_create_rejects_past_date() {
        let reconciler = AppointmentReconciler::new();

        let err = reconciler
            .reconcile(&[], "2025-06-30", create("10:00", "John Doe", "Dr. Smith"), today())
            .unwrap_err();

        assert!(matches!(err, ReconcileError::PastDate(ref d) if d == "2025-06-30"));
    }

    #[test]
    fn test_create_allowed_today() {
        let reconciler = AppointmentReconciler::new();
        let updated = reconciler
            .reconcile(&[], "2025-07-01", create("08:00", "John Doe", "Dr. Smith"), today())
            .unwrap();
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn test_create_rejects_malformed_date() {
        let reconciler = AppointmentReconciler::new();
        let err = reconciler
            .reconcile(&[], "07/05/2025", create("10:00", "John Doe", "Dr. Smith"), today())
            .unwrap_err();
        assert!(matches!(err, ReconcileError::InvalidDate(_)));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let reconciler = AppointmentReconciler::new();
        let current = legacy_list();

        let updated = reconciler
            .reconcile(
                &current,
                "2025-07-06",
                AppointmentIntent::Update {
                    original: current[1].clone(),
                    draft: AppointmentDraft::new("15:30", "David Paul", "Dr. Raj"),
                },
                today(),
            )
            .unwrap();

        assert_eq!(updated.len(), current.len());
        assert_eq!(updated[0], current[0]);
        assert_eq!(updated[2], current[2]);
        assert_eq!(
            updated[1],
            Appointment::new("2025-07-06", "15:30", "David Paul", "Dr. Raj")
        );
    }

    #[test]
    fn test_update_replaces_only_first_legacy_match() {
        let reconciler = AppointmentReconciler::new();
        let duplicate = Appointment::new("2025-07-05", "10:00", "John Doe", "Dr. Smith");
        let current = vec![duplicate.clone(), duplicate.clone()];

        let updated = reconciler
            .reconcile(
                &current,
                "2025-07-05",
                AppointmentIntent::Update {
                    original: duplicate.clone(),
                    draft: AppointmentDraft::new("11:00", "John Doe", "Dr. Smith"),
                },
                today(),
            )
            .unwrap();

        assert_eq!(updated[0].time, "11:00");
        assert_eq!(updated[1], duplicate);
    }

    #[test]
    fn test_update_by_id_targets_exact_record() {
        let reconciler = AppointmentReconciler::new();
        let first = Appointment::new("2025-07-05", "10:00", "John Doe", "Dr. Smith").with_id("a");
        let second = Appointment::new("2025-07-05", "10:00", "John Doe", "Dr. Smith").with_id("b");
        let current = vec![first.clone(), second.clone()];

        let updated = reconciler
            .reconcile(
                &current,
                "2025-07-05",
                AppointmentIntent::Update {
                    original: second.clone(),
                    draft: AppointmentDraft::new("16:00", "John Doe", "Dr. Smith"),
                },
                today(),
            )
            .unwrap();

        assert_eq!(updated[0], first);
        assert_eq!(updated[1].time, "16:00");
        assert_eq!(updated[1].id.as_deref(), Some("b"));
    }

    #[test]
    fn test_update_missing_record() {
        let reconciler = AppointmentReconciler::new();
        let ghost = Appointment::new("2025-07-05", "18:00", "Nobody", "Dr. Smith");

        let err = reconciler
            .reconcile(
                &legacy_list(),
                "2025-07-05",
                AppointmentIntent::Update {
                    original: ghost,
                    draft: AppointmentDraft::new("18:30", "Nobody", "Dr. Smith"),
                },
                today(),
            )
            .unwrap_err();

        assert!(matches!(err, ReconcileError::NotFound(_)));
    }

    #[test]
    fn test_update_rejects_past_date() {
        let reconciler = AppointmentReconciler::new();
        let old = Appointment::new("2025-06-20", "10:00", "John Doe", "Dr. Smith");

        let err = reconciler
            .reconcile(
                &[old.clone()],
                "2025-06-20",
                AppointmentIntent::Update {
                    original: old,
                    draft: AppointmentDraft::new("11:00", "John Doe", "Dr. Smith"),
                },
                today(),
            )
            .unwrap_err();

        assert!(matches!(err, ReconcileError::PastDate(_)));
    }

    #[test]
    fn test_delete_removes_every_legacy_match() {
        let reconciler = AppointmentReconciler::new();
        let duplicate = Appointment::new("2025-07-05", "10:00", "John Doe", "Dr. Smith");
        let other = Appointment::new("2025-07-05", "11:00", "Jane Smith", "Dr. Emily");
        let current = vec![duplicate.clone(), other.clone(), duplicate.clone()];

        let updated = reconciler
            .reconcile(&current, "2025-07-05", AppointmentIntent::Delete(duplicate), today())
            .unwrap();

        assert_eq!(updated, vec![other]);
    }

    #[test]
    fn test_delete_by_id_removes_one() {
        let reconciler = AppointmentReconciler::new();
        let first = Appointment::new("2025-07-05", "10:00", "John Doe", "Dr. Smith").with_id("a");
        let second = Appointment::new("2025-07-05", "10:00", "John Doe", "Dr. Smith").with_id("b");

        let updated = reconciler
            .reconcile(
                &[first.clone(), second],
                "2025-07-05",
                AppointmentIntent::Delete(Appointment::new("2025-07-05", "10:00", "John Doe", "Dr. Smith").with_id("b")),
                today(),
            )
            .unwrap();

        assert_eq!(updated, vec![first]);
    }

    #[test]
    fn test_delete_is_not_date_checked() {
        let reconciler = AppointmentReconciler::new();
        let old = Appointment::new("2025-06-20", "10:00", "John Doe", "Dr. Smith");

        let updated = reconciler
            .reconcile(&[old.clone()], "2025-06-20", AppointmentIntent::Delete(old), today())
            .unwrap();

        assert!(updated.is_empty());
    }

    #[test]
    fn test_delete_unknown_record_is_noop() {
        let reconciler = AppointmentReconciler::new();
        let current = legacy_list();
        let ghost = Appointment::new("2025-07-05", "18:00", "Nobody", "Dr. Smith");

        let updated = reconciler
            .reconcile(&current, "2025-07-05", AppointmentIntent::Delete(ghost), today())
            .unwrap();

        assert_eq!(updated, current);
    }

    #[test]
    fn test_create_then_day_view_orders_by_time() {
        let reconciler = AppointmentReconciler::new();

        let list = reconciler
            .reconcile(&[], "2025-07-05", create("10:00", "John Doe", "Dr. Smith"), today())
            .unwrap();
        let list = reconciler
            .reconcile(&list, "2025-07-05", create("09:00", "Jane Smith", "Dr. Kavya"), today())
            .unwrap();

        let day = appointments_for_day_view(&list, "2025-07-05");
        let names: Vec<&str> = day.iter().map(|a| a.patient_name.as_str()).collect();
        assert_eq!(names, vec!["Jane Smith", "John Doe"]);
    }
}
