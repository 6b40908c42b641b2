//! LogEntry - one dated row of the user's health journal.
//!
//! # Ownership
//!
//! Every entry carries the `UserId` of its owner. Entries never reference
//! the cycle anchor; the calendar joins them by date at read time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LogEntryId, PainLevel, Timestamp, UserId, ValidationError};

use super::{Mood, Symptom};

/// Maximum length for an event title.
pub const MAX_EVENT_LENGTH: usize = 200;

/// Optional free-text health notes attached to an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthNotes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_condition: Option<String>,
}

impl HealthNotes {
    pub fn is_empty(&self) -> bool {
        self.allergies.is_none() && self.medications.is_none() && self.health_condition.is_none()
    }
}

/// A single journal entry.
///
/// # Invariants
///
/// - `event` is 1-200 characters, not blank
/// - `symptoms` and `moods` keep insertion order; duplicates are allowed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    id: LogEntryId,
    user_id: UserId,
    date: NaiveDate,
    event: String,
    #[serde(default)]
    symptoms: Vec<Symptom>,
    #[serde(default)]
    moods: Vec<Mood>,
    #[serde(default)]
    pain_level: Option<PainLevel>,
    #[serde(default)]
    notes: HealthNotes,
    recorded_at: Timestamp,
}

impl LogEntry {
    /// Creates a new entry recorded now.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the event title is blank
    /// - `OutOfRange` if the event title is too long
    pub fn new(
        user_id: UserId,
        date: NaiveDate,
        event: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let event = event.into().trim().to_string();
        Self::validate_event(&event)?;

        Ok(Self {
            id: LogEntryId::new(),
            user_id,
            date,
            event,
            symptoms: Vec::new(),
            moods: Vec::new(),
            pain_level: None,
            notes: HealthNotes::default(),
            recorded_at: Timestamp::now(),
        })
    }

    fn validate_event(event: &str) -> Result<(), ValidationError> {
        if event.is_empty() {
            return Err(ValidationError::empty_field("event"));
        }
        let len = event.chars().count();
        if len > MAX_EVENT_LENGTH {
            return Err(ValidationError::out_of_range(
                "event",
                1,
                MAX_EVENT_LENGTH as i64,
                len as i64,
            ));
        }
        Ok(())
    }

    pub fn with_symptoms(mut self, symptoms: impl IntoIterator<Item = Symptom>) -> Self {
        self.symptoms.extend(symptoms);
        self
    }

    pub fn with_moods(mut self, moods: impl IntoIterator<Item = Mood>) -> Self {
        self.moods.extend(moods);
        self
    }

    pub fn with_pain_level(mut self, level: PainLevel) -> Self {
        self.pain_level = Some(level);
        self
    }

    pub fn with_notes(mut self, notes: HealthNotes) -> Self {
        self.notes = notes;
        self
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> LogEntryId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn moods(&self) -> &[Mood] {
        &self.moods
    }

    pub fn pain_level(&self) -> Option<PainLevel> {
        self.pain_level
    }

    pub fn notes(&self) -> &HealthNotes {
        &self.notes
    }

    pub fn recorded_at(&self) -> &Timestamp {
        &self.recorded_at
    }

    /// Checks if the user owns this entry.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_trims_event_title() {
        let entry = LogEntry::new(user(), date(2024, 1, 3), "  Cramps  ").unwrap();
        assert_eq!(entry.event(), "Cramps");
        assert!(entry.symptoms().is_empty());
        assert!(entry.pain_level().is_none());
    }

    #[test]
    fn new_rejects_blank_event() {
        let err = LogEntry::new(user(), date(2024, 1, 3), "   ").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("event"));
    }

    #[test]
    fn new_rejects_overlong_event() {
        let title = "x".repeat(MAX_EVENT_LENGTH + 1);
        assert!(LogEntry::new(user(), date(2024, 1, 3), title).is_err());
    }

    #[test]
    fn tags_keep_order_and_duplicates() {
        let entry = LogEntry::new(user(), date(2024, 1, 3), "Day 3")
            .unwrap()
            .with_symptoms([Symptom::Headache, Symptom::Bloating, Symptom::Headache])
            .with_moods([Mood::Sadness, Mood::Joy]);

        assert_eq!(
            entry.symptoms(),
            &[Symptom::Headache, Symptom::Bloating, Symptom::Headache]
        );
        assert_eq!(entry.moods(), &[Mood::Sadness, Mood::Joy]);
    }

    #[test]
    fn ownership_check() {
        let entry = LogEntry::new(user(), date(2024, 1, 3), "Day 3").unwrap();
        assert!(entry.is_owner(&user()));
        assert!(!entry.is_owner(&UserId::new("someone-else").unwrap()));
    }

    #[test]
    fn serde_round_trip_preserves_entry() {
        let entry = LogEntry::new(user(), date(2024, 1, 3), "Day 3")
            .unwrap()
            .with_pain_level(PainLevel::new(6).unwrap())
            .with_notes(HealthNotes {
                medications: Some("ibuprofen".to_string()),
                ..HealthNotes::default()
            });

        let json = serde_json::to_string(&entry).unwrap();
        let back: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
