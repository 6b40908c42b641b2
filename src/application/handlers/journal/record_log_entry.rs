//! RecordLogEntryHandler - Command handler for adding a journal entry.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::{CommandMetadata, DomainError, PainLevel};
use crate::domain::journal::{HealthNotes, LogEntry, Mood, Symptom};
use crate::ports::LogEntryRepository;

/// Command to record a journal entry for the acting user.
#[derive(Debug, Clone)]
pub struct RecordLogEntryCommand {
    pub date: NaiveDate,
    pub event: String,
    pub symptoms: Vec<Symptom>,
    pub moods: Vec<Mood>,
    /// Raw 1-10 rating from the form.
    pub pain_level: Option<u8>,
    pub notes: HealthNotes,
}

/// Result of a successfully recorded entry.
#[derive(Debug, Clone)]
pub struct RecordLogEntryResult {
    pub entry: LogEntry,
}

/// Handler for recording journal entries.
pub struct RecordLogEntryHandler {
    repository: Arc<dyn LogEntryRepository>,
}

impl RecordLogEntryHandler {
    pub fn new(repository: Arc<dyn LogEntryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordLogEntryCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordLogEntryResult, DomainError> {
        // 1. Build and validate the entry
        let mut entry = LogEntry::new(metadata.user_id.clone(), cmd.date, cmd.event)?
            .with_symptoms(cmd.symptoms)
            .with_moods(cmd.moods)
            .with_notes(Self::normalize_notes(cmd.notes));
        if let Some(level) = cmd.pain_level {
            entry = entry.with_pain_level(PainLevel::new(level)?);
        }

        // 2. Persist
        self.repository.save(&entry).await?;

        info!(
            user_id = %metadata.user_id,
            correlation_id = %metadata.correlation_id(),
            entry_id = %entry.id(),
            "Recorded log entry"
        );

        Ok(RecordLogEntryResult { entry })
    }

    /// Blank note fields count as not provided.
    fn normalize_notes(notes: HealthNotes) -> HealthNotes {
        let clean = |field: Option<String>| {
            field
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
        };
        HealthNotes {
            allergies: clean(notes.allergies),
            medications: clean(notes.medications),
            health_condition: clean(notes.health_condition),
        }
    }
}
