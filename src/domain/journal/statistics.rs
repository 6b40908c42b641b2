//! Statistics Summary - symptom, mood and pain frequencies over the last year.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::cycle::shift_days;
use crate::domain::foundation::PainLevel;

use super::{LogEntry, Mood, Symptom};

/// How far back the summary looks, in days.
pub const STATISTICS_WINDOW_DAYS: i64 = 365;

/// Occurrences of one tag and the dates it was logged on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagFrequency<T> {
    pub tag: T,
    pub count: usize,
    pub dates: Vec<NaiveDate>,
}

/// Tag counts for a single calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyFrequency {
    pub year: i32,
    pub month: u32,
    pub entry_count: usize,
    pub symptoms: BTreeMap<Symptom, usize>,
    pub moods: BTreeMap<Mood, usize>,
    pub pain_levels: BTreeMap<PainLevel, usize>,
}

impl MonthlyFrequency {
    fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            entry_count: 0,
            symptoms: BTreeMap::new(),
            moods: BTreeMap::new(),
            pain_levels: BTreeMap::new(),
        }
    }

    /// `YYYY-MM` label for charts.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Frequency summary consumed by the statistics view and report export.
///
/// Tag tables list tags in the order they were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsSummary {
    pub since: NaiveDate,
    pub entry_count: usize,
    pub symptoms: Vec<TagFrequency<Symptom>>,
    pub moods: Vec<TagFrequency<Mood>>,
    pub pain_levels: Vec<TagFrequency<PainLevel>>,
    pub monthly: Vec<MonthlyFrequency>,
}

impl StatisticsSummary {
    /// Compiles the summary from entries dated on or after `today - 365 days`.
    ///
    /// Windowing, month buckets and tag dates all use the entry's journal
    /// `date`. `recorded_at` only orders entries that share a date.
    pub fn compile(entries: &[LogEntry], today: NaiveDate) -> Self {
        let since = shift_days(today, -STATISTICS_WINDOW_DAYS).unwrap_or(NaiveDate::MIN);

        let mut window: Vec<&LogEntry> = entries.iter().filter(|e| e.date() >= since).collect();
        window.sort_by_key(|e| (e.date(), *e.recorded_at()));

        let mut symptoms = Vec::new();
        let mut moods = Vec::new();
        let mut pain_levels = Vec::new();
        let mut monthly: BTreeMap<(i32, u32), MonthlyFrequency> = BTreeMap::new();

        for entry in &window {
            let date = entry.date();
            let month = monthly
                .entry((date.year(), date.month()))
                .or_insert_with(|| MonthlyFrequency::new(date.year(), date.month()));
            month.entry_count += 1;

            for symptom in entry.symptoms() {
                tally(&mut symptoms, *symptom, date);
                *month.symptoms.entry(*symptom).or_insert(0) += 1;
            }
            for mood in entry.moods() {
                tally(&mut moods, *mood, date);
                *month.moods.entry(*mood).or_insert(0) += 1;
            }
            if let Some(level) = entry.pain_level() {
                tally(&mut pain_levels, level, date);
                *month.pain_levels.entry(level).or_insert(0) += 1;
            }
        }

        Self {
            since,
            entry_count: window.len(),
            symptoms,
            moods,
            pain_levels,
            monthly: monthly.into_values().collect(),
        }
    }

    /// Most frequently logged symptom; ties go to the one seen first.
    pub fn most_common_symptom(&self) -> Option<Symptom> {
        most_common(&self.symptoms)
    }

    /// Most frequently logged mood; ties go to the one seen first.
    pub fn most_common_mood(&self) -> Option<Mood> {
        most_common(&self.moods)
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }
}

fn tally<T: PartialEq>(table: &mut Vec<TagFrequency<T>>, tag: T, date: NaiveDate) {
    match table.iter_mut().find(|row| row.tag == tag) {
        Some(row) => {
            row.count += 1;
            row.dates.push(date);
        }
        None => table.push(TagFrequency {
            tag,
            count: 1,
            dates: vec![date],
        }),
    }
}

fn most_common<T: Copy>(table: &[TagFrequency<T>]) -> Option<T> {
    table
        .iter()
        .fold(None::<&TagFrequency<T>>, |best, row| match best {
            Some(b) if b.count >= row.count => Some(b),
            _ => Some(row),
        })
        .map(|row| row.tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(d: NaiveDate) -> LogEntry {
        LogEntry::new(UserId::new("user-1").unwrap(), d, "entry").unwrap()
    }

    #[test]
    fn empty_journal_yields_empty_summary() {
        let summary = StatisticsSummary::compile(&[], date(2024, 6, 1));
        assert!(summary.is_empty());
        assert!(summary.symptoms.is_empty());
        assert!(summary.monthly.is_empty());
        assert_eq!(summary.since, date(2023, 6, 2));
    }

    #[test]
    fn counts_tags_with_dates_in_first_seen_order() {
        let entries = vec![
            entry(date(2024, 1, 2)).with_symptoms([Symptom::Headache, Symptom::Fatigue]),
            entry(date(2024, 1, 1)).with_symptoms([Symptom::Bloating]),
            entry(date(2024, 1, 3)).with_symptoms([Symptom::Headache]),
        ];
        let summary = StatisticsSummary::compile(&entries, date(2024, 1, 31));

        let tags: Vec<_> = summary.symptoms.iter().map(|row| row.tag).collect();
        assert_eq!(tags, vec![Symptom::Bloating, Symptom::Headache, Symptom::Fatigue]);

        let headache = &summary.symptoms[1];
        assert_eq!(headache.count, 2);
        assert_eq!(headache.dates, vec![date(2024, 1, 2), date(2024, 1, 3)]);
        assert_eq!(summary.most_common_symptom(), Some(Symptom::Headache));
    }

    #[test]
    fn duplicate_tags_in_one_entry_count_twice() {
        let entries = vec![entry(date(2024, 1, 2)).with_moods([Mood::Anxiety, Mood::Anxiety])];
        let summary = StatisticsSummary::compile(&entries, date(2024, 1, 31));
        assert_eq!(summary.moods[0].count, 2);
    }

    #[test]
    fn entries_older_than_a_year_are_ignored() {
        let entries = vec![
            entry(date(2023, 1, 1)).with_symptoms([Symptom::Acne]),
            entry(date(2024, 1, 1)).with_symptoms([Symptom::Headache]),
        ];
        let summary = StatisticsSummary::compile(&entries, date(2024, 6, 1));
        assert_eq!(summary.entry_count, 1);
        assert_eq!(summary.symptoms.len(), 1);
        assert_eq!(summary.symptoms[0].tag, Symptom::Headache);
    }

    #[test]
    fn pain_levels_are_tallied() {
        let five = PainLevel::new(5).unwrap();
        let entries = vec![
            entry(date(2024, 1, 1)).with_pain_level(five),
            entry(date(2024, 1, 2)).with_pain_level(five),
            entry(date(2024, 1, 3)),
        ];
        let summary = StatisticsSummary::compile(&entries, date(2024, 1, 31));
        assert_eq!(summary.pain_levels.len(), 1);
        assert_eq!(summary.pain_levels[0].tag, five);
        assert_eq!(summary.pain_levels[0].count, 2);
    }

    #[test]
    fn monthly_breakdown_groups_by_calendar_month() {
        let entries = vec![
            entry(date(2024, 1, 30)).with_symptoms([Symptom::Headache]),
            entry(date(2024, 2, 1)).with_symptoms([Symptom::Headache, Symptom::Acne]),
            entry(date(2024, 2, 14)).with_moods([Mood::Joy]),
        ];
        let summary = StatisticsSummary::compile(&entries, date(2024, 3, 1));

        assert_eq!(summary.monthly.len(), 2);
        let jan = &summary.monthly[0];
        let feb = &summary.monthly[1];
        assert_eq!(jan.label(), "2024-01");
        assert_eq!(jan.entry_count, 1);
        assert_eq!(feb.label(), "2024-02");
        assert_eq!(feb.entry_count, 2);
        assert_eq!(feb.symptoms.get(&Symptom::Acne), Some(&1));
        assert_eq!(feb.moods.get(&Mood::Joy), Some(&1));
    }

    #[test]
    fn most_common_tie_goes_to_first_seen() {
        let entries = vec![
            entry(date(2024, 1, 1)).with_moods([Mood::Sadness]),
            entry(date(2024, 1, 2)).with_moods([Mood::Joy]),
        ];
        let summary = StatisticsSummary::compile(&entries, date(2024, 1, 31));
        assert_eq!(summary.most_common_mood(), Some(Mood::Sadness));
    }

    fn recorded_on(entry: LogEntry, instant: &str) -> LogEntry {
        let mut value = serde_json::to_value(&entry).unwrap();
        value["recorded_at"] = serde_json::Value::String(instant.to_string());
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn backdated_entries_count_toward_their_journal_date() {
        let entries = vec![
            recorded_on(
                entry(date(2024, 1, 31)).with_symptoms([Symptom::Headache]),
                "2024-02-02T09:00:00Z",
            ),
            recorded_on(
                entry(date(2023, 1, 1)).with_symptoms([Symptom::Acne]),
                "2024-02-02T09:05:00Z",
            ),
        ];
        let summary = StatisticsSummary::compile(&entries, date(2024, 3, 1));

        assert_eq!(summary.entry_count, 1);
        assert_eq!(summary.monthly.len(), 1);
        assert_eq!(summary.monthly[0].label(), "2024-01");
        assert_eq!(summary.symptoms[0].dates, vec![date(2024, 1, 31)]);
    }

    #[test]
    fn same_day_entries_keep_recording_order() {
        let entries = vec![
            recorded_on(
                entry(date(2024, 1, 5)).with_moods([Mood::Joy]),
                "2024-01-05T18:00:00Z",
            ),
            recorded_on(
                entry(date(2024, 1, 5)).with_moods([Mood::Sadness]),
                "2024-01-05T08:00:00Z",
            ),
        ];
        let summary = StatisticsSummary::compile(&entries, date(2024, 1, 31));

        let moods: Vec<_> = summary.moods.iter().map(|row| row.tag).collect();
        assert_eq!(moods, vec![Mood::Sadness, Mood::Joy]);
    }

    #[test]
    fn summary_serializes_for_charts() {
        let entries = vec![entry(date(2024, 1, 2)).with_symptoms([Symptom::Headache])];
        let json = serde_json::to_value(StatisticsSummary::compile(&entries, date(2024, 1, 31)))
            .unwrap();
        assert_eq!(json["symptoms"][0]["tag"], "headache");
        assert_eq!(json["monthly"][0]["symptoms"]["headache"], 1);
    }
}
