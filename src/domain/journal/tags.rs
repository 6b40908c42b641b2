//! Symptom and mood tags recorded with a log entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical symptom a user can tick in the daily log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    AbdominalPain,
    BackPain,
    LegPain,
    ChestPain,
    Headache,
    ShoulderPain,
    VaginalStabbing,
    ElevatedTemperature,
    LoweredTemperature,
    Diarrhea,
    Constipation,
    Heartburn,
    Swelling,
    Acne,
    ShortnessOfBreath,
    MoodSwings,
    Bloating,
    BreakthroughBleeding,
    Fatigue,
}

impl Symptom {
    pub const ALL: [Symptom; 19] = [
        Symptom::AbdominalPain,
        Symptom::BackPain,
        Symptom::LegPain,
        Symptom::ChestPain,
        Symptom::Headache,
        Symptom::ShoulderPain,
        Symptom::VaginalStabbing,
        Symptom::ElevatedTemperature,
        Symptom::LoweredTemperature,
        Symptom::Diarrhea,
        Symptom::Constipation,
        Symptom::Heartburn,
        Symptom::Swelling,
        Symptom::Acne,
        Symptom::ShortnessOfBreath,
        Symptom::MoodSwings,
        Symptom::Bloating,
        Symptom::BreakthroughBleeding,
        Symptom::Fatigue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Symptom::AbdominalPain => "Abdominal pain",
            Symptom::BackPain => "Back pain",
            Symptom::LegPain => "Leg pain",
            Symptom::ChestPain => "Chest pain",
            Symptom::Headache => "Headache",
            Symptom::ShoulderPain => "Shoulder pain",
            Symptom::VaginalStabbing => "Vaginal stabbing pain",
            Symptom::ElevatedTemperature => "Elevated body temperature",
            Symptom::LoweredTemperature => "Lowered body temperature",
            Symptom::Diarrhea => "Diarrhea",
            Symptom::Constipation => "Constipation",
            Symptom::Heartburn => "Heartburn",
            Symptom::Swelling => "Swelling",
            Symptom::Acne => "Acne",
            Symptom::ShortnessOfBreath => "Shortness of breath",
            Symptom::MoodSwings => "Mood swings",
            Symptom::Bloating => "Bloating",
            Symptom::BreakthroughBleeding => "Breakthrough bleeding",
            Symptom::Fatigue => "Fatigue",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Mood a user can tick in the daily log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happiness,
    Enthusiasm,
    Excitement,
    Sadness,
    Despair,
    Anxiety,
    Irritation,
    Anger,
    Joy,
    Crying,
    Fear,
    Rage,
    Disgust,
    Panic,
}

impl Mood {
    pub const ALL: [Mood; 14] = [
        Mood::Happiness,
        Mood::Enthusiasm,
        Mood::Excitement,
        Mood::Sadness,
        Mood::Despair,
        Mood::Anxiety,
        Mood::Irritation,
        Mood::Anger,
        Mood::Joy,
        Mood::Crying,
        Mood::Fear,
        Mood::Rage,
        Mood::Disgust,
        Mood::Panic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happiness => "Happiness",
            Mood::Enthusiasm => "Enthusiasm",
            Mood::Excitement => "Excitement",
            Mood::Sadness => "Sadness",
            Mood::Despair => "Despair",
            Mood::Anxiety => "Anxiety",
            Mood::Irritation => "Irritation",
            Mood::Anger => "Anger",
            Mood::Joy => "Joy",
            Mood::Crying => "Crying",
            Mood::Fear => "Fear",
            Mood::Rage => "Rage",
            Mood::Disgust => "Disgust",
            Mood::Panic => "Panic",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
