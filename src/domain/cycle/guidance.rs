//! Per-phase descriptions and self-care advice shown next to the overview.

use serde::Serialize;

use super::Phase;

/// Static guidance text for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseGuidance {
    pub description: &'static str,
    pub symptoms: &'static str,
    pub recommendations: &'static str,
    pub exercise: &'static str,
    pub nutrition: &'static str,
}

pub fn phase_guidance(phase: Phase) -> PhaseGuidance {
    match phase {
        Phase::Menstruation => PhaseGuidance {
            description: "A new cycle begins. Hormone levels are low.",
            symptoms: "Abdominal cramps, fatigue and mood swings are possible.",
            recommendations: "Rest, avoid overexertion and pay attention to hygiene.",
            exercise: "Light exercise, walks, stretching.",
            nutrition: "Increase iron and vitamin B12 intake and drink plenty of water.",
        },
        Phase::Follicular => PhaseGuidance {
            description: "Estrogen rises as the body prepares for ovulation.",
            symptoms: "More energy, better mood, greater creativity.",
            recommendations: "A good time for new projects and physical activity.",
            exercise: "Training intensity can be increased.",
            nutrition: "Balanced diet rich in protein and vegetables.",
        },
        Phase::Ovulation => PhaseGuidance {
            description: "Peak fertility. Estrogen and LH are high.",
            symptoms: "Ovulation pain and increased libido are possible.",
            recommendations: "Watch for signs of ovulation if planning a pregnancy.",
            exercise: "Regular training can continue.",
            nutrition: "Increase antioxidants and omega-3 fatty acids.",
        },
        Phase::Luteal => PhaseGuidance {
            description: "Progesterone rises. The body prepares for the next cycle.",
            symptoms: "PMS, mood swings and water retention are possible.",
            recommendations: "Keep a regular sleep schedule and practice relaxation.",
            exercise: "Moderate activity, yoga.",
            nutrition: "Limit salt and simple sugars, increase magnesium.",
        },
    }
}
