use crate::scoring::{Band, Flag, InstrumentSpec, ScoreRange, ScoringContext};
use crate::{labels, Instrument};

/// Index of "Thoughts that you would be better off dead...".
pub const SAFETY_ITEM: usize = 8;

/// PHQ-9: Patient Health Questionnaire, nine items rated 0–3. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn spec(&self) -> &InstrumentSpec {
        static SPEC: std::sync::LazyLock<InstrumentSpec> = std::sync::LazyLock::new(|| {
            InstrumentSpec {
                id: "phq9".to_string(),
                name: "PHQ-9".to_string(),
                description: Some(
                    "Depression severity over the last two weeks. 5, 10, 15 and 20 mark \
                     mild, moderate, moderately severe and severe."
                        .to_string(),
                ),
                item_labels: labels(&[
                    "Little interest or pleasure in doing things",
                    "Feeling down, depressed, or hopeless",
                    "Trouble falling or staying asleep, or sleeping too much",
                    "Feeling tired or having little energy",
                    "Poor appetite or overeating",
                    "Feeling bad about yourself, or that you are a failure",
                    "Trouble concentrating on things",
                    "Moving or speaking slowly, or being fidgety or restless",
                    "Thoughts that you would be better off dead, or of hurting yourself",
                ]),
                item_range: ScoreRange {
                    min: 0.0,
                    max: 3.0,
                    step: Some(1.0),
                },
                criteria: None,
                bands: vec![
                    Band::new("Minimal", 0.0, 4.0),
                    Band::new("Mild", 5.0, 9.0),
                    Band::new("Moderate", 10.0, 14.0),
                    Band::new("Moderately severe", 15.0, 19.0),
                    Band::new("Severe", 20.0, 27.0),
                ],
            }
        });
        &SPEC
    }

    fn aliases(&self) -> &[&'static str] {
        &["phq-9", "patient health questionnaire"]
    }

    fn flags(&self, responses: &[f64], total: f64, _context: &ScoringContext) -> Vec<Flag> {
        let mut flags = Vec::new();
        if responses.get(SAFETY_ITEM).is_some_and(|&v| v > 0.0) {
            flags.push(Flag::SafetyItemEndorsed);
        }
        if total >= 10.0 {
            flags.push(Flag::PositiveScreen);
        }
        flags
    }
}
