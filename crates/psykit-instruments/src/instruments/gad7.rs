use crate::scoring::{Band, Flag, InstrumentSpec, ScoreRange, ScoringContext};
use crate::{labels, Instrument};

/// GAD-7: Generalized Anxiety Disorder scale, seven items rated 0–3. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn spec(&self) -> &InstrumentSpec {
        static SPEC: std::sync::LazyLock<InstrumentSpec> = std::sync::LazyLock::new(|| {
            InstrumentSpec {
                id: "gad7".to_string(),
                name: "GAD-7".to_string(),
                description: Some("Anxiety severity over the last two weeks.".to_string()),
                item_labels: labels(&[
                    "Feeling nervous, anxious, or on edge",
                    "Not being able to stop or control worrying",
                    "Worrying too much about different things",
                    "Trouble relaxing",
                    "Being so restless that it is hard to sit still",
                    "Becoming easily annoyed or irritable",
                    "Feeling afraid, as if something awful might happen",
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
                    Band::new("Severe", 15.0, 21.0),
                ],
            }
        });
        &SPEC
    }

    fn aliases(&self) -> &[&'static str] {
        &["gad-7", "generalized anxiety disorder 7"]
    }

    fn flags(&self, _responses: &[f64], total: f64, _context: &ScoringContext) -> Vec<Flag> {
        if total >= 10.0 {
            vec![Flag::PositiveScreen]
        } else {
            Vec::new()
        }
    }
}
