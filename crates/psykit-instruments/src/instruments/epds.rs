use crate::scoring::{Band, Flag, InstrumentSpec, ScoreRange, ScoringContext};
use crate::{labels, Instrument};

/// Index of "The thought of harming myself has occurred to me".
pub const SAFETY_ITEM: usize = 9;

/// EPDS: Edinburgh Postnatal Depression Scale, ten items rated 0–3. Total 0–30.
/// Responses are expected already keyed, reverse-scored items included.
pub struct Epds;

impl Instrument for Epds {
    fn spec(&self) -> &InstrumentSpec {
        static SPEC: std::sync::LazyLock<InstrumentSpec> = std::sync::LazyLock::new(|| {
            InstrumentSpec {
                id: "epds".to_string(),
                name: "EPDS".to_string(),
                description: Some("Perinatal depression screen over the past seven days.".to_string()),
                item_labels: labels(&[
                    "I have been able to laugh and see the funny side of things",
                    "I have looked forward with enjoyment to things",
                    "I have blamed myself unnecessarily when things went wrong",
                    "I have been anxious or worried for no good reason",
                    "I have felt scared or panicky for no very good reason",
                    "Things have been getting on top of me",
                    "I have been so unhappy that I have had difficulty sleeping",
                    "I have felt sad or miserable",
                    "I have been so unhappy that I have been crying",
                    "The thought of harming myself has occurred to me",
                ]),
                item_range: ScoreRange {
                    min: 0.0,
                    max: 3.0,
                    step: Some(1.0),
                },
                criteria: None,
                bands: vec![
                    Band::new("Depression unlikely", 0.0, 9.0),
                    Band::new("Possible depression", 10.0, 12.0),
                    Band::new("Probable depression", 13.0, 30.0),
                ],
            }
        });
        &SPEC
    }

    fn aliases(&self) -> &[&'static str] {
        &["edinburgh postnatal depression scale"]
    }

    fn flags(&self, responses: &[f64], total: f64, _context: &ScoringContext) -> Vec<Flag> {
        let mut flags = Vec::new();
        if responses.get(SAFETY_ITEM).is_some_and(|&v| v > 0.0) {
            flags.push(Flag::SafetyItemEndorsed);
        }
        if total >= 13.0 {
            flags.push(Flag::PositiveScreen);
        }
        flags
    }
}
