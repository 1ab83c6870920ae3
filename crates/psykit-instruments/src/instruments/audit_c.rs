use crate::scoring::{Band, Flag, InstrumentSpec, ScoreRange, ScoringContext, Sex};
use crate::{labels, Instrument};

/// AUDIT-C: the three consumption items of the AUDIT, each rated 0–4.
/// Total 0–12. The positive-screen cutoff depends on the caller-supplied sex.
pub struct AuditC;

/// Cutoff applied for [`Sex::Male`].
pub const MALE_CUTOFF: f64 = 4.0;
/// Cutoff applied for [`Sex::Female`], and when no sex is supplied.
pub const FEMALE_CUTOFF: f64 = 3.0;

impl AuditC {
    pub fn cutoff(sex: Option<Sex>) -> f64 {
        match sex {
            Some(Sex::Male) => MALE_CUTOFF,
            Some(Sex::Female) | None => FEMALE_CUTOFF,
        }
    }
}

impl Instrument for AuditC {
    fn spec(&self) -> &InstrumentSpec {
        static SPEC: std::sync::LazyLock<InstrumentSpec> = std::sync::LazyLock::new(|| {
            InstrumentSpec {
                id: "audit_c".to_string(),
                name: "AUDIT-C".to_string(),
                description: Some(
                    "Alcohol consumption screen. Positive at 4+ for men, 3+ for women.".to_string(),
                ),
                item_labels: labels(&[
                    "How often do you have a drink containing alcohol?",
                    "How many standard drinks do you have on a typical day when drinking?",
                    "How often do you have six or more drinks on one occasion?",
                ]),
                item_range: ScoreRange {
                    min: 0.0,
                    max: 4.0,
                    step: Some(1.0),
                },
                criteria: None,
                bands: vec![
                    Band::new("Low consumption", 0.0, 3.0),
                    Band::new("Moderate consumption", 4.0, 7.0),
                    Band::new("High consumption", 8.0, 12.0),
                ],
            }
        });
        &SPEC
    }

    fn aliases(&self) -> &[&'static str] {
        &["audit-c", "auditc"]
    }

    fn flags(&self, responses: &[f64], total: f64, context: &ScoringContext) -> Vec<Flag> {
        let mut flags = Vec::new();
        if total >= Self::cutoff(context.sex) {
            flags.push(Flag::PositiveScreen);
        }
        let max = self.spec().item_range.max;
        if responses.last().is_some_and(|&v| v >= max) {
            flags.push(Flag::HeavyEpisodicUse);
        }
        flags
    }
}
