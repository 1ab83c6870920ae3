use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Defines the valid range for a single item response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }

    /// Force an arbitrary value into this range.
    ///
    /// Non-finite values count as zero. The result is clamped to
    /// `[min, max]` and snapped to the nearest step when one is declared.
    pub fn coerce(&self, value: f64) -> f64 {
        let value = if value.is_finite() { value } else { 0.0 };
        let clamped = value.max(self.min).min(self.max);
        match self.step {
            Some(step) if step > 0.0 => {
                let steps = ((clamped - self.min) / step).round();
                (self.min + steps * step).min(self.max)
            }
            _ => clamped,
        }
    }
}

/// A contiguous total range mapped to a severity label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub fn new(label: &str, min: f64, max: f64) -> Self {
        Self {
            label: label.to_string(),
            min,
            max,
        }
    }

    pub fn contains(&self, total: f64) -> bool {
        total >= self.min && total <= self.max
    }
}

/// One criteria cluster: a fixed-size run of consecutive items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriteriaGroup {
    pub id: String,
    pub name: String,
    pub size: usize,
    /// How many items in the group must individually reach the threshold.
    pub required: usize,
}

/// Cluster-based criteria matching, used instead of (and alongside) banding
/// by instruments that mirror diagnostic criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterCriteria {
    /// Per-item value at which an item counts as endorsed.
    pub item_threshold: f64,
    /// The total must exceed this value, independently of the clusters.
    pub total_cutoff: f64,
    pub groups: Vec<CriteriaGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupOutcome {
    pub id: String,
    pub sum: f64,
    pub endorsed: usize,
    pub met: bool,
}

impl ClusterCriteria {
    /// Evaluate every group over an already coerced response vector.
    /// Items missing from a short vector count as not endorsed.
    pub fn evaluate(&self, responses: &[f64]) -> Vec<GroupOutcome> {
        let mut start = 0;
        self.groups
            .iter()
            .map(|group| {
                let end = (start + group.size).min(responses.len());
                let items = responses.get(start.min(end)..end).unwrap_or(&[]);
                start += group.size;

                let endorsed = items.iter().filter(|&&v| v >= self.item_threshold).count();
                GroupOutcome {
                    id: group.id.clone(),
                    sum: items.iter().sum(),
                    endorsed,
                    met: endorsed >= group.required,
                }
            })
            .collect()
    }
}

/// Immutable definition of a scored questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentSpec {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// One label per item; the item count is the label count.
    pub item_labels: Vec<String>,
    pub item_range: ScoreRange,
    pub criteria: Option<ClusterCriteria>,
    /// Ordered, non-overlapping, covering `[0, max_total]`.
    pub bands: Vec<Band>,
}

impl InstrumentSpec {
    pub fn items(&self) -> usize {
        self.item_labels.len()
    }

    pub fn max_total(&self) -> f64 {
        self.items() as f64 * self.item_range.max
    }

    /// Coerce raw responses to the declared length and item range.
    pub fn coerce(&self, responses: &[f64]) -> Vec<f64> {
        (0..self.items())
            .map(|i| self.item_range.coerce(responses.get(i).copied().unwrap_or(0.0)))
            .collect()
    }

    /// First band in declaration order whose range contains `total`.
    pub fn band_for(&self, total: f64) -> Option<&Band> {
        self.bands.iter().find(|b| b.contains(total))
    }
}

/// Annotation raised alongside a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Flag {
    /// A designated self-harm item was answered above zero.
    SafetyItemEndorsed,
    /// The total reached the instrument's screening cutoff.
    PositiveScreen,
    /// The binge-frequency item is at its maximum.
    HeavyEpisodicUse,
    /// Every criteria cluster has enough endorsed items.
    ClusterCriteriaMet,
    /// The total exceeds the cluster instrument's independent cutoff.
    AboveTotalCutoff,
    /// Clusters met and total above cutoff.
    ProvisionalDiagnosis,
}

impl Flag {
    pub fn message(&self) -> &'static str {
        match self {
            Flag::SafetyItemEndorsed => {
                "Self-harm item endorsed: discuss safety and complete a risk assessment today"
            }
            Flag::PositiveScreen => "Positive screen: follow up with a clinical interview",
            Flag::HeavyEpisodicUse => "Heavy episodic drinking reported at the highest frequency",
            Flag::ClusterCriteriaMet => "Symptom criteria met in every cluster",
            Flag::AboveTotalCutoff => "Total score above the provisional cutoff",
            Flag::ProvisionalDiagnosis => {
                "Provisional diagnosis: cluster criteria met and total above cutoff"
            }
        }
    }
}

/// Biological sex as supplied by the caller, for sex-specific cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

/// Caller-supplied context for instruments whose rules depend on it.
/// Never inferred from responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringContext {
    pub sex: Option<Sex>,
}

/// The derived result of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    /// The coerced response vector the result was computed from.
    pub responses: Vec<f64>,
    pub total: f64,
    pub severity: String,
    pub bands: Vec<Band>,
    pub flags: Vec<Flag>,
    pub breakdown: Option<BTreeMap<String, f64>>,
}

impl ScoreResult {
    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item: usize,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub message: String,
}
