//! Response coercion and scoring.
//!
//! Scoring is total: any response vector (wrong length, out of range,
//! non-finite) is normalized rather than rejected. [`score_strict`] rejects
//! instead, with the first problem [`Instrument::validate_responses`] reports.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::InstrumentError;
use crate::scoring::{Flag, ScoreResult, ScoringContext};
use crate::Instrument;

/// Label used when no band contains the total. Only reachable through a
/// badly authored instrument.
pub const UNKNOWN_SEVERITY: &str = "Unknown";

/// Score `responses` against `instrument` with no caller context.
pub fn score(instrument: &dyn Instrument, responses: &[f64]) -> ScoreResult {
    score_with(instrument, responses, &ScoringContext::default())
}

/// Score `responses` only if none would be changed by coercion; otherwise
/// fail with the first validation problem.
pub fn score_strict(
    instrument: &dyn Instrument,
    responses: &[f64],
    context: &ScoringContext,
) -> Result<ScoreResult, InstrumentError> {
    if let Some(problem) = instrument.validate_responses(responses).into_iter().next() {
        return Err(problem.into());
    }
    Ok(score_with(instrument, responses, context))
}

/// Score `responses` against `instrument`.
pub fn score_with(
    instrument: &dyn Instrument,
    responses: &[f64],
    context: &ScoringContext,
) -> ScoreResult {
    let spec = instrument.spec();
    let coerced = spec.coerce(responses);
    let total: f64 = coerced.iter().sum();

    let severity = match spec.band_for(total) {
        Some(band) => band.label.clone(),
        None => {
            warn!(instrument = %spec.id, total, "no severity band contains total");
            UNKNOWN_SEVERITY.to_string()
        }
    };

    let mut flags = Vec::new();
    let mut breakdown = None;

    if let Some(criteria) = &spec.criteria {
        let outcomes = criteria.evaluate(&coerced);
        let all_met = !outcomes.is_empty() && outcomes.iter().all(|o| o.met);
        let above_cutoff = total > criteria.total_cutoff;

        if all_met {
            flags.push(Flag::ClusterCriteriaMet);
        }
        if above_cutoff {
            flags.push(Flag::AboveTotalCutoff);
        }
        if all_met && above_cutoff {
            flags.push(Flag::ProvisionalDiagnosis);
        }

        let mut map = BTreeMap::new();
        for outcome in &outcomes {
            map.insert(format!("{}_sum", outcome.id), outcome.sum);
            map.insert(format!("{}_endorsed", outcome.id), outcome.endorsed as f64);
        }
        breakdown = Some(map);
    }

    for flag in instrument.flags(&coerced, total, context) {
        if !flags.contains(&flag) {
            flags.push(flag);
        }
    }

    ScoreResult {
        instrument_id: spec.id.clone(),
        responses: coerced,
        total,
        severity,
        bands: spec.bands.clone(),
        flags,
        breakdown,
    }
}
