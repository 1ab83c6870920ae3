use crate::scoring::{Band, ClusterCriteria, CriteriaGroup, InstrumentSpec, ScoreRange};
use crate::{labels, Instrument};

/// PCL-5: PTSD Checklist for DSM-5, twenty items rated 0–4. Total 0–80.
///
/// Screens by cluster criteria rather than bands alone: an item counts when
/// rated 2 ("moderately") or higher, and B, C, D, E need 1, 1, 2, 2
/// endorsed items. The total cutoff is evaluated independently.
pub struct Pcl5;

impl Instrument for Pcl5 {
    fn spec(&self) -> &InstrumentSpec {
        static SPEC: std::sync::LazyLock<InstrumentSpec> = std::sync::LazyLock::new(|| {
            InstrumentSpec {
                id: "pcl5".to_string(),
                name: "PCL-5".to_string(),
                description: Some(
                    "PTSD symptoms over the past month, grouped into DSM-5 clusters B–E."
                        .to_string(),
                ),
                item_labels: labels(&[
                    "Repeated, disturbing, and unwanted memories of the stressful experience",
                    "Repeated, disturbing dreams of the stressful experience",
                    "Suddenly feeling or acting as if the experience were happening again",
                    "Feeling very upset when something reminded you of the experience",
                    "Strong physical reactions when something reminded you of the experience",
                    "Avoiding memories, thoughts, or feelings related to the experience",
                    "Avoiding external reminders of the experience",
                    "Trouble remembering important parts of the experience",
                    "Strong negative beliefs about yourself, other people, or the world",
                    "Blaming yourself or someone else for the experience",
                    "Strong negative feelings such as fear, horror, anger, guilt, or shame",
                    "Loss of interest in activities that you used to enjoy",
                    "Feeling distant or cut off from other people",
                    "Trouble experiencing positive feelings",
                    "Irritable behavior, angry outbursts, or acting aggressively",
                    "Taking too many risks or doing things that could cause you harm",
                    "Being superalert or watchful or on guard",
                    "Feeling jumpy or easily startled",
                    "Having difficulty concentrating",
                    "Trouble falling or staying asleep",
                ]),
                item_range: ScoreRange {
                    min: 0.0,
                    max: 4.0,
                    step: Some(1.0),
                },
                criteria: Some(ClusterCriteria {
                    item_threshold: 2.0,
                    total_cutoff: 32.0,
                    groups: vec![
                        group("b", "Intrusion", 5, 1),
                        group("c", "Avoidance", 2, 1),
                        group("d", "Negative cognitions and mood", 7, 2),
                        group("e", "Arousal and reactivity", 6, 2),
                    ],
                }),
                bands: vec![
                    Band::new("Below provisional cutoff", 0.0, 32.0),
                    Band::new("Above provisional cutoff", 33.0, 80.0),
                ],
            }
        });
        &SPEC
    }

    fn aliases(&self) -> &[&'static str] {
        &["pcl-5", "ptsd checklist"]
    }
}

fn group(id: &str, name: &str, size: usize, required: usize) -> CriteriaGroup {
    CriteriaGroup {
        id: id.to_string(),
        name: name.to_string(),
        size,
        required,
    }
}
