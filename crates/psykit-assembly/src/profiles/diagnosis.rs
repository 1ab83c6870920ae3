use psykit_bundle::InfoSection;
use psykit_core::models::profile::Profile;
use psykit_core::models::record::{Citation, ContentRecord, ExampleVariant};

use super::{answer_table, citation, example, title_html, title_text, ProfileBuilder};

const CHECKLIST: &[&str] = &[
    "Core symptoms present",
    "Minimum number of symptoms met",
    "Duration criterion met",
    "Clinically significant distress or impairment",
    "Not better explained by a substance, medication or medical condition",
    "Not better explained by another mental disorder",
];

/// Builder for diagnostic criteria content.
pub struct DiagnosisBuilder;

impl ProfileBuilder for DiagnosisBuilder {
    fn profile(&self) -> Profile {
        Profile::DiagnosticCriteria
    }

    fn info(&self, _record: &ContentRecord) -> Vec<InfoSection> {
        vec![
            InfoSection::new(
                "Using the checklist",
                &[
                    "Mark each criterion as met or not met and note the evidence for it.",
                    "A diagnosis needs every required criterion, including duration and impairment.",
                ],
            ),
            InfoSection::new(
                "Differential diagnosis",
                &[
                    "Rule out substance, medication and medical causes first.",
                    "Consider comorbid conditions that share symptoms.",
                ],
            ),
        ]
    }

    fn example(&self, record: &ContentRecord) -> Option<ExampleVariant> {
        let html = format!(
            "<div class=\"criteria\"><h2>{}</h2>{}</div>",
            title_html(record),
            answer_table("Criteria checklist", &["Criterion", "Met?", "Evidence"], CHECKLIST)
        );
        example("criteria-checklist", "Criteria checklist", html)
    }

    fn references(&self, _record: &ContentRecord) -> Vec<Citation> {
        vec![
            citation(
                "American Psychiatric Association",
                2022,
                "Diagnostic and Statistical Manual of Mental Disorders, Fifth Edition, Text Revision (DSM-5-TR)",
                "American Psychiatric Association Publishing",
            ),
            citation(
                "World Health Organization",
                2022,
                "International Classification of Diseases, 11th Revision (ICD-11)",
                "World Health Organization",
            ),
        ]
    }

    fn prompts(&self, record: &ContentRecord) -> Vec<String> {
        let title = title_text(record);
        vec![
            format!("Check these clinical notes against {title} and list which criteria are met."),
            "List the differential diagnoses to rule out, with the distinguishing features of each.".to_string(),
            "Suggest interview questions to clarify criteria that are still uncertain.".to_string(),
        ]
    }
}
