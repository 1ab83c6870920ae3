use psykit_bundle::InfoSection;
use psykit_core::models::profile::Profile;
use psykit_core::models::record::{Citation, ContentRecord, ExampleVariant};

use super::{answer_table, citation, example, title_html, title_text, ProfileBuilder};

const ROWS: &[&str] = &["Medication 1", "Medication 2", "Medication 3"];

/// Builder for medication review content.
pub struct MedicationBuilder;

impl ProfileBuilder for MedicationBuilder {
    fn profile(&self) -> Profile {
        Profile::MedicationReview
    }

    fn info(&self, _record: &ContentRecord) -> Vec<InfoSection> {
        vec![
            InfoSection::new(
                "Reviewing medication",
                &[
                    "Record dose, start date, adherence and the reason for each medication.",
                    "Ask about side effects directly; they are often under-reported.",
                    "Check interactions whenever a medication is added or changed.",
                ],
            ),
            InfoSection::new(
                "Monitoring",
                &[
                    "Follow the physical health monitoring required for each medication.",
                    "Agree a review date before ending the appointment.",
                ],
            ),
        ]
    }

    fn example(&self, record: &ContentRecord) -> Option<ExampleVariant> {
        let html = format!(
            "<div class=\"medication-review\"><h2>{}</h2>{}</div>",
            title_html(record),
            answer_table(
                "Current medication",
                &["Medication", "Dose", "Adherence", "Side effects", "Plan"],
                ROWS,
            )
        );
        example("medication-table", "Medication table", html)
    }

    fn references(&self, _record: &ContentRecord) -> Vec<Citation> {
        vec![
            citation(
                "Taylor DM, Barnes TRE, Young AH",
                2021,
                "The Maudsley Prescribing Guidelines in Psychiatry, 14th edition",
                "Wiley-Blackwell",
            ),
            citation(
                "National Institute for Health and Care Excellence",
                2015,
                "Medicines optimisation: the safe and effective use of medicines (NG5)",
                "NICE guideline",
            ),
        ]
    }

    fn prompts(&self, record: &ContentRecord) -> Vec<String> {
        let title = title_text(record);
        vec![
            format!("Summarise {title} for the clinical record."),
            "Check this medication list for interactions and duplicate drug classes.".to_string(),
            "List the monitoring tests due for each medication and when.".to_string(),
        ]
    }
}
