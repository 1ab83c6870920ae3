use psykit_bundle::InfoSection;
use psykit_core::models::profile::Profile;
use psykit_core::models::record::{Citation, ContentRecord, ExampleVariant};

use super::{answer_table, citation, example, title_html, title_text, ProfileBuilder};

const FACTORS: &[&str] = &[
    "Presenting",
    "Predisposing",
    "Precipitating",
    "Perpetuating",
    "Protective",
];

/// Builder for case formulation and conceptualisation content.
pub struct FormulationBuilder;

impl ProfileBuilder for FormulationBuilder {
    fn profile(&self) -> Profile {
        Profile::DiagnosticFormulation
    }

    fn info(&self, _record: &ContentRecord) -> Vec<InfoSection> {
        vec![
            InfoSection::new(
                "The 5P model",
                &[
                    "Presenting: the current problems in the person's words.",
                    "Predisposing: what made the person vulnerable.",
                    "Precipitating: what triggered the current episode.",
                    "Perpetuating: what keeps the problem going.",
                    "Protective: strengths and supports to build on.",
                ],
            ),
            InfoSection::new(
                "Working collaboratively",
                &[
                    "Build the formulation with the person and check it makes sense to them.",
                    "Treat it as a hypothesis and revise it as new information arrives.",
                ],
            ),
        ]
    }

    fn example(&self, record: &ContentRecord) -> Option<ExampleVariant> {
        let html = format!(
            "<div class=\"formulation\"><h2>{}</h2>{}</div>",
            title_html(record),
            answer_table(
                "5P formulation",
                &["Factor", "Biological", "Psychological", "Social"],
                FACTORS,
            )
        );
        example("five-p-grid", "5P grid", html)
    }

    fn references(&self, _record: &ContentRecord) -> Vec<Citation> {
        vec![
            citation(
                "Kuyken W, Padesky CA, Dudley R",
                2009,
                "Collaborative Case Conceptualization",
                "Guilford Press",
            ),
            citation(
                "Macneil CA, Hasty MK, Conus P, Berk M",
                2012,
                "Is diagnosis enough to guide interventions in mental health? Using case \
                 formulation in clinical practice",
                "BMC Med",
            ),
        ]
    }

    fn prompts(&self, record: &ContentRecord) -> Vec<String> {
        let title = title_text(record);
        vec![
            format!("Turn these assessment notes into {title} using the 5P model."),
            "Identify the perpetuating factors most open to change and suggest interventions for each.".to_string(),
            "Write a short narrative formulation I can share with the client.".to_string(),
        ]
    }
}
