use psykit_bundle::InfoSection;
use psykit_core::models::profile::Profile;
use psykit_core::models::record::{Citation, ContentRecord, ExampleVariant};

use super::{citation, example, title_html, title_text, ProfileBuilder};

/// Safety plan steps, in the order a plan is worked through.
const PLAN_STEPS: &[(&str, &str)] = &[
    ("warning-signs", "Warning signs that a crisis may be developing"),
    ("coping", "Things I can do on my own to take my mind off problems"),
    ("distraction", "People and places that help distract me"),
    ("support", "People I can ask for help"),
    ("professionals", "Professionals or services I can contact in a crisis"),
    ("means", "Making the environment safer"),
    ("reasons", "The things most important to me and worth living for"),
];

/// Builder for suicide and self-harm risk content.
pub struct RiskBuilder;

impl ProfileBuilder for RiskBuilder {
    fn profile(&self) -> Profile {
        Profile::RiskSafety
    }

    fn info(&self, _record: &ContentRecord) -> Vec<InfoSection> {
        vec![
            InfoSection::new(
                "Immediate safety",
                &[
                    "If someone is in immediate danger, call emergency services now.",
                    "Do not leave a person at imminent risk alone.",
                ],
            ),
            InfoSection::new(
                "Using a safety plan",
                &[
                    "Write the plan together, in the person's own words.",
                    "Work through the steps in order until the person feels safe.",
                    "Keep the plan where it can be found quickly, and review it after any crisis.",
                ],
            ),
            InfoSection::new(
                "Asking about suicide",
                &[
                    "Ask directly and calmly; asking does not increase risk.",
                    "Record current ideation, intent, plan, access to means and protective factors.",
                ],
            ),
        ]
    }

    fn example(&self, record: &ContentRecord) -> Option<ExampleVariant> {
        let mut html = format!(
            "<form class=\"safety-plan\"><h2>{}</h2>",
            title_html(record)
        );
        for (n, (name, label)) in PLAN_STEPS.iter().enumerate() {
            html.push_str(&format!(
                "<fieldset><legend>Step {}: {label}</legend>\
                 <label for=\"{name}\">{label}</label>\
                 <textarea id=\"{name}\" name=\"{name}\"></textarea></fieldset>",
                n + 1
            ));
        }
        html.push_str(
            "<p role=\"note\"><strong>Emergency:</strong> call your local emergency number \
             or go to the nearest emergency department.</p></form>",
        );
        example("safety-plan", "Safety plan", html)
    }

    fn references(&self, _record: &ContentRecord) -> Vec<Citation> {
        vec![
            citation(
                "Stanley B, Brown GK",
                2012,
                "Safety Planning Intervention: a brief intervention to mitigate suicide risk",
                "Cogn Behav Pract",
            ),
            citation(
                "Posner K, Brown GK, Stanley B, et al.",
                2011,
                "The Columbia-Suicide Severity Rating Scale: initial validity and internal \
                 consistency findings from three multisite studies",
                "Am J Psychiatry",
            ),
            citation(
                "National Institute for Health and Care Excellence",
                2022,
                "Self-harm: assessment, management and preventing recurrence (NG225)",
                "NICE guideline",
            ),
        ]
    }

    fn prompts(&self, record: &ContentRecord) -> Vec<String> {
        let title = title_text(record);
        vec![
            format!("Help me complete {title} with a client, one step at a time, in their own words."),
            "Summarise the current risk: ideation, intent, plan, means and protective factors.".to_string(),
            "List local crisis contacts and services to add to the plan.".to_string(),
            "Draft a brief note documenting the risk assessment and the agreed safety plan.".to_string(),
        ]
    }

    fn always_top_up(&self) -> bool {
        true
    }
}
