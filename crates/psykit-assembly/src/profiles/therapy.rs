use psykit_bundle::InfoSection;
use psykit_core::models::profile::Profile;
use psykit_core::models::record::{Citation, ContentRecord, ExampleVariant};

use super::{answer_table, citation, example, title_html, title_text, ProfileBuilder};

const COLUMNS: &[&str] = &[
    "Entry",
    "Situation",
    "Emotions (0-100)",
    "Automatic thought",
    "Evidence for",
    "Evidence against",
    "Balanced thought",
];

const ROWS: &[&str] = &["1", "2", "3"];

/// Builder for therapy worksheets.
pub struct TherapyBuilder;

impl ProfileBuilder for TherapyBuilder {
    fn profile(&self) -> Profile {
        Profile::TherapyWorksheet
    }

    fn info(&self, _record: &ContentRecord) -> Vec<InfoSection> {
        vec![
            InfoSection::new(
                "How to use this worksheet",
                &[
                    "Fill in a row as soon as possible after a difficult moment.",
                    "Rate each emotion from 0 to 100 before and after the balanced thought.",
                    "Bring completed worksheets to the next session.",
                ],
            ),
            InfoSection::new(
                "Tips",
                &[
                    "Separate the facts of the situation from your interpretation of them.",
                    "Ask what you would say to a friend who had the same thought.",
                ],
            ),
        ]
    }

    fn example(&self, record: &ContentRecord) -> Option<ExampleVariant> {
        let html = format!(
            "<div class=\"thought-record\"><h2>{}</h2>{}</div>",
            title_html(record),
            answer_table("Thought record", COLUMNS, ROWS)
        );
        example("thought-record", "Thought record", html)
    }

    fn references(&self, _record: &ContentRecord) -> Vec<Citation> {
        vec![
            citation(
                "Beck JS",
                2020,
                "Cognitive Behavior Therapy: Basics and Beyond, 3rd edition",
                "Guilford Press",
            ),
            citation(
                "Hofmann SG, Asnaani A, Vonk IJ, Sawyer AT, Fang A",
                2012,
                "The efficacy of cognitive behavioral therapy: a review of meta-analyses",
                "Cognit Ther Res",
            ),
        ]
    }

    fn prompts(&self, record: &ContentRecord) -> Vec<String> {
        let title = title_text(record);
        vec![
            format!("Walk me through {title} using an example from this week."),
            "Suggest alternative, balanced thoughts for the automatic thought I wrote down.".to_string(),
            "Help me plan a small behavioural experiment to test this thought.".to_string(),
        ]
    }
}
