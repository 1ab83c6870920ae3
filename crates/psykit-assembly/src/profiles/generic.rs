use psykit_bundle::InfoSection;
use psykit_core::models::profile::Profile;
use psykit_core::models::record::{Citation, ContentRecord, ExampleVariant};

use super::{citation, example, title_html, title_text, ProfileBuilder};

/// Fallback builder for records no other profile claims.
pub struct GenericBuilder;

impl ProfileBuilder for GenericBuilder {
    fn profile(&self) -> Profile {
        Profile::Generic
    }

    fn info(&self, record: &ContentRecord) -> Vec<InfoSection> {
        let mut about = Vec::new();
        if let Some(description) = record.description.as_deref().filter(|d| !d.trim().is_empty())
        {
            about.push(description.trim().to_string());
        }
        about.push("Use the notes sheet to record observations and agreed next steps.".to_string());
        vec![InfoSection {
            title: record.title.trim().to_string(),
            body: about,
        }]
    }

    fn example(&self, record: &ContentRecord) -> Option<ExampleVariant> {
        let html = format!(
            "<form class=\"notes\"><h2>{}</h2>\
             <label for=\"observations\">Observations</label>\
             <textarea id=\"observations\" name=\"observations\"></textarea>\
             <label for=\"next-steps\">Next steps</label>\
             <textarea id=\"next-steps\" name=\"next-steps\"></textarea></form>",
            title_html(record)
        );
        example("notes", "Notes sheet", html)
    }

    fn references(&self, _record: &ContentRecord) -> Vec<Citation> {
        vec![citation(
            "World Health Organization",
            2022,
            "World mental health report: transforming mental health for all",
            "World Health Organization",
        )]
    }

    fn prompts(&self, record: &ContentRecord) -> Vec<String> {
        let title = title_text(record);
        vec![
            format!("Summarise the key points of {title}."),
            format!("Turn {title} into a short checklist for use in session."),
            "Suggest follow-up questions to ask at the next appointment.".to_string(),
        ]
    }
}
