use psykit_bundle::InfoSection;
use psykit_core::models::profile::Profile;
use psykit_core::models::record::{Citation, ContentRecord, ExampleVariant};
use psykit_sanitize::escape_text;

use super::{citation, example, title_html, title_text, ProfileBuilder};

/// Builder for patient handouts.
pub struct PsychoeducationBuilder;

impl ProfileBuilder for PsychoeducationBuilder {
    fn profile(&self) -> Profile {
        Profile::Psychoeducation
    }

    fn info(&self, _record: &ContentRecord) -> Vec<InfoSection> {
        vec![
            InfoSection::new(
                "Sharing this handout",
                &[
                    "Go through the handout together rather than only handing it over.",
                    "Check understanding by asking the person to explain it back in their own words.",
                    "Offer a copy in the person's preferred language or format.",
                ],
            ),
            InfoSection::new(
                "Where to get help",
                &["Include local services and crisis contacts before printing."],
            ),
        ]
    }

    fn example(&self, record: &ContentRecord) -> Option<ExampleVariant> {
        let mut html = format!(
            "<article class=\"handout\"><h2>{}</h2>",
            title_html(record)
        );
        if let Some(description) = record.description.as_deref().filter(|d| !d.trim().is_empty())
        {
            html.push_str(&format!("<p>{}</p>", escape_text(description.trim())));
        }
        html.push_str(
            "<h3>What is it?</h3><p></p>\
             <h3>What can help?</h3><ul><li></li></ul>\
             <h3>When to ask for more help</h3><p></p>\
             <h3>My notes</h3><textarea name=\"notes\"></textarea></article>",
        );
        example("handout", "Handout", html)
    }

    fn references(&self, _record: &ContentRecord) -> Vec<Citation> {
        vec![citation(
            "National Institute for Health and Care Excellence",
            2011,
            "Common mental health problems: identification and pathways to care (CG123)",
            "NICE guideline",
        )]
    }

    fn prompts(&self, record: &ContentRecord) -> Vec<String> {
        let title = title_text(record);
        vec![
            format!("Rewrite {title} in plain language at a reading age of about twelve."),
            "Add a short section on where to get help locally.".to_string(),
            "Suggest three questions the reader could bring to their next appointment.".to_string(),
        ]
    }
}
