use psykit_bundle::InfoSection;
use psykit_core::models::profile::Profile;
use psykit_core::models::record::{Citation, ContentRecord, ExampleVariant};
use psykit_instruments::scoring::ScoreResult;
use psykit_instruments::{all_instruments, lookup_key, score, Instrument};
use psykit_sanitize::escape_text;

use super::{citation, example, ProfileBuilder};

/// Canned responses used for the worked example, by instrument id.
const SAMPLE_RESPONSES: &[(&str, &[f64])] = &[
    ("phq9", &[2.0, 2.0, 3.0, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0]),
    ("gad7", &[2.0, 1.0, 2.0, 1.0, 0.0, 1.0, 1.0]),
    ("audit_c", &[2.0, 2.0, 1.0]),
    (
        "pcl5",
        &[
            3.0, 2.0, 2.0, 3.0, 1.0, 2.0, 2.0, 1.0, 2.0, 1.0, 2.0, 2.0, 3.0, 2.0, 1.0, 0.0, 3.0,
            2.0, 2.0, 3.0,
        ],
    ),
    ("epds", &[1.0, 1.0, 2.0, 2.0, 1.0, 2.0, 1.0, 1.0, 0.0, 0.0]),
];

/// Builder for questionnaires whose score can be computed in the page.
///
/// The instrument is resolved from the record's tags, title or id; when
/// none matches, the first catalogued instrument stands in so the worked
/// example is never empty.
pub struct ScoreBuilder {
    instruments: Vec<Box<dyn Instrument>>,
}

impl Default for ScoreBuilder {
    fn default() -> Self {
        Self::new(all_instruments())
    }
}

impl ScoreBuilder {
    pub fn new(instruments: Vec<Box<dyn Instrument>>) -> Self {
        Self { instruments }
    }

    fn instruments(&self) -> impl Iterator<Item = &dyn Instrument> {
        self.instruments.iter().map(|i| i.as_ref())
    }

    /// The instrument a record is about, if the catalogue has it: an exact
    /// tag match first, then a title mentioning it, then the record id.
    pub fn resolve(&self, record: &ContentRecord) -> Option<&dyn Instrument> {
        let tags: Vec<String> = record.tags.iter().map(|t| lookup_key(t)).collect();
        if let Some(instrument) = self
            .instruments()
            .find(|i| instrument_keys(*i).iter().any(|k| tags.contains(k)))
        {
            return Some(instrument);
        }

        let title = lookup_key(&record.title);
        let id = lookup_key(&record.id);
        self.instruments().find(|i| {
            instrument_keys(*i)
                .iter()
                .any(|k| title.contains(k.as_str()) || id == *k)
        })
    }

    fn resolve_or_default(&self, record: &ContentRecord) -> Option<&dyn Instrument> {
        self.resolve(record).or_else(|| self.instruments().next())
    }

    /// Score the canned responses for `instrument`.
    pub fn sample_result(instrument: &dyn Instrument) -> ScoreResult {
        let canned = SAMPLE_RESPONSES
            .iter()
            .find(|(id, _)| *id == instrument.id())
            .map(|(_, responses)| responses.to_vec());

        let responses = canned.unwrap_or_else(|| {
            // Walk up the scale and wrap, so every response level appears.
            let range = instrument.spec().item_range;
            let levels = (range.max - range.min).max(0.0) + 1.0;
            (0..instrument.spec().items())
                .map(|i| range.min + (i as f64 % levels))
                .collect()
        });
        score(instrument, &responses)
    }
}

/// Lookup keys for an instrument's id, name and aliases.
fn instrument_keys(instrument: &dyn Instrument) -> Vec<String> {
    let mut keys = vec![lookup_key(instrument.id()), lookup_key(instrument.name())];
    keys.extend(instrument.aliases().iter().map(|a| lookup_key(a)));
    keys.retain(|k| !k.is_empty());
    keys
}

fn render_worked_example(instrument: &dyn Instrument, result: &ScoreResult) -> String {
    let spec = instrument.spec();
    let name = escape_text(instrument.name());

    let mut html = format!(
        "<div class=\"score-example\" data-instrument=\"{}\">",
        escape_text(instrument.id())
    );
    html.push_str(&format!(
        "<table><caption>{name} worked example</caption><thead><tr><th>#</th>\
         <th>Question</th><th>Response</th></tr></thead><tbody>"
    ));
    for (i, (label, value)) in spec.item_labels.iter().zip(&result.responses).enumerate() {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{value}</td></tr>",
            i + 1,
            escape_text(label)
        ));
    }
    html.push_str(&format!(
        "</tbody><tfoot><tr><th colspan=\"2\">Total</th><td>{} / {}</td></tr></tfoot></table>",
        result.total,
        spec.max_total()
    ));
    html.push_str(&format!(
        "<p><strong>Severity:</strong> {}</p>",
        escape_text(&result.severity)
    ));

    if let Some(breakdown) = &result.breakdown {
        html.push_str("<dl class=\"score-breakdown\">");
        for (key, value) in breakdown {
            html.push_str(&format!("<dt>{}</dt><dd>{value}</dd>", escape_text(key)));
        }
        html.push_str("</dl>");
    }

    if !result.flags.is_empty() {
        html.push_str("<ul class=\"score-flags\" role=\"alert\">");
        for flag in &result.flags {
            html.push_str(&format!("<li>{}</li>", escape_text(flag.message())));
        }
        html.push_str("</ul>");
    }

    html.push_str("<ul class=\"score-bands\">");
    for band in &result.bands {
        html.push_str(&format!(
            "<li>{}: {}\u{2013}{}</li>",
            escape_text(&band.label),
            band.min,
            band.max
        ));
    }
    html.push_str("</ul>");

    html.push_str(&format!(
        "<details><summary>Structured summary</summary><pre>{}</pre></details></div>",
        escape_text(&instrument.to_structured_input(result))
    ));
    html
}

impl ProfileBuilder for ScoreBuilder {
    fn profile(&self) -> Profile {
        Profile::ScoreAutocompute
    }

    fn info(&self, record: &ContentRecord) -> Vec<InfoSection> {
        let Some(instrument) = self.resolve_or_default(record) else {
            return vec![InfoSection::new(
                "Scoring",
                &["Add up the response values to obtain the total score."],
            )];
        };
        let spec = instrument.spec();

        let mut about = Vec::new();
        if let Some(description) = &spec.description {
            about.push(description.clone());
        }
        about.push(format!(
            "{} questions, each scored {} to {}; totals range from 0 to {}.",
            spec.items(),
            spec.item_range.min,
            spec.item_range.max,
            spec.max_total()
        ));
        about.push("The total is computed automatically as responses are entered.".to_string());

        let bands = spec
            .bands
            .iter()
            .map(|b| format!("{}: {}\u{2013}{}", b.label, b.min, b.max))
            .collect();

        vec![
            InfoSection {
                title: format!("About the {}", spec.name),
                body: about,
            },
            InfoSection {
                title: "Severity bands".to_string(),
                body: bands,
            },
            InfoSection::new(
                "Interpreting results",
                &[
                    "A score is a starting point for a clinical conversation, not a diagnosis.",
                    "Repeat the measure at follow-up to track change over time.",
                    "Any endorsed self-harm question needs a same-day risk assessment.",
                ],
            ),
        ]
    }

    fn example(&self, record: &ContentRecord) -> Option<ExampleVariant> {
        let instrument = self.resolve_or_default(record)?;
        let result = Self::sample_result(instrument);
        example(
            "worked-example",
            "Worked example",
            render_worked_example(instrument, &result),
        )
    }

    fn references(&self, record: &ContentRecord) -> Vec<Citation> {
        let mut refs = Vec::new();
        match self.resolve(record).map(|i| i.id()) {
            Some("phq9") => refs.push(citation(
                "Kroenke K, Spitzer RL, Williams JB",
                2001,
                "The PHQ-9: validity of a brief depression severity measure",
                "J Gen Intern Med",
            )),
            Some("gad7") => refs.push(citation(
                "Spitzer RL, Kroenke K, Williams JB, Löwe B",
                2006,
                "A brief measure for assessing generalized anxiety disorder: the GAD-7",
                "Arch Intern Med",
            )),
            Some("audit_c") => refs.push(citation(
                "Bush K, Kivlahan DR, McDonell MB, Fihn SD, Bradley KA",
                1998,
                "The AUDIT alcohol consumption questions (AUDIT-C): an effective brief \
                 screening test for problem drinking",
                "Arch Intern Med",
            )),
            Some("pcl5") => refs.push(citation(
                "Blevins CA, Weathers FW, Davis MT, Witte TK, Domino JL",
                2015,
                "The Posttraumatic Stress Disorder Checklist for DSM-5 (PCL-5): development \
                 and initial psychometric evaluation",
                "J Trauma Stress",
            )),
            Some("epds") => refs.push(citation(
                "Cox JL, Holden JM, Sagovsky R",
                1987,
                "Detection of postnatal depression: development of the 10-item Edinburgh \
                 Postnatal Depression Scale",
                "Br J Psychiatry",
            )),
            _ => {}
        }
        refs.push(citation(
            "Kroenke K, Spitzer RL, Williams JB, Löwe B",
            2010,
            "The Patient Health Questionnaire Somatic, Anxiety, and Depressive Symptom \
             Scales: a systematic review",
            "Gen Hosp Psychiatry",
        ));
        refs
    }

    fn prompts(&self, record: &ContentRecord) -> Vec<String> {
        let name = self
            .resolve_or_default(record)
            .map_or("this questionnaire", |i| i.name());
        vec![
            format!("Score this {name} from the responses below and report the total and severity band."),
            format!("Explain in plain language what this {name} result means for next steps."),
            format!("Compare this {name} total with the previous administration and describe the change."),
            "List follow-up questions for any endorsed self-harm question.".to_string(),
        ]
    }

    fn always_top_up(&self) -> bool {
        true
    }
}
