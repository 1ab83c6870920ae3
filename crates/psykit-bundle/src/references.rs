use psykit_core::models::block::ReferenceKind;

/// Keyword rules, checked in order against the lower-cased title.
const RULES: &[(ReferenceKind, &[&str])] = &[
    (
        ReferenceKind::Safety,
        &["suicid", "self-harm", "self harm", "safety plan", "risk assessment", "crisis"],
    ),
    (
        ReferenceKind::Guideline,
        &["guideline", "guidance", "practice parameter", "recommendation", "consensus"],
    ),
    (
        ReferenceKind::Validation,
        &[
            "validation",
            "validity",
            "validated",
            "psychometric",
            "reliability",
            "diagnostic accuracy",
            "sensitivity and specificity",
        ],
    ),
    (
        ReferenceKind::Review,
        &["systematic review", "meta-analysis", "meta analysis", "cochrane", "review"],
    ),
];

/// Classify a reference by keywords in its title. First matching rule wins.
pub fn classify_reference(title: &str) -> ReferenceKind {
    let title = title.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| title.contains(k)))
        .map_or(ReferenceKind::General, |(kind, _)| *kind)
}
