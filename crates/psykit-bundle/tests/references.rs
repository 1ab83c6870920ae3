use psykit_bundle::classify_reference;
use psykit_core::models::block::ReferenceKind;

#[test]
fn titles_classify_by_first_matching_rule() {
    let cases = [
        ("Stanley B, Brown GK. Safety Planning Intervention", ReferenceKind::Safety),
        ("Suicide risk assessment guideline", ReferenceKind::Safety),
        ("APA Practice Guideline for Major Depressive Disorder", ReferenceKind::Guideline),
        ("Psychometric properties of the GAD-7", ReferenceKind::Validation),
        ("A meta-analysis of PHQ-9 cutoffs", ReferenceKind::Review),
        ("Feeling Good: The New Mood Therapy", ReferenceKind::General),
    ];
    for (title, kind) in cases {
        assert_eq!(classify_reference(title), kind, "{title}");
    }
}
