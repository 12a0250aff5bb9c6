use projboard_core::{validate, ProjectDraft, ProjectField, ProjectRules, Validatable};

#[test]
fn reference_descriptors() {
    assert!(!validate(&Validatable::new("").required()));
    assert!(validate(&Validatable::new("hello").required().min_length(5)));
    assert!(validate(&Validatable::new(3).min(1.0).max(5.0)));
    assert!(!validate(&Validatable::new(6).min(1.0).max(5.0)));
}

#[test]
fn form_descriptors_reject_each_invalid_field() {
    let rules = ProjectRules::default();

    let empty_title = Validatable::new("").required();
    let short_description = Validatable::new("four")
        .required()
        .min_length(rules.description_min_length);
    let zero_people = Validatable::new(0)
        .required()
        .min(f64::from(rules.people_min))
        .max(f64::from(rules.people_max));
    let six_people = Validatable::new(6)
        .required()
        .min(f64::from(rules.people_min))
        .max(f64::from(rules.people_max));

    for descriptor in [empty_title, short_description, zero_people, six_people] {
        assert!(!validate(&descriptor), "descriptor should fail: {descriptor:?}");
    }
}

#[test]
fn valid_draft_passes() {
    let draft = ProjectDraft::from_form("Build API", "Design and ship REST endpoints", "3");
    draft
        .validate(&ProjectRules::default())
        .expect("valid draft should pass");
}

#[test]
fn invalid_drafts_report_the_failing_field() {
    let rules = ProjectRules::default();
    let cases = [
        (ProjectDraft::from_form("   ", "long enough", "2"), ProjectField::Title),
        (ProjectDraft::from_form("Title", "four", "2"), ProjectField::Description),
        (ProjectDraft::from_form("Title", "long enough", "0"), ProjectField::People),
        (ProjectDraft::from_form("Title", "long enough", "6"), ProjectField::People),
        (ProjectDraft::from_form("Title", "long enough", ""), ProjectField::People),
        (ProjectDraft::from_form("Title", "long enough", "abc"), ProjectField::People),
    ];

    for (draft, field) in cases {
        let err = draft
            .validate(&rules)
            .expect_err("invalid draft must be rejected");
        assert_eq!(err.field, field, "draft: {draft:?}");
    }
}

#[test]
fn people_bounds_are_inclusive() {
    let rules = ProjectRules::default();
    for people in [1, 5] {
        ProjectDraft::new("Title", "long enough", people)
            .validate(&rules)
            .expect("boundary people count should pass");
    }
}
