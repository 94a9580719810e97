//! integration tests: run the full tour through the public API

use capabilities::{
    run_all, Conformance, Lesson, LessonOutcome, OutputFormat, TourConfig, TourError,
};

#[test]
fn test_full_tour_in_order() {
    let cfg = TourConfig::default();
    cfg.validate().expect("default config is valid");

    let outcomes = run_all(&cfg.lessons);
    let order: Vec<Lesson> = outcomes.iter().map(|o| o.lesson).collect();
    assert_eq!(order, Lesson::ALL);
}

#[test]
fn test_outcomes_serialize_to_json() {
    let outcomes = run_all(&Lesson::ALL);
    let json = serde_json::to_string_pretty(&outcomes).expect("serialize");
    assert!(json.contains("\"lesson\": \"constrained-associated-type\""));
    assert!(json.contains("\"capability\": \"MixedFurniture\""));

    let back: Vec<LessonOutcome> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, outcomes);
}

#[test]
fn test_conformance_without_associated_types_omits_field() {
    let json = serde_json::to_value(Conformance::of_add_one::<u8>()).expect("serialize");
    assert_eq!(json["conformer"], "u8");
    assert!(json.get("associated").is_none());
}

#[test]
fn test_config_from_json() {
    let cfg: TourConfig =
        serde_json::from_str(r#"{ "lessons": ["increment", "self-factory"], "format": "json" }"#)
            .expect("parse config");
    assert_eq!(cfg.lessons, [Lesson::Increment, Lesson::SelfFactory]);
    assert_eq!(cfg.format, OutputFormat::Json);

    // missing fields fall back to defaults
    let partial: TourConfig = serde_json::from_str(r#"{ "format": "json" }"#).expect("parse");
    assert_eq!(partial.lessons, Lesson::ALL);
}

#[test]
fn test_unknown_names_are_errors() {
    assert!(matches!(
        "mirror".parse::<Lesson>(),
        Err(TourError::UnknownLesson(name)) if name == "mirror"
    ));
    assert_eq!(
        "xml".parse::<OutputFormat>().unwrap_err().to_string(),
        "unknown output format: xml"
    );
    assert!(serde_json::from_str::<TourConfig>(r#"{ "lessons": ["nope"] }"#).is_err());
}
