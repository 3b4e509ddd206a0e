use super::*;

#[test]
fn defaults_match_page_turn_feel() {
    let cfg = BookConfig::default();
    assert_eq!(cfg.flip_duration(), Duration::from_millis(800));
    assert_eq!(cfg.ease, Ease::InOutCubic);
    assert_eq!(cfg.z_boost, 10);
    assert!(!cfg.queue_while_animating);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let json = r#"{ "flip_duration_ms": 500, "start_page": 4, "layout": { "fill_factor": 0.9 } }"#;
    let cfg = BookConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.flip_duration_ms, 500);
    assert_eq!(cfg.start_page, 4);
    assert_eq!(cfg.layout.fill_factor, 0.9);
    assert_eq!(cfg.layout.vertical_margin, 82.0);
    assert!(cfg.show_cover);
}

#[test]
fn invalid_values_are_rejected() {
    let zero = r#"{ "flip_duration_ms": 0 }"#;
    assert!(matches!(
        BookConfig::from_reader(zero.as_bytes()),
        Err(BookError::Validation(_))
    ));

    let shade = r#"{ "max_shade": 2.0 }"#;
    assert!(BookConfig::from_reader(shade.as_bytes()).is_err());

    let layout = r#"{ "layout": { "aspect_ratio": -1.0 } }"#;
    assert!(matches!(
        BookConfig::from_reader(layout.as_bytes()),
        Err(BookError::Layout(_))
    ));
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        BookConfig::from_reader("{ nope".as_bytes()),
        Err(BookError::Serde(_))
    ));
}

#[test]
fn missing_file_is_reported() {
    let err = BookConfig::from_path("target/definitely/missing/book.json").unwrap_err();
    assert!(err.to_string().contains("open book config"));
}

#[test]
fn ease_accepts_timeline_aliases() {
    let cfg = BookConfig::from_reader(r#"{"ease":"power2.inOut"}"#.as_bytes()).unwrap();
    assert_eq!(cfg.ease, Ease::InOutCubic);

    let cfg = BookConfig::from_reader(r#"{"ease":"power1.out"}"#.as_bytes()).unwrap();
    assert_eq!(cfg.ease, Ease::OutQuad);

    assert!(matches!(
        BookConfig::from_reader(r#"{"ease":"bounce"}"#.as_bytes()),
        Err(BookError::Serde(_))
    ));
}

#[test]
fn serialized_config_reads_back() {
    let cfg = BookConfig {
        ease: Ease::OutCubic,
        ..BookConfig::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(BookConfig::from_reader(json.as_bytes()).unwrap(), cfg);
}
