use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = SceneConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.fps, Fps::new(30, 1).unwrap());
    assert_eq!(cfg.default_rate, Ease::Smooth);
    PlayConfig::new().validate().unwrap();
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let cfg = SceneConfig::from_json_str(
        r#"{ "fps": { "num": 60, "den": 1 }, "default_rate": "linear" }"#,
    )
    .unwrap();
    assert_eq!(cfg.fps.num, 60);
    assert_eq!(cfg.default_rate, Ease::Linear);
    assert_eq!(cfg.default_run_time, 1.0);
}

#[test]
fn json_errors_are_typed() {
    assert!(matches!(
        SceneConfig::from_json_str("{ not json").unwrap_err(),
        KinemaError::Serde(_)
    ));
    assert!(matches!(
        SceneConfig::from_json_str(r#"{ "fps": { "num": 0, "den": 1 } }"#).unwrap_err(),
        KinemaError::Validation(_)
    ));
}

#[test]
fn missing_file_is_wrapped_io_error() {
    let err = SceneConfig::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, KinemaError::Other(_)));
    assert!(err.to_string().contains("read scene config"));
}

#[test]
fn play_config_rejects_bad_values() {
    assert!(PlayConfig::new().run_time(0.0).validate().is_err());
    assert!(PlayConfig::new().lag_ratio(-0.5).validate().is_err());
    assert!(PlayConfig::new().lag_ratio(f64::NAN).validate().is_err());
    assert!(
        PlayConfig::new()
            .run_time(2.0)
            .lag_ratio(0.25)
            .rate_func(Ease::Linear)
            .validate()
            .is_ok()
    );
}
