use lib_game::*;

#[test]
fn full_config_parses() {
    let cfg = GameCfg::from_ron(
        r#"(
            window: (
                title: "Fish!",
                width: 800,
                height: 600,
                tick_rate: 30.0,
                fullscreen: true,
            ),
            fish: (
                count: 4,
                width: 32,
                height: 48,
                glide_time: 0.5,
            ),
            assets: (
                background: "a/bg.png",
                fish: "a/fish.png",
                font: "a/font.ttf",
            ),
            rng: (
                seed: Some(1234),
            ),
        )"#,
    )
    .unwrap();

    assert_eq!(cfg.window.title, "Fish!");
    assert_eq!(cfg.fish.count, 4);
    assert_eq!(cfg.fish.glide_time, 0.5);
    assert_eq!(cfg.rng.seed, Some(1234));
    assert_eq!(cfg.tick(), 1.0 / 30.0);
    assert_eq!(TextureId::Background.path(&cfg.assets), "a/bg.png");

    let region = cfg.validate().unwrap();
    assert_eq!(region.max(), macroquad::math::uvec2(800 - 64, 600 - 96));
}

#[test]
fn partial_config_keeps_defaults() {
    let cfg = GameCfg::from_ron("(fish: (count: 3))").unwrap();

    assert_eq!(cfg.fish.count, 3);
    assert_eq!(cfg.fish.width, 64);
    assert_eq!(cfg.window, GameCfg::default().window);
    assert_eq!(cfg.rng.seed, None);
}

#[test]
fn garbage_is_a_parse_error() {
    let err = GameCfg::from_ron("(fish: (count: \"many\"))").unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn bad_geometry_fails_validation() {
    let cfg = GameCfg::from_ron("(window: (width: 100, height: 100), fish: (width: 51))").unwrap();

    let err = cfg.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Spawn(SpawnError {
            axis: Axis::X,
            field: 100,
            target: 51,
        })
    ));
}

#[test]
fn bad_tick_rate_fails_validation() {
    for rate in ["0.0", "-60.0"] {
        let cfg = GameCfg::from_ron(&format!("(window: (tick_rate: {rate}))")).unwrap();
        assert!(matches!(cfg.validate(), Err(ConfigError::BadTickRate(_))));
    }
}

#[test]
fn bad_glide_time_fails_validation() {
    for time in ["NaN", "inf", "-inf", "-1.0"] {
        let cfg = GameCfg::from_ron(&format!("(fish: (glide_time: {time}))")).unwrap();
        assert!(
            matches!(cfg.validate(), Err(ConfigError::BadGlideTime(_))),
            "glide_time {time} was accepted"
        );
    }

    let cfg = GameCfg::from_ron("(fish: (glide_time: 0.5))").unwrap();
    assert!(cfg.validate().is_ok());
}

#[test]
fn oversized_window_fails_validation() {
    let cfg = GameCfg::from_ron("(window: (width: 3000000000))").unwrap();

    assert!(matches!(cfg.validate(), Err(ConfigError::WindowTooLarge(_))));
    assert_eq!(cfg.window_size(), None);
    assert_eq!(GameCfg::default().window_size(), Some((1600, 900)));
}

#[test]
fn missing_file_means_defaults() {
    let cfg = GameCfg::load(std::path::Path::new("definitely/not/here/fish.ron")).unwrap();

    assert_eq!(cfg, GameCfg::default());
}

#[test]
fn config_roundtrips_through_ron() {
    let mut cfg = GameCfg::default();
    cfg.fish.count = 7;
    cfg.rng.seed = Some(5);

    let text = ron::to_string(&cfg).unwrap();
    assert_eq!(GameCfg::from_ron(&text).unwrap(), cfg);
}
