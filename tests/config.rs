use std::path::PathBuf;
use std::time::Duration;

use glam::Vec3;
use orrery::engine::core::{EngineConfig, FrameTiming, StopCondition};
use orrery::engine::light::{color_from_hex, PointLight};

#[test]
fn test_default_config() {
    let config = EngineConfig::default();

    assert_eq!(config.app_name, "Orrery");
    assert_eq!((config.window_width, config.window_height), (1280, 720));
    assert_eq!(config.asset_dir, PathBuf::from("assets"));
    assert_eq!(config.max_pixel_ratio, 2.0);
    assert_eq!(config.stop_condition(), StopCondition::Never);
}

#[test]
fn test_partial_ron_keeps_defaults() {
    let config = EngineConfig::from_ron_str(
        r#"(
            app_name: "Headless orrery",
            asset_dir: "textures",
            max_frames: Some(3),
        )"#,
    )
    .expect("valid config");

    assert_eq!(config.app_name, "Headless orrery");
    assert_eq!(config.asset_dir, PathBuf::from("textures"));
    assert_eq!(config.window_width, 1280);
    assert_eq!(config.stop_condition(), StopCondition::AfterFrames(3));
}

#[test]
fn test_invalid_ron_is_an_error() {
    let err = EngineConfig::from_ron_str("(window_width: \"wide\")").unwrap_err();
    println!("{err:#}");
    assert!(format!("{err:#}").contains("invalid engine config"));
}

#[test]
fn test_load_from_file() {
    let dir = std::env::temp_dir().join(format!("orrery-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(EngineConfig::FILE_NAME);
    std::fs::write(&path, "(window_width: 640, window_height: 480, max_pixel_ratio: 1.0)").unwrap();

    let config = EngineConfig::load(&path).unwrap();
    assert_eq!((config.window_width, config.window_height), (640, 480));
    assert_eq!(config.max_pixel_ratio, 1.0);

    let missing = EngineConfig::load(dir.join("absent.ron"));
    assert!(missing.is_err());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_stop_condition() {
    assert!(!StopCondition::Never.should_stop(u64::MAX));
    assert!(!StopCondition::AfterFrames(3).should_stop(2));
    assert!(StopCondition::AfterFrames(3).should_stop(3));
    assert!(StopCondition::AfterFrames(0).should_stop(0));
}

#[test]
fn test_frame_timing_smooths_fps() {
    let mut timing = FrameTiming::default();

    timing.record(Duration::from_millis(10));
    assert!((timing.fps - 100.0).abs() < 1e-3);

    timing.record(Duration::from_millis(20));
    assert!((timing.fps - 95.0).abs() < 1e-3);
    assert!((timing.delta_seconds - 0.02).abs() < 1e-6);

    timing.record(Duration::ZERO);
    assert!((timing.fps - 95.0).abs() < 1e-3);
}

#[test]
fn test_point_light_falloff() {
    let light = PointLight::new(0xffffff, 100_000.0, 10_000.0);
    assert_eq!(light.color, Vec3::ONE);
    assert_eq!(light.decay, 2.0);

    let at_earth = light.attenuation(95.0);
    let cutoff = (1.0f32 - (95.0f32 / 10_000.0).powi(4)).powi(2);
    assert!((at_earth - cutoff / (95.0 * 95.0)).abs() < 1e-9);

    // Clamped near the source, zero past the cutoff.
    assert_eq!(light.attenuation(0.0), 100.0);
    assert_eq!(light.attenuation(10_000.0), 0.0);
    assert_eq!(light.attenuation(20_000.0), 0.0);

    assert_eq!(color_from_hex(0xff8000), Vec3::new(1.0, 128.0 / 255.0, 0.0));
}
