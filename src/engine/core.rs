use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub app_name: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Directory texture references are resolved against.
    pub asset_dir: PathBuf,
    /// Upper bound on the render resolution multiplier for high-density displays.
    pub max_pixel_ratio: f64,
    /// Exit after this many frames; run indefinitely when `None`.
    pub max_frames: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Orrery".to_string(),
            window_width: 1280,
            window_height: 720,
            asset_dir: PathBuf::from("assets"),
            max_pixel_ratio: 2.0,
            max_frames: None,
        }
    }
}

impl EngineConfig {
    pub const FILE_NAME: &'static str = "orrery.ron";
    pub const PATH_ENV: &'static str = "ORRERY_CONFIG";

    pub fn from_ron_str(source: &str) -> Result<Self> {
        ron::from_str(source).context("invalid engine config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_ron_str(&source).with_context(|| format!("in {}", path.display()))
    }

    /// Loads from `$ORRERY_CONFIG`, then `./orrery.ron`, else defaults.
    /// An explicitly named file that cannot be read is an error.
    pub fn discover() -> Result<Self> {
        if let Some(path) = std::env::var_os(Self::PATH_ENV) {
            tracing::info!(target: "engine", path = ?path, "loading config from environment");
            return Self::load(path);
        }
        let local = Path::new(Self::FILE_NAME);
        if local.is_file() {
            tracing::info!(target: "engine", path = %local.display(), "loading config");
            return Self::load(local);
        }
        tracing::debug!(target: "engine", "no config file, using defaults");
        Ok(Self::default())
    }

    pub fn stop_condition(&self) -> StopCondition {
        match self.max_frames {
            Some(frames) => StopCondition::AfterFrames(frames),
            None => StopCondition::Never,
        }
    }
}

/// When the frame loop should end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopCondition {
    #[default]
    Never,
    AfterFrames(u64),
}

impl StopCondition {
    pub fn should_stop(&self, frames: u64) -> bool {
        match *self {
            Self::Never => false,
            Self::AfterFrames(limit) => frames >= limit,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FrameTiming {
    pub delta_seconds: f32,
    pub fps: f32,
}

impl FrameTiming {
    const SMOOTHING: f32 = 0.1;

    /// Records a frame interval; `fps` is an exponential moving average.
    pub fn record(&mut self, delta: Duration) {
        self.delta_seconds = delta.as_secs_f32();
        if self.delta_seconds <= 0.0 {
            return;
        }
        let instant = 1.0 / self.delta_seconds;
        self.fps = if self.fps == 0.0 {
            instant
        } else {
            self.fps + (instant - self.fps) * Self::SMOOTHING
        };
    }
}
