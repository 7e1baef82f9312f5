use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;
use crate::motion::typewriter::TypewriterTiming;

pub const CONFIG_ELEMENT_ID: &str = "portfolio-fx-config";

const DEFAULT_ROLES: [&str; 4] = [
    "Software Architect",
    "Full Stack Developer",
    "Solution Designer",
    "Technical Leader",
];
const DEFAULT_LOG_LEVEL: Level = Level::INFO;
const DEFAULT_TYPE_MS: u32 = 100;
const DEFAULT_DELETE_MS: u32 = 50;
const DEFAULT_HOLD_FULL_MS: u32 = 2_000;
const DEFAULT_HOLD_EMPTY_MS: u32 = 500;
const DEFAULT_TYPEWRITER_START_DELAY_MS: u32 = 2_000;
const DEFAULT_HUE_INTERVAL_MS: u32 = 100;
const DEFAULT_TRAIL_CAPACITY: usize = 20;
const DEFAULT_TRAIL_FADE_DELAY_MS: u32 = 10;
const DEFAULT_NAVBAR_THRESHOLD_PX: f64 = 100.0;
const DEFAULT_PARALLAX_FACTOR: f64 = 0.5;
const DEFAULT_ACTIVE_NAV_OFFSET_PX: f64 = 100.0;
const DEFAULT_COUNTER_INTERVAL_MS: u32 = 30;
const DEFAULT_COUNTER_STEPS: u32 = 50;
const DEFAULT_RIPPLE_DURATION_MS: u32 = 600;

const TICK_MS_BOUNDS: (u32, u32) = (10, 5_000);
const HOLD_MS_BOUNDS: (u32, u32) = (0, 60_000);
const HUE_INTERVAL_MS_BOUNDS: (u32, u32) = (16, 10_000);
const TRAIL_CAPACITY_BOUNDS: (usize, usize) = (1, 200);
const TRAIL_FADE_DELAY_MS_BOUNDS: (u32, u32) = (0, 1_000);
const PIXEL_OFFSET_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const PARALLAX_FACTOR_BOUNDS: (f64, f64) = (0.0, 2.0);
const COUNTER_INTERVAL_MS_BOUNDS: (u32, u32) = (5, 1_000);
const COUNTER_STEPS_BOUNDS: (u32, u32) = (1, 1_000);
const RIPPLE_DURATION_MS_BOUNDS: (u32, u32) = (100, 5_000);

#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub log_level: Level,
    pub roles: Vec<String>,
    pub typewriter: TypewriterTiming,
    pub typewriter_start_delay_ms: u32,
    pub hue_interval_ms: u32,
    pub trail_capacity: usize,
    pub trail_fade_delay_ms: u32,
    pub navbar_threshold_px: f64,
    pub parallax_factor: f64,
    pub active_nav_offset_px: f64,
    pub counter_interval_ms: u32,
    pub counter_steps: u32,
    pub ripple_duration_ms: u32,
    pub respect_reduced_motion: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            roles: DEFAULT_ROLES.iter().map(|role| role.to_string()).collect(),
            typewriter: TypewriterTiming {
                type_ms: DEFAULT_TYPE_MS,
                delete_ms: DEFAULT_DELETE_MS,
                hold_full_ms: DEFAULT_HOLD_FULL_MS,
                hold_empty_ms: DEFAULT_HOLD_EMPTY_MS,
            },
            typewriter_start_delay_ms: DEFAULT_TYPEWRITER_START_DELAY_MS,
            hue_interval_ms: DEFAULT_HUE_INTERVAL_MS,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            trail_fade_delay_ms: DEFAULT_TRAIL_FADE_DELAY_MS,
            navbar_threshold_px: DEFAULT_NAVBAR_THRESHOLD_PX,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            active_nav_offset_px: DEFAULT_ACTIVE_NAV_OFFSET_PX,
            counter_interval_ms: DEFAULT_COUNTER_INTERVAL_MS,
            counter_steps: DEFAULT_COUNTER_STEPS,
            ripple_duration_ms: DEFAULT_RIPPLE_DURATION_MS,
            respect_reduced_motion: false,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawEffectsConfig {
    log_level: Option<String>,
    roles: Option<Vec<String>>,
    type_ms: Option<u32>,
    delete_ms: Option<u32>,
    hold_full_ms: Option<u32>,
    hold_empty_ms: Option<u32>,
    typewriter_start_delay_ms: Option<u32>,
    hue_interval_ms: Option<u32>,
    trail_capacity: Option<usize>,
    trail_fade_delay_ms: Option<u32>,
    navbar_threshold_px: Option<f64>,
    parallax_factor: Option<f64>,
    active_nav_offset_px: Option<f64>,
    counter_interval_ms: Option<u32>,
    counter_steps: Option<u32>,
    ripple_duration_ms: Option<u32>,
    respect_reduced_motion: Option<bool>,
}

impl EffectsConfig {
    /// Parses the JSON blob embedded in the page. Missing keys and values
    /// outside their bounds keep the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawEffectsConfig = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawEffectsConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let roles = match raw.roles {
            Some(roles) => {
                let roles: Vec<String> = roles
                    .into_iter()
                    .map(|role| role.trim().to_string())
                    .filter(|role| !role.is_empty())
                    .collect();
                if roles.is_empty() {
                    return Err(ConfigError::NoPhrases);
                }
                roles
            }
            None => defaults.roles,
        };

        Ok(Self {
            log_level: parse_log_level(raw.log_level.as_deref(), DEFAULT_LOG_LEVEL),
            roles,
            typewriter: TypewriterTiming {
                type_ms: with_bounds(raw.type_ms, DEFAULT_TYPE_MS, TICK_MS_BOUNDS),
                delete_ms: with_bounds(raw.delete_ms, DEFAULT_DELETE_MS, TICK_MS_BOUNDS),
                hold_full_ms: with_bounds(raw.hold_full_ms, DEFAULT_HOLD_FULL_MS, HOLD_MS_BOUNDS),
                hold_empty_ms: with_bounds(
                    raw.hold_empty_ms,
                    DEFAULT_HOLD_EMPTY_MS,
                    HOLD_MS_BOUNDS,
                ),
            },
            typewriter_start_delay_ms: with_bounds(
                raw.typewriter_start_delay_ms,
                DEFAULT_TYPEWRITER_START_DELAY_MS,
                HOLD_MS_BOUNDS,
            ),
            hue_interval_ms: with_bounds(
                raw.hue_interval_ms,
                DEFAULT_HUE_INTERVAL_MS,
                HUE_INTERVAL_MS_BOUNDS,
            ),
            trail_capacity: with_bounds(
                raw.trail_capacity,
                DEFAULT_TRAIL_CAPACITY,
                TRAIL_CAPACITY_BOUNDS,
            ),
            trail_fade_delay_ms: with_bounds(
                raw.trail_fade_delay_ms,
                DEFAULT_TRAIL_FADE_DELAY_MS,
                TRAIL_FADE_DELAY_MS_BOUNDS,
            ),
            navbar_threshold_px: with_bounds(
                raw.navbar_threshold_px,
                DEFAULT_NAVBAR_THRESHOLD_PX,
                PIXEL_OFFSET_BOUNDS,
            ),
            parallax_factor: with_bounds(
                raw.parallax_factor,
                DEFAULT_PARALLAX_FACTOR,
                PARALLAX_FACTOR_BOUNDS,
            ),
            active_nav_offset_px: with_bounds(
                raw.active_nav_offset_px,
                DEFAULT_ACTIVE_NAV_OFFSET_PX,
                PIXEL_OFFSET_BOUNDS,
            ),
            counter_interval_ms: with_bounds(
                raw.counter_interval_ms,
                DEFAULT_COUNTER_INTERVAL_MS,
                COUNTER_INTERVAL_MS_BOUNDS,
            ),
            counter_steps: with_bounds(raw.counter_steps, DEFAULT_COUNTER_STEPS, COUNTER_STEPS_BOUNDS),
            ripple_duration_ms: with_bounds(
                raw.ripple_duration_ms,
                DEFAULT_RIPPLE_DURATION_MS,
                RIPPLE_DURATION_MS_BOUNDS,
            ),
            respect_reduced_motion: raw
                .respect_reduced_motion
                .unwrap_or(defaults.respect_reduced_motion),
        })
    }

    /// Whether trail, parallax and hue rotation stay off. Only when the page
    /// opted in and the user agent asks for reduced motion.
    pub fn skips_continuous_motion(&self, prefers_reduced_motion: bool) -> bool {
        self.respect_reduced_motion && prefers_reduced_motion
    }
}

fn with_bounds<T: PartialOrd>(value: Option<T>, default: T, bounds: (T, T)) -> T {
    value
        .filter(|value| *value >= bounds.0 && *value <= bounds.1)
        .unwrap_or(default)
}

fn parse_log_level(value: Option<&str>, default: Level) -> Level {
    match value
        .map(|value| value.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") => Level::WARN,
        Some("error") => Level::ERROR,
        _ => default,
    }
}
