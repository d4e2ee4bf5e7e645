use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

pub const CELL_SIZE: f32 = 75.0;
pub const SURFACE_WIDTH: f32 = 750.0;
pub const SURFACE_HEIGHT: f32 = 600.0;
pub const STEP_DELAY_MS: u64 = 40;
pub const OBSTACLE_DENSITY: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub cell_size: f32,
    pub step_delay: Duration,
    pub obstacle_density: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            cell_size: CELL_SIZE,
            step_delay: Duration::from_millis(STEP_DELAY_MS),
            obstacle_density: OBSTACLE_DENSITY,
        }
    }
}

impl Config {
    /// Reads `MAZE_*` variables, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let surface_width =
            read(&lookup, "MAZE_SURFACE_WIDTH", defaults.surface_width, positive)?;
        let surface_height =
            read(&lookup, "MAZE_SURFACE_HEIGHT", defaults.surface_height, positive)?;
        let cell_size = read(&lookup, "MAZE_CELL_SIZE", defaults.cell_size, positive)?;
        let step_delay_ms = read(&lookup, "MAZE_STEP_DELAY_MS", STEP_DELAY_MS, |_| true)?;
        let obstacle_density = read(
            &lookup,
            "MAZE_OBSTACLE_DENSITY",
            defaults.obstacle_density,
            |density: &f64| (0.0..=1.0).contains(density),
        )?;

        Ok(Self {
            surface_width,
            surface_height,
            cell_size,
            step_delay: Duration::from_millis(step_delay_ms),
            obstacle_density,
        })
    }
}

fn positive(value: &f32) -> bool {
    value.is_finite() && *value > 0.0
}

fn read<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    accept: impl Fn(&T) -> bool,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => Ok(value),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cell_size, 75.0);
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("MAZE_CELL_SIZE", "40"),
            ("MAZE_STEP_DELAY_MS", " 5 "),
            ("MAZE_OBSTACLE_DENSITY", "0.5"),
        ]))
        .unwrap();

        assert_eq!(config.cell_size, 40.0);
        assert_eq!(config.step_delay, Duration::from_millis(5));
        assert_eq!(config.obstacle_density, 0.5);
        assert_eq!(config.surface_width, SURFACE_WIDTH);
    }

    #[test]
    fn unparsable_or_out_of_range_values_are_reported() {
        let result = Config::from_lookup(lookup_from(&[("MAZE_CELL_SIZE", "big")]));
        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                key: "MAZE_CELL_SIZE",
                value: "big".to_string(),
            })
        );

        let result = Config::from_lookup(lookup_from(&[("MAZE_CELL_SIZE", "-3")]));
        assert!(result.is_err());

        let result = Config::from_lookup(lookup_from(&[("MAZE_OBSTACLE_DENSITY", "1.5")]));
        assert!(result.is_err());
    }
}
