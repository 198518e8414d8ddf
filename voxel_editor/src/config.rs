//! Env parsing and startup constants.

use thiserror::Error;

use crate::model::{LayerSelection, DEFAULT_PEN, MAX_INDEX, PALETTE_LEN};

const RESOLUTION_ENV: &str = "VOXBOX_RESOLUTION";
const PEN_ENV: &str = "VOXBOX_PEN";
const LAYER_ENV: &str = "VOXBOX_LAYER";

const DEFAULT_RESOLUTION: (f32, f32) = (1280.0, 720.0);
const DEFAULT_LAYER: LayerSelection = LayerSelection::Y(MAX_INDEX);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected WIDTHxHEIGHT, got {0:?}")]
    Resolution(String),
    #[error("palette index must be 0..=14, got {0:?}")]
    Pen(String),
    #[error("layer must be y0..y10 or z0..z10, got {0:?}")]
    Layer(String),
}

/// Startup settings for the editor window and initial editing state.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    pub resolution: (f32, f32),
    pub pen: usize,
    pub layer: LayerSelection,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            pen: DEFAULT_PEN,
            layer: DEFAULT_LAYER,
        }
    }
}

/// Reads the editor settings from the environment. Invalid values are
/// reported and replaced by their defaults.
pub fn editor_config() -> EditorConfig {
    editor_config_from(|key| std::env::var(key).ok())
}

/// Same as [`editor_config`], reading each key through `lookup`.
pub fn editor_config_from(lookup: impl Fn(&str) -> Option<String>) -> EditorConfig {
    let defaults = EditorConfig::default();
    EditorConfig {
        resolution: read_setting(RESOLUTION_ENV, lookup(RESOLUTION_ENV), parse_resolution)
            .unwrap_or(defaults.resolution),
        pen: read_setting(PEN_ENV, lookup(PEN_ENV), parse_pen).unwrap_or(defaults.pen),
        layer: read_setting(LAYER_ENV, lookup(LAYER_ENV), parse_layer)
            .unwrap_or(defaults.layer),
    }
}

fn read_setting<T>(
    key: &str,
    raw: Option<String>,
    parse: fn(&str) -> Result<T, ConfigError>,
) -> Option<T> {
    match parse(raw?.trim()) {
        Ok(value) => Some(value),
        Err(err) => {
            eprintln!("voxbox: invalid {key}: {err}");
            None
        }
    }
}

pub fn parse_resolution(raw: &str) -> Result<(f32, f32), ConfigError> {
    let err = || ConfigError::Resolution(raw.to_string());
    let (w, h) = raw.split_once(['x', 'X']).ok_or_else(err)?;
    let w: u32 = w.trim().parse().map_err(|_| err())?;
    let h: u32 = h.trim().parse().map_err(|_| err())?;
    if w == 0 || h == 0 {
        return Err(err());
    }
    Ok((w as f32, h as f32))
}

pub fn parse_pen(raw: &str) -> Result<usize, ConfigError> {
    match raw.parse::<usize>() {
        Ok(index) if index < PALETTE_LEN => Ok(index),
        _ => Err(ConfigError::Pen(raw.to_string())),
    }
}

pub fn parse_layer(raw: &str) -> Result<LayerSelection, ConfigError> {
    let err = || ConfigError::Layer(raw.to_string());
    let mut chars = raw.chars();
    let axis = chars.next().ok_or_else(err)?;
    let index: usize = chars.as_str().parse().map_err(|_| err())?;
    if index > MAX_INDEX {
        return Err(err());
    }
    match axis.to_ascii_lowercase() {
        'y' => Ok(LayerSelection::Y(index)),
        'z' => Ok(LayerSelection::Z(index)),
        _ => Err(err()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> EditorConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        editor_config_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config_with(&[]), EditorConfig::default());
        assert_eq!(EditorConfig::default().layer, LayerSelection::Y(10));
    }

    #[test]
    fn env_values_override_defaults() {
        let config = config_with(&[
            (RESOLUTION_ENV, "1600x900"),
            (PEN_ENV, " 12 "),
            (LAYER_ENV, "z3"),
        ]);

        assert_eq!(config.resolution, (1600.0, 900.0));
        assert_eq!(config.pen, 12);
        assert_eq!(config.layer, LayerSelection::Z(3));
    }

    #[test]
    fn invalid_values_fall_back_per_field() {
        let config = config_with(&[
            (RESOLUTION_ENV, "wide"),
            (PEN_ENV, "15"),
            (LAYER_ENV, "y4"),
        ]);

        assert_eq!(config.resolution, DEFAULT_RESOLUTION);
        assert_eq!(config.pen, DEFAULT_PEN);
        assert_eq!(config.layer, LayerSelection::Y(4));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let config = config_with(&[("VOXBOX_PENCIL", "3"), ("RESOLUTION", "10x10")]);
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn layer_parsing_rejects_out_of_range_and_unknown_axes() {
        assert_eq!(parse_layer("Y0"), Ok(LayerSelection::Y(0)));
        assert!(matches!(parse_layer("y11"), Err(ConfigError::Layer(_))));
        assert!(matches!(parse_layer("x2"), Err(ConfigError::Layer(_))));
        assert!(matches!(parse_layer(""), Err(ConfigError::Layer(_))));
    }

    #[test]
    fn resolution_parsing_rejects_zero_sizes() {
        assert_eq!(parse_resolution("800 x 600"), Ok((800.0, 600.0)));
        assert!(parse_resolution("0x600").is_err());
        assert!(parse_resolution("800").is_err());
    }
}
