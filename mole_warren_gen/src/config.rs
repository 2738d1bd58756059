// Generator configuration.
//
// All tunable generation parameters live in `GeneratorConfig`, loadable
// from JSON. The carve loop never uses magic numbers; it reads from the
// config. Every field carries a serde default, so a JSON file may override
// just the fields it cares about.
//
// Configs are validated once, at generator construction, against the
// documented field ranges. Past that point the loop treats every value as
// trusted; no range is re-checked mid-run.
//
// See also: `generator.rs` which owns the validated config as part of
// `WarrenGenerator`, `carve.rs` for the loop that reads it, `spawn.rs` for
// the spawn modes it selects.
//
// **Critical constraint: determinism.** Config values feed directly into
// the carve loop. Identical seed + identical config is the reproducibility
// contract.

use crate::types::SpawnMode;
use serde::{Deserialize, Serialize};

/// Tunable parameters for one generation run. Never mutated after
/// construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width in cells. Must be at least 3 so an interior distinct
    /// from the border exists.
    pub width: u32,

    /// Grid height in cells. Must be at least 3.
    pub height: u32,

    /// Hard cap on the digger population. Must be at least 1.
    pub max_diggers: u32,

    /// Fraction of all cells to carve open before the loop stops, in
    /// [0, 1]. Unreachable targets are not an error; the loop gives up
    /// after its iteration cap and returns the partial grid.
    pub target_open_ratio: f32,

    /// Per-digger chance each tick of redrawing its heading, in [0, 1].
    /// The redraw is an independent uniform draw and may repeat the
    /// current heading.
    pub change_direction_chance: f32,

    /// Chance, per scanned digger, of spawning one new digger this tick,
    /// in [0, 1]. At most one digger is added per tick.
    pub add_digger_chance: f32,

    /// Chance, per scanned digger, of being removed this tick, in [0, 1].
    /// At most one digger is removed per tick, and never the last one.
    pub remove_digger_chance: f32,

    /// Fill every cell on the grid edge after carving.
    pub add_border: bool,

    /// Convert walls whose whole neighborhood is open into open cells
    /// after carving.
    pub remove_isolated_walls: bool,

    /// Where newly added diggers appear.
    pub spawn_mode: SpawnMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            max_diggers: 20,
            target_open_ratio: 0.55,
            change_direction_chance: 0.7,
            add_digger_chance: 0.3,
            remove_digger_chance: 0.1,
            add_border: true,
            remove_isolated_walls: false,
            spawn_mode: SpawnMode::RandomCorner,
        }
    }
}

impl GeneratorConfig {
    /// Check every field against its documented range.
    ///
    /// Returns the first violation as an error string naming the field and
    /// the offending value.
    pub fn validate(&self) -> Result<(), String> {
        if self.width < 3 {
            return Err(format!("width must be at least 3, got {}", self.width));
        }
        if self.height < 3 {
            return Err(format!("height must be at least 3, got {}", self.height));
        }
        if self.max_diggers < 1 {
            return Err(format!(
                "max_diggers must be at least 1, got {}",
                self.max_diggers
            ));
        }
        check_unit_interval("target_open_ratio", self.target_open_ratio)?;
        check_unit_interval("change_direction_chance", self.change_direction_chance)?;
        check_unit_interval("add_digger_chance", self.add_digger_chance)?;
        check_unit_interval("remove_digger_chance", self.remove_digger_chance)?;
        Ok(())
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn check_unit_interval(name: &str, value: f32) -> Result<(), String> {
    // NaN fails the range check and is rejected with the same message.
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{name} must be in [0, 1], got {value}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn default_config_serializes() {
        let config = GeneratorConfig::default();
        let json = config.to_json().unwrap();
        let restored = GeneratorConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn config_loads_from_full_json() {
        let json = r#"{
            "width": 80,
            "height": 24,
            "max_diggers": 6,
            "target_open_ratio": 0.4,
            "change_direction_chance": 0.5,
            "add_digger_chance": 0.2,
            "remove_digger_chance": 0.05,
            "add_border": false,
            "remove_isolated_walls": true,
            "spawn_mode": "Center"
        }"#;
        let config = GeneratorConfig::from_json(json).unwrap();
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 24);
        assert_eq!(config.max_diggers, 6);
        assert_eq!(config.spawn_mode, SpawnMode::Center);
        assert!(!config.add_border);
        assert!(config.remove_isolated_walls);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GeneratorConfig::from_json(r#"{"width": 30, "max_diggers": 4}"#).unwrap();
        assert_eq!(config.width, 30);
        assert_eq!(config.max_diggers, 4);
        // Everything else comes from Default.
        assert_eq!(config.height, 50);
        assert_eq!(config.target_open_ratio, 0.55);
        assert_eq!(config.spawn_mode, SpawnMode::RandomCorner);
        assert!(config.add_border);
    }

    #[test]
    fn validate_rejects_narrow_grid() {
        let config = GeneratorConfig {
            width: 2,
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("width"), "unexpected message: {err}");

        let config = GeneratorConfig {
            height: 0,
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("height"), "unexpected message: {err}");
    }

    #[test]
    fn validate_rejects_empty_population() {
        let config = GeneratorConfig {
            max_diggers: 0,
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("max_diggers"), "unexpected message: {err}");
    }

    #[test]
    fn validate_rejects_out_of_range_chances() {
        let config = GeneratorConfig {
            target_open_ratio: 1.5,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            change_direction_chance: -0.1,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            add_digger_chance: f32::NAN,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            remove_digger_chance: 2.0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn boundary_chances_are_valid() {
        let config = GeneratorConfig {
            target_open_ratio: 1.0,
            change_direction_chance: 0.0,
            add_digger_chance: 1.0,
            remove_digger_chance: 0.0,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
