// Stateful generator wrapping config, RNG, and the most recent result.
//
// `WarrenGenerator` owns a seeded `WarrenRng` and runs the full pipeline
// (carve loop, then cleanup passes) on demand. `generate()` always runs a
// fresh carve, drawing further along the generator's random stream;
// `current_or_generate()` returns the cached grid when one exists and only
// carves on the first call. The two are deliberately separate operations:
// callers choose between "give me a new layout" and "give me the layout".
//
// **Critical constraint: determinism.** Two generators built with the same
// seed and config produce identical grids call for call. The whole
// generator, RNG state included, serializes to JSON, so a restored
// generator continues the same stream it would have produced uninterrupted.
//
// See also: `carve.rs` for the carve loop, `postprocess.rs` for the cleanup
// passes, `config.rs` for the tunables.

use crate::carve::{self, CarveReport};
use crate::config::GeneratorConfig;
use crate::grid::CellGrid;
use crate::postprocess;
use crate::prng::WarrenRng;
use serde::{Deserialize, Serialize};

/// Deterministic warren generator with cached result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarrenGenerator {
    config: GeneratorConfig,
    rng: WarrenRng,
    result: Option<CellGrid>,
    report: Option<CarveReport>,
}

impl WarrenGenerator {
    /// Create a generator with default config and the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: WarrenRng::new(seed),
            result: None,
            report: None,
        }
    }

    /// Create a generator with the given seed and config.
    ///
    /// Rejects configs that fail validation.
    pub fn with_config(seed: u64, config: GeneratorConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            config,
            rng: WarrenRng::new(seed),
            result: None,
            report: None,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The most recently generated grid, if any.
    pub fn current(&self) -> Option<&CellGrid> {
        self.result.as_ref()
    }

    /// The report from the most recent carve, if any.
    pub fn last_report(&self) -> Option<&CarveReport> {
        self.report.as_ref()
    }

    /// Run the pipeline and cache the grid, replacing any previous result.
    ///
    /// Each call draws further along the generator's random stream, so
    /// repeated calls produce different layouts.
    pub fn generate(&mut self) -> &CellGrid {
        let mut grid = CellGrid::new(self.config.width, self.config.height);
        let report = carve::carve_warren(&mut grid, &self.config, &mut self.rng);
        postprocess::apply(&mut grid, &self.config);
        self.report = Some(report);
        self.result.insert(grid)
    }

    /// Return the cached grid, generating it first if none exists yet.
    pub fn current_or_generate(&mut self) -> &CellGrid {
        if self.result.is_none() {
            self.generate();
        }
        // A result always exists after the branch above.
        self.result.as_ref().unwrap()
    }

    /// Serialize the generator (config, RNG state, cached result) to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a generator from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellCoord, CellState};

    /// Small config so tests stay fast.
    fn test_config() -> GeneratorConfig {
        GeneratorConfig {
            width: 20,
            height: 20,
            target_open_ratio: 0.4,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn new_generator_has_no_result() {
        let generator = WarrenGenerator::new(7);
        assert!(generator.current().is_none());
        assert!(generator.last_report().is_none());
    }

    #[test]
    fn with_config_rejects_invalid_config() {
        let config = GeneratorConfig {
            change_direction_chance: 1.5,
            ..test_config()
        };
        let err = WarrenGenerator::with_config(1, config).unwrap_err();
        assert!(err.contains("change_direction_chance"));
    }

    #[test]
    fn generate_caches_result_and_report() {
        let mut generator = WarrenGenerator::with_config(11, test_config()).unwrap();
        let open = generator.generate().open_cells();
        assert!(open > 0);
        assert_eq!(generator.current().unwrap().open_cells(), open);
        let report = generator.last_report().unwrap();
        assert!(report.reached_target);
    }

    #[test]
    fn current_or_generate_runs_once() {
        // If the second call re-carved, the cached generator would drift
        // ahead of a reference generator that carved exactly once.
        let mut cached = WarrenGenerator::with_config(23, test_config()).unwrap();
        let mut reference = WarrenGenerator::with_config(23, test_config()).unwrap();

        let first = cached.current_or_generate().clone();
        let second = cached.current_or_generate().clone();
        let expected = reference.generate().clone();

        assert_eq!(first, expected);
        assert_eq!(second, expected);
    }

    #[test]
    fn generate_replaces_previous_result() {
        let mut generator = WarrenGenerator::with_config(5, test_config()).unwrap();
        let first = generator.generate().clone();
        let second = generator.generate().clone();
        // Same dimensions, different layout: the stream moved on.
        assert_eq!(second.width(), first.width());
        assert_eq!(second.height(), first.height());
        assert_ne!(first, second);
        assert_eq!(generator.current(), Some(&second));
    }

    #[test]
    fn same_seed_and_config_are_deterministic() {
        let mut a = WarrenGenerator::with_config(99, test_config()).unwrap();
        let mut b = WarrenGenerator::with_config(99, test_config()).unwrap();
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.last_report(), b.last_report());
    }

    #[test]
    fn generated_grid_keeps_border_filled() {
        let mut generator = WarrenGenerator::with_config(3, test_config()).unwrap();
        let grid = generator.generate();
        for x in 0..20 {
            assert_eq!(grid.get(CellCoord::new(x, 0)), CellState::Filled);
            assert_eq!(grid.get(CellCoord::new(x, 19)), CellState::Filled);
        }
        for y in 0..20 {
            assert_eq!(grid.get(CellCoord::new(0, y)), CellState::Filled);
            assert_eq!(grid.get(CellCoord::new(19, y)), CellState::Filled);
        }
    }

    #[test]
    fn restored_generator_continues_the_stream() {
        let mut original = WarrenGenerator::with_config(42, test_config()).unwrap();
        original.generate();

        let json = original.to_json().unwrap();
        let mut restored = WarrenGenerator::from_json(&json).unwrap();
        assert_eq!(restored.current(), original.current());

        // Both carve again from the same RNG state.
        assert_eq!(restored.generate(), original.generate());
    }
}
