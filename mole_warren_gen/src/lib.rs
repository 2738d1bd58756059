// mole_warren_gen — pure Rust procedural grid generation library.
//
// This crate contains the whole warren generator: a population of digger
// agents random-walks across an initially solid 2D grid, carving open cells
// until a target open ratio is reached, then deterministic cleanup passes
// run over the result. Nothing here touches an engine or a renderer;
// the full pipeline runs headless under plain cargo.
//
// Module overview:
// - `generator.rs`:   Top-level WarrenGenerator — owns config, PRNG, cached grid.
// - `carve.rs`:       The carve loop — digger movement and population updates.
// - `grid.rs`:        Dense 2D cell grid (the run's spatial truth).
// - `spawn.rs`:       Spawn strategies — where new diggers appear.
// - `postprocess.rs`: Isolated-wall removal + border enforcement.
// - `agent.rs`:       The Digger — position + heading.
// - `config.rs`:      GeneratorConfig — all tunable parameters + validation.
// - `prng`:           Re-exported from `mole_warren_prng` — xoshiro256** PRNG with SplitMix64 seeding.
// - `types.rs`:       CellState, CellCoord, Direction, SpawnMode.
//
// The companion `carve` binary wraps this library for the command line.
//
// **Critical constraint: determinism.** Generation is a pure function:
// `(seed, config) -> grid`. Every draw comes from the seeded `WarrenRng`
// threaded through the pipeline; nothing reads system time, OS entropy, or
// iteration order of an unordered collection.

pub mod agent;
pub mod carve;
pub mod config;
pub mod generator;
pub mod grid;
pub mod postprocess;
pub use mole_warren_prng as prng;
pub mod spawn;
pub mod types;
