// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod config;
pub mod gallows;
pub mod letters;
pub mod runtime;
pub mod session;
pub mod words;

/// Cadence of the game loop's tick events, in milliseconds.
pub const TICK_RATE_MS: u64 = 100;
