use crate::constants::DEFAULT_PLOT_PATH;
use std::env;
use std::path::PathBuf;

/// Runtime knobs read from the environment (optionally via a `.env` file).
/// Everything has a default; nothing here is required to start a session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the scatter plot is written. `PLOT_OUTPUT`.
    pub plot_path: PathBuf,
    /// Fixed RNG seed for reproducible random sessions. `RNG_SEED`.
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let plot_path = env::var("PLOT_OUTPUT")
            .unwrap_or_else(|_| DEFAULT_PLOT_PATH.to_string())
            .into();

        let rng_seed = match env::var("RNG_SEED") {
            Ok(raw) => Some(raw.parse().map_err(|_| "Invalid RNG_SEED")?),
            Err(_) => None,
        };

        Ok(Config {
            plot_path,
            rng_seed,
        })
    }
}
