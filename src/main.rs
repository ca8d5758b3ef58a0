use farpoint::config::Config;
use farpoint::input::Prompter;
use farpoint::models::Region;
use farpoint::render::SvgScatter;
use farpoint::session;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing. Logs go to stderr; stdout carries the prompts.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farpoint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    let region = Region::default();
    let mut rng = match config.rng_seed {
        Some(seed) => {
            tracing::debug!("Seeding RNG from RNG_SEED={}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let renderer = SvgScatter::new(config.plot_path.clone());
    let mut prompter = Prompter::stdio();

    session::run(&mut prompter, &region, &mut rng, &renderer)?;

    Ok(())
}
