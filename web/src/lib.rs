use clap::Parser;
use recollect_core::GameConfig;
use wasm_bindgen::prelude::*;

mod app;
mod scheduler;
mod surface;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Button count prefilled in the input
    #[arg(short, long, default_value_t = 4)]
    count: u8,

    /// Override the delay between scrambles, in milliseconds
    #[arg(long)]
    interval_ms: Option<u32>,
}

impl Args {
    /// Parses `#-v&--seed=42` style location hashes.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        if let Some(interval_ms) = self.interval_ms {
            config.scramble_interval_ms = interval_ms;
        }
        config
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = app::MemoryProps {
        config: args.config(),
        seed: args.seed,
        prefill: args.count,
    };

    log::debug!("App started");
    yew::Renderer::<app::MemoryView>::with_root_and_props(root, props).render();
}
