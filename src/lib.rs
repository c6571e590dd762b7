pub mod cli;
pub mod config;
pub mod events;
pub mod formats;
pub mod layer;
pub mod model;
pub mod region;
pub mod registry;
pub mod render;
pub mod runtime;
pub mod session;
pub mod stack;
pub mod state;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
