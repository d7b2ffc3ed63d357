mod config;
mod controls;
mod game;
mod hud;
mod model;
mod prelude;
mod render;

use geng::prelude::*;

#[derive(clap::Parser)]
struct Opts {
    #[clap(long)]
    config: Option<std::path::PathBuf>,
    #[clap(flatten)]
    geng: geng::CliArgs,
}

fn main() {
    logger::init();
    geng::setup_panic_handler();

    let opts: Opts = clap::Parser::parse();

    let mut geng_options = geng::ContextOptions::default();
    geng_options.window.title = "Mole Abuse".to_string();
    geng_options.with_cli(&opts.geng);

    Geng::run_with(&geng_options, |geng| async move {
        let config_path = opts.config.unwrap_or_else(|| "assets/config.ron".into());
        let config = match config::Config::load(&config_path).await {
            Ok(config) => config,
            Err(err) => {
                log::error!("{:?}", err);
                log::warn!("Falling back to the default config");
                config::Config::default()
            }
        };

        let state = game::Game::new(&geng, config);
        geng.run_state(state).await;
    });
}
