use env_logger::Env;
use log::error;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = portfolio_viz::run() {
        error!("visualization generation failed: {}", err);
        std::process::exit(1);
    }
}
