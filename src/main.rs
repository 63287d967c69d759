use env_logger::Env;
use log::error;
use vkbootstrap::app::{self, AppConfig};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = app::run(&AppConfig::default()) {
        error!("{}", err);
        std::process::exit(1);
    }
}
