mod core;
mod infra;

use crate::{core::App, infra::Config};

const CONFIG_PATH: &str = "./config";

fn main() -> anyhow::Result<()> {
    load_config()?;

    let config = Config::new();
    let app = App::new(&config)?;

    app.run()
}

fn load_config() -> anyhow::Result<()> {
    match dotenv::from_path(CONFIG_PATH) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
