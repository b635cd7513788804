use std::process::ExitCode;

use vesak_lantern::app::App;
use vesak_lantern::config::Config;

fn main() -> ExitCode {
    env_logger::init();

    let result = App::new(Config::default()).and_then(|mut app| app.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
