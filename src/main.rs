use std::io::Write;

use env_logger::{Builder, Env};
use log::error;

use amalgam::cmd;

fn main() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let matches = cmd::app().get_matches();

    std::process::exit(match cmd::run_with_args(&matches) {
        Ok(_) => 0,
        Err(err) => {
            error!("ERROR: {}", err);
            1
        }
    });
}
