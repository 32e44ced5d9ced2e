//! rIdleReport main entrypoint.

use ridlereport::run;
use ridlereport::ui::messages::error;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
