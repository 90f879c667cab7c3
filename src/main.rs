//! arbeit main entrypoint.

use arbeit::run;
use arbeit::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(&e);
        std::process::exit(1);
    }
}
