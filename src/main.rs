//! gymchat-store entrypoint.

use gymchat_store::run;
use gymchat_store::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
