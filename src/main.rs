use std::process;

fn main() {
    if let Err(e) = new_component::cli::run() {
        new_component::ui::log_error(&e.to_string());
        process::exit(if e.is_refusal() { 0 } else { 1 });
    }
}
