fn main() {
    if let Err(e) = script_classifier::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
