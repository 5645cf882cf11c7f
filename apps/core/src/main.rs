use clap::Parser;

fn main() {
    let cli = quickopen_core::cli::Cli::parse();
    let _ = quickopen_core::logging::init();

    if let Err(error) = quickopen_core::cli::run(cli) {
        quickopen_core::logging::error(&error.to_string());
        eprintln!("[quickopen] {error}");
        std::process::exit(1);
    }
}
