use clap::Parser;
use eed_bin::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = cli.run(&mut std::io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
