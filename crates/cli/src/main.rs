use clap::Parser;

fn main() -> anyhow::Result<()> {
    gilded_rose_observability::init();

    let args = gilded_rose_cli::Args::parse();
    let stdout = std::io::stdout();
    gilded_rose_cli::run(&args, &mut stdout.lock())
}
