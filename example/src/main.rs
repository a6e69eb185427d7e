use clap::Parser;

fn main() -> anyhow::Result<()> {
    example::init_tracing();
    example::run(example::Cli::parse())
}
