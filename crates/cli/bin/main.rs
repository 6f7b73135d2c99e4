use clap::Parser;
use eyre::Result;
use logtopic_cli::{args::Logtopic, handler, utils};

fn main() -> Result<()> {
    handler::install();
    utils::subscriber();
    let args = Logtopic::parse();
    args.run()
}
