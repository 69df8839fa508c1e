use anyhow::Result;
use goiface::cli::{handle_generate_command, init_logging, parse_args};

fn main() -> Result<()> {
    let cli = parse_args();
    init_logging(cli.verbosity);
    handle_generate_command(cli)
}
