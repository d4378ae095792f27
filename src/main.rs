//! CLI entry point for the spline under tension demonstration

use clap::Parser;
use tension_spline::io::cli::{Cli, DemoRunner};

fn main() -> tension_spline::Result<()> {
    let cli = Cli::parse();
    let runner = DemoRunner::new(cli);
    runner.run()
}
