use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use bump::config::Config;
use bump::{ui, workflow};

#[derive(clap::Parser)]
#[command(
    name = "bump",
    about = "Bump the semantic version stored in .version files, commit, and tag"
)]
struct Args {
    #[arg(
        long,
        value_name = "SEMVER",
        help = "Set this exact version instead of incrementing the latest tag"
    )]
    version: Option<String>,

    #[arg(long, help = "Increase the patch version (default)")]
    patch: bool,

    #[arg(long, help = "Increase the minor version")]
    minor: bool,

    #[arg(long, help = "Increase the major version")]
    major: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Bypass the clean working tree check")]
    force: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        println!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_flags(
        args.version,
        args.patch,
        args.minor,
        args.major,
        args.dry_run,
        args.force,
    )?;

    let mut stdout = io::stdout();
    let outcome = workflow::run(Path::new("."), &config, &mut stdout)?;

    ui::display_outcome(&outcome, config.dry_run);
    Ok(())
}
