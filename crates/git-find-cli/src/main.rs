//! git-find-cli: Command-line interface for git-find.

use clap::Parser;
use git_find_core::{filter::filter_iter, Config};
use git_find_scanner::Scanner;
use std::io::{self, BufWriter, Write};
use tracing::debug;

#[derive(Parser)]
#[command(name = "git-find")]
#[command(
    about = "Find checkouts in a site/repository/project/label tree",
    long_about = "Lists the checkouts four levels below $__GIT_ROOT whose site, repository, \
                  project or label equals every given term."
)]
#[command(version)]
struct Cli {
    /// Terms that must each equal the site, repository, project or label
    #[arg(allow_hyphen_values = true)]
    terms: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    git_find_core::logging::init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match find(&config, &cli.terms) {
        Err(git_find_core::Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}

fn find(config: &Config, terms: &[String]) -> git_find_core::Result<()> {
    let entries = Scanner::new(config.clone()).scan();
    debug!("Filtering {} entries with {} terms", entries.len(), terms.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for entry in filter_iter(entries, terms) {
        writeln!(out, "{entry}")?;
    }
    out.flush()?;

    Ok(())
}
