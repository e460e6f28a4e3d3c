use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use reveal::commands::{self, Context};
use reveal::config::Config;
use reveal::console::Terminal;
use reveal::git::GitCli;
use reveal::opener::{Browser, ClipboardCopy, Printer, UrlOpener};
use reveal::workspace::CliWorkspace;

#[derive(Parser)]
#[command(name = "reveal")]
#[command(about = "Open the current Git project or file on GitHub", long_about = None)]
#[command(version)]
struct Cli {
    /// Print the URL instead of opening a browser
    #[arg(long, global = true)]
    print: bool,

    /// Copy the URL to the clipboard instead of opening a browser
    #[arg(long, global = true, conflicts_with = "print")]
    copy: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the repository's project page
    #[command(visible_alias = "p")]
    Project,

    /// Open a file at the current branch
    #[command(visible_alias = "f")]
    File {
        /// File to open (workspace-relative or absolute)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let opener: Box<dyn UrlOpener> = if cli.print {
        Box::new(Printer)
    } else if cli.copy {
        Box::new(ClipboardCopy)
    } else {
        Box::new(Browser)
    };

    let file = match &cli.command {
        Commands::File { path } => path.clone(),
        Commands::Project => None,
    };
    let workspace = CliWorkspace::new(file);

    let ctx = Context {
        git: &GitCli,
        workspace: &workspace,
        console: &Terminal,
        opener: opener.as_ref(),
        config: &config,
    };

    match cli.command {
        Commands::Project => commands::project::run(&ctx),
        Commands::File { .. } => commands::file::run(&ctx),
    }
}
