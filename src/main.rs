use clap::{CommandFactory, Parser};
use mcpsync::paths;
use mcpsync::sync::Syncer;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(
    name = "mcpsync",
    about = "Sync MCP server definitions from .mcp.json into the Codex config",
    version
)]
struct Cli {
    /// Source file with an "mcpServers" mapping
    #[arg(short, long, default_value = paths::SOURCE_FILE)]
    source: String,

    /// Codex config to update (default: ~/.codex/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Show the resulting changes without writing the config
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "mcpsync", &mut std::io::stdout());
        return Ok(());
    }

    let source = paths::expand_path(&cli.source)?;
    let config = match cli.config {
        Some(ref path) => paths::expand_path(path)?,
        None => paths::default_config()?,
    };

    let syncer = Syncer::new(&source, &config);
    let report = syncer.sync(cli.dry_run)?;

    if report.synced.is_empty() {
        println!("No MCP servers found in {}", source.display());
        return Ok(());
    }

    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }

    if cli.dry_run {
        match report.diff {
            Some(ref diff) if std::io::stdout().is_terminal() => {
                print!("{}", mcpsync::diff::colorize(diff))
            }
            Some(ref diff) => print!("{diff}"),
            None => println!("{} is already up to date.", config.display()),
        }
        println!(
            "\nDry run: would sync {} server(s) to {}",
            report.synced.len(),
            config.display()
        );
        for name in &report.synced {
            println!("  -> {name}");
        }
        return Ok(());
    }

    for name in &report.synced {
        println!("  -> {name}");
    }
    println!(
        "\nSynced {} server(s) to {}",
        report.synced.len(),
        config.display()
    );

    Ok(())
}
