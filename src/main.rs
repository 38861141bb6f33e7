use clap::{Parser, Subcommand};
use simple_folio::generate::{self, BuildOptions, GenerateError};
use simple_folio::{config, output};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Static site generator for data-driven portfolios")]
#[command(long_about = "\
Static site generator for data-driven portfolios

A single JSON document is the data source. Every section of the page is
shown only when the document has content for it, and the navigation menu
always matches the sections that are shown.

Content structure:

  content/
  ├── config.toml        # Site config (optional)
  ├── portfolio.json     # The portfolio document (or set `data` to a URL)
  └── assets/            # Avatar, project images, resume → copied to output

Section visibility:
  hero, footer          personal is non-empty
  about                 about is non-empty
  experience, projects  a list with at least one entry
  contact               contact is non-empty
  Resume menu entry     resume (or personal.resume) is a link

Run 'simple-folio gen-config' to generate a documented config.toml.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Portfolio document path or URL (overrides `data` in config.toml)
    #[arg(long, global = true)]
    data: Option<String>,

    /// Log build progress (otherwise RUST_LOG controls logging)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the document, render the page and write the site
    Build,
    /// Show which sections and menu entries the document produces
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Build => {
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let options = BuildOptions {
                source: cli.source,
                output: cli.output,
                data: cli.data,
            };
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_build_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = generate::build(&options, Some(tx));
            printer.join().map_err(|_| "output thread panicked")?;
            match result {
                Ok(summary) => {
                    output::print_build_summary(&summary);
                    println!("==> Build complete: {}", options.output.display());
                }
                Err(GenerateError::Fetch(err)) => {
                    println!("==> Recovery page written: {}", options.output.display());
                    return Err(GenerateError::Fetch(err).into());
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let resolution = generate::check(&cli.source, cli.data.as_deref())?;
            output::print_check_output(&resolution);
            println!("==> Document is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
