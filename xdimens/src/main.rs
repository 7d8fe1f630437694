use crate::config::{Config, Overrides, DEFAULT_CONFIG};
use crate::task::StepPrinter;
use anyhow::Result;
use clap::{Parser, Subcommand};
use console::Term;
use dimens::Density;
use std::path::PathBuf;

mod config;
mod task;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let verbose = matches!(&args.command, Commands::Generate { args: generate } if generate.verbose);
    init_logger(verbose);
    args.command.run()
}

fn init_logger(verbose: bool) {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let default = if verbose { "debug" } else { "warn" };
    let env = std::env::var("XDIMENS_LOG").unwrap_or_else(|_| default.into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate values-<density>/dimens.xml below the output directory
    Generate {
        #[clap(flatten)]
        args: GenerateArgs,
    },
    /// List the built in densities
    Densities,
}

#[derive(Clone, Debug, clap::Args)]
struct GenerateArgs {
    /// Path to a dimens.yaml
    #[clap(long, default_value = DEFAULT_CONFIG)]
    config: PathBuf,
    /// Output directory, deleted and recreated on every run
    #[clap(long)]
    out: Option<PathBuf>,
    /// Package name
    #[clap(long, conflicts_with = "package_file")]
    package: Option<String>,
    /// File containing the package name
    #[clap(long)]
    package_file: Option<PathBuf>,
    /// Additional density to generate a qualified bucket for
    #[clap(long = "dpi", value_delimiter = ',')]
    dpis: Vec<String>,
    /// Keep completed task lines and log at debug level
    #[clap(long)]
    verbose: bool,
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Self::Generate { args } => {
                generate(args)?;
            }
            Self::Densities => densities(),
        }
        Ok(())
    }
}

fn generate(args: GenerateArgs) -> Result<usize> {
    let config = Config::parse(&args.config)?;
    let overrides = Overrides {
        out_dir: args.out,
        package: args.package,
        package_file: args.package_file,
        dpis: args.dpis,
    };
    let request = config::build_request(config, overrides)?;
    let mut printer = StepPrinter::new(Term::stdout(), args.verbose);
    let written = dimens::generate_with(&request, &mut printer)?;
    tracing::info!("wrote {} files in {} steps", written.len(), printer.done());
    Ok(written.len())
}

fn densities() {
    for density in Density::ALL {
        println!(
            "{:<8} {:>4}dpi {:?}x",
            density.as_str(),
            density.dpi(),
            density.scale()
        );
    }
}
