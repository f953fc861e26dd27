use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xicon::command;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Flutter project root the icon paths are resolved against
    #[clap(short = 'C', long, default_value = ".")]
    project_dir: PathBuf,
    /// Print a line when each icon is started
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XICON_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    args.command.run(&args.project_dir, args.verbose)
}

#[derive(Subcommand)]
enum Commands {
    /// Removes the alpha channel from the ios app store icon
    FixIcon,
    /// Resizes logo.png into the android launcher icon densities
    ResizeLogo,
}

impl Commands {
    pub fn run(self, project_dir: &Path, verbose: bool) -> Result<()> {
        match self {
            Self::FixIcon => {
                command::fix_icon(project_dir)?;
            }
            Self::ResizeLogo => {
                if !command::resize_logo(project_dir, verbose) {
                    std::process::exit(1);
                }
            }
        }
        Ok(())
    }
}
