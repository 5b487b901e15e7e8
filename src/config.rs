use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: boggle-solver <dictionary_filename> <board_filename> <output_filename>";

const DEFAULT_LOG_FILTER: &str = "boggle_solver=info";

#[derive(Debug, Clone)]
pub struct Config {
    pub dictionary_path: PathBuf,
    pub grid_path: PathBuf,
    pub output_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Build the configuration from command-line arguments, with `.env` and
    /// environment variables filling in any trailing arguments left out
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        dotenvy::dotenv().ok();

        let args: Vec<String> = args.into_iter().collect();
        if args.len() > 3 {
            bail!("expected 3 arguments, got {}\n{}", args.len(), USAGE);
        }

        let mut args = args.into_iter();
        let dictionary_path = path_arg(args.next(), "DICTIONARY_PATH")?;
        let grid_path = path_arg(args.next(), "GRID_PATH")?;
        let output_path = path_arg(args.next(), "OUTPUT_PATH")?;

        Ok(Config {
            dictionary_path,
            grid_path,
            output_path,
            log_filter: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

fn path_arg(arg: Option<String>, var: &str) -> Result<PathBuf> {
    arg.or_else(|| env::var(var).ok())
        .map(PathBuf::from)
        .with_context(|| format!("{} must be given as an argument or set\n{}", var, USAGE))
}
