pub(crate) mod meta;
pub(crate) mod obj;
pub(crate) mod utils;

use anyhow::Result;
use log::{debug, error, warn};
use std::path::Path;
use structopt::StructOpt;
use walkdir::WalkDir;

// Cli arguments
#[derive(StructOpt, Debug)]
#[structopt(name = "obj_check")]
struct CliArgs {
    /// A `.obj` file or a folder to search for them
    input: String,
    /// Output debug info
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
    /// Print every element of each model that was read
    #[structopt(short = "d", long = "dump")]
    dump: bool,
}

/// Happens during setup or after all files were checked
#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Input does not exist: {0}")]
    InputNonExistant(String),
    #[error("{0} of {1} files could not be read")]
    FilesFailed(usize, usize),
}

fn main() -> Result<()> {
    let args = CliArgs::from_args();

    if !args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    } else {
        env_logger::Builder::new()
            .filter(None, log::LevelFilter::Debug)
            .init();
    }

    check(args)
}

fn check(args: CliArgs) -> Result<()> {
    let input_path = Path::new(&args.input);
    if !input_path.exists() {
        return Err(CliError::InputNonExistant(input_path.display().to_string()).into());
    }

    let mut checked = 0;
    let mut failed = 0;
    for entry in WalkDir::new(input_path) {
        let path = match &entry {
            Err(err) => {
                warn!("Error parsing path: {}", err);
                continue;
            }
            Ok(entry) => entry.path(),
        };

        if path.is_dir() {
            continue;
        }

        // check extension
        if let Some(Some(extension)) = path.extension().map(|x| x.to_str()) {
            match extension.to_ascii_lowercase().as_ref() {
                "obj" => {
                    checked += 1;
                    if let Err(err) = obj::process(path, args.dump) {
                        error!("{}: {:#}", path.display(), err);
                        failed += 1;
                    }
                }
                "toml" => debug!("Ignored toml file: {}", &path.display()),
                _ => debug!("Ignored file: {}", &path.display()),
            }
        } else {
            warn!(
                "Ignored file \"{}\", because no file extension was found.",
                path.display()
            );
        }
    }

    if failed > 0 {
        return Err(CliError::FilesFailed(failed, checked).into());
    }

    Ok(())
}
