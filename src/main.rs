use anyhow::{Context, Result};
use bemkit::{config, ClassNames};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Print namespaced BEM class names.
///
/// With no arguments, prints the class map of every module declared in the
/// config file.
#[derive(Debug, Parser)]
#[command(name = "bemkit", version)]
struct Cli {
    /// Block to generate class names for.
    block: Option<String>,
    /// Element names within the block.
    elements: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.block {
        Some(block) => {
            let names = cfg
                .class_names(&block, cli.elements.as_slice())
                .with_context(|| format!("Failed to generate class names for `{}`", block))?;
            print_names(&names);
        }
        None => {
            if cfg.modules.is_empty() {
                eprintln!(
                    "No modules configured in {}",
                    config::config_path().display()
                );
                return Ok(());
            }
            for module in cfg.modules()? {
                println!("[{}]", module.name());
                print_names(module.class_names());
                println!();
            }
        }
    }

    Ok(())
}

fn print_names(names: &ClassNames) {
    for (key, class) in names.iter() {
        println!("{} = {}", key, class);
    }
}

/// Filter directives come from `BEMKIT_LOG` (e.g. `bemkit::builder=trace`),
/// defaulting to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("BEMKIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
