//! lookupgrid - apply cell writes to a typed sheet and print observable values

mod cli;
mod config;

use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cli::Options;

fn print_usage() {
    eprintln!("Usage: lookupgrid [OPTIONS] [SCRIPT]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [SCRIPT]                  Write script, one '<column>,<row> = <value>' per line");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --schema <FILE>       Column schema (.json or .toml)");
    eprintln!("  -c, --command <WRITE>     Apply a single write (can be repeated)");
    eprintln!("  -o, --output <FILE>       Write observable values to a JSON file");
    eprintln!("  --config <FILE>           Load settings from this config.toml");
    eprintln!("  --log <FILTER>            Tracing filter, e.g. 'debug'");
    eprintln!("  --pretty                  Pretty-print JSON output");
    eprintln!("  --no-config               Ignore the user config.toml");
    eprintln!("  -h, --help                Print help");
}

fn init_logging(cli_filter: Option<&str>, config_filter: Option<&str>) {
    let filter = match cli_filter {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => None,
    }
    .or_else(|| EnvFilter::try_from_default_env().ok())
    .or_else(|| config_filter.and_then(|directives| EnvFilter::try_new(directives).ok()))
    .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn value_arg(args: &[String], i: usize, what: &str) -> String {
    match args.get(i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {}", what);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut opts = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-s" | "--schema" => {
                i += 1;
                opts.schema = Some(PathBuf::from(value_arg(&args, i, "--schema requires a file path")));
            }
            "-c" | "--command" => {
                i += 1;
                opts.commands.push(value_arg(&args, i, "--command requires a value"));
            }
            "-o" | "--output" => {
                i += 1;
                opts.output = Some(PathBuf::from(value_arg(&args, i, "--output requires a file path")));
            }
            "--config" => {
                i += 1;
                opts.config = Some(PathBuf::from(value_arg(&args, i, "--config requires a file path")));
            }
            "--log" => {
                i += 1;
                opts.log = Some(value_arg(&args, i, "--log requires a filter"));
            }
            "--pretty" => opts.pretty = true,
            "--no-config" => opts.no_config = true,
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if opts.script.is_none() {
                    opts.script = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let (config, warnings) = if opts.no_config {
        (config::Config::default(), Vec::new())
    } else {
        config::load_config(opts.config.as_ref())
    };
    init_logging(opts.log.as_deref(), config.log.as_deref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    if let Err(e) = cli::run(&opts, &config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
