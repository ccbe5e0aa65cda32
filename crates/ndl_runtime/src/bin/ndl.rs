//! NDL CLI entry point.

use ndl_engine::Resolver;
use ndl_runtime::{Backend, NdlConfig, Repl, dump_json, load_script};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    script: Option<PathBuf>,
    config_path: Option<PathBuf>,
    batch_mode: bool,
    dump: bool,
    show_help: bool,
    show_version: bool,
    offline: bool,
    model: Option<String>,
    max_relay_depth: Option<u32>,
}

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--dump" => config.dump = true,
            "--offline" => config.offline = true,
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("--config requires a path".into());
                }
                config.config_path = Some(PathBuf::from(&args[i]));
            }
            "--model" => {
                i += 1;
                if i >= args.len() {
                    return Err("--model requires a value".into());
                }
                config.model = Some(args[i].clone());
            }
            "--max-relay-depth" => {
                i += 1;
                if i >= args.len() {
                    return Err("--max-relay-depth requires a value".into());
                }
                config.max_relay_depth = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --max-relay-depth value: {}", args[i]))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.script.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.script = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn settings(cli: &CliConfig) -> Result<NdlConfig, Box<dyn std::error::Error>> {
    let mut config = NdlConfig::load(cli.config_path.as_deref())?;
    if let Some(model) = &cli.model {
        config = config.with_model(model.clone());
    }
    if let Some(depth) = cli.max_relay_depth {
        config = config.with_max_relay_depth(depth);
    }
    if cli.offline {
        config = config.offline();
    }
    config.validate()?;
    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("ndl {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(path) = &cli.script else {
        return Err("no script given (see --help)".into());
    };
    let config = settings(&cli)?;

    let loaded = load_script(path)?;
    for diagnostic in &loaded.diagnostics {
        eprintln!("\x1b[33mWarning: {diagnostic}\x1b[0m");
        if let Some(context) = &diagnostic.context {
            eprintln!("  {context}");
        }
    }

    if cli.dump {
        println!("{}", dump_json(&loaded.registry)?);
    }

    if cli.batch_mode {
        println!(
            "Loaded {} NPC(s) with {} diagnostic(s).",
            loaded.registry.len(),
            loaded.diagnostics.len()
        );
        return Ok(());
    }

    let backend = Backend::from_config(&config.generator)?;
    let resolver = Resolver::new(loaded.registry, backend).with_config(config.resolver);
    let mut repl = Repl::new(resolver)?;
    if cli.dump {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mNDL\x1b[0m - NPC Definition Language interpreter

\x1b[1mUSAGE:\x1b[0m
    ndl [OPTIONS] <SCRIPT>

\x1b[1mARGUMENTS:\x1b[0m
    <SCRIPT>    NDL file to load before starting the console

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    -b, --batch              Load the script, report, and exit
    --dump                   Print parsed NPCs as JSON
    -c, --config PATH        Read settings from PATH instead of ndl.toml
    --model NAME             Ollama model for fallback rules
    --max-relay-depth N      Limit NPC-to-NPC relay hops
    --offline                Do not contact Ollama; fallback rules fail

\x1b[1mENVIRONMENT:\x1b[0m
    NDL_CONFIG_PATH          Alternate configuration file
    NDL_GENERATOR__MODEL     Any setting, nested with __
    RUST_LOG                 Log filter (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    ndl tavern.ndl                   Load tavern.ndl, then talk
    ndl -b tavern.ndl                Check tavern.ndl and exit
    ndl --dump -b tavern.ndl         Show parsed NPCs
    ndl --offline tavern.ndl         Talk without a generator

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    switch               Pick a different NPC
    quit                 Leave the conversation; at the NPC prompt, exit
    Ctrl+D               Exit
    Ctrl+C               Cancel current input"
    );
}
