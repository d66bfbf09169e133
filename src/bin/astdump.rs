//! Command-line interface for astdump
//! This binary reads a tree document and prints it in one of the registered formats.
//! Files ending in `.yaml` or `.yml` are read as YAML, everything else as JSON.
//!
//! Usage:
//!   astdump `<path>` [--format `<format>`] [--indent `<n>`] [--attributes] [--config `<file>`]
//!   astdump --list-formats

use astdump::config::{AstdumpConfig, Loader};
use astdump::formats::FormatRegistry;
use astdump::Tree;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::debug;
use std::path::Path;

fn main() {
    env_logger::init();

    let matches = Command::new("astdump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print canonical dumps of syntax tree documents")
        .arg(
            Arg::new("path")
                .help("Path to the JSON or YAML tree document")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'dump', 'treeviz', 'json')"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .short('i')
                .help("Spaces per nesting level; omit for single-line dumps")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("attributes")
                .long("attributes")
                .short('a')
                .help("Include lineno/col_offset attributes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let registry = FormatRegistry::with_dump_options(config.dump.to_options());

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let path = matches.get_one::<String>("path").unwrap();
    handle_dump_command(&registry, path, &config.output.format);
}

/// Command-line flags win over `--config`, which wins over the defaults
fn load_config(matches: &ArgMatches) -> Result<AstdumpConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(indent) = matches.get_one::<u32>("indent") {
        loader = loader.with_indent(*indent)?;
    }
    if matches.get_flag("attributes") {
        loader = loader.with_attributes()?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.with_format(format)?;
    }
    loader.build()
}

/// Handle the default command: load, then serialize
fn handle_dump_command(registry: &FormatRegistry, path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let is_yaml = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    debug!("loading {} as {}", path, if is_yaml { "YAML" } else { "JSON" });

    let loaded: Result<Tree, _> = if is_yaml {
        Tree::from_yaml_str(&source)
    } else {
        Tree::from_json_str(&source)
    };
    let tree = loaded.unwrap_or_else(|e| {
        eprintln!("Error loading tree: {}", e);
        std::process::exit(1);
    });

    let output = registry.serialize(&tree, format).unwrap_or_else(|e| {
        eprintln!("Execution error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output.trim_end());
}

/// Handle the --list-formats flag
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
    }
}
