//! Command-line interface for bsvdoc
//! This binary renders the documentation of one BSV source file, or runs the built-in grammar self-test.
//!
//! Usage:
//!   bsvdoc `<path>` [--format `<format>`] [--config `<file>`] [--link-prefix `<prefix>`]
//!   bsvdoc --test        (also accepted as `-test`)
//!
//! The rendered document goes to stdout; logs go to stderr (set `RUST_LOG` to see them).

use bsvdoc::bsv::config::{BsvDocConfig, Loader};
use bsvdoc::bsv::formats::OutputFormat;
use bsvdoc::bsv::processor::{process_file, write_output};
use bsvdoc::bsv::selftest::run_self_tests;
use bsvdoc::bsv::BsvDocError;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let matches = Command::new("bsvdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract documentation from Bluespec SystemVerilog sources")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the BSV file; also used as the link target in headings")
                .required_unless_present("test")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(OutputFormat::ALL.map(|f| f.as_str())),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("link-prefix")
                .long("link-prefix")
                .help("Prefix prepended to the source path in heading links"),
        )
        .arg(
            Arg::new("test")
                .long("test")
                .help("Run the built-in grammar self-test and exit")
                .action(ArgAction::SetTrue)
                .conflicts_with("path"),
        )
        .get_matches_from(std::env::args_os().map(|arg| {
            // Single-dash spelling kept from older tooling
            if arg == "-test" {
                "--test".into()
            } else {
                arg
            }
        }));

    if matches.get_flag("test") {
        handle_test_command();
    }

    let path = matches.get_one::<String>("path").unwrap();
    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let result = process_file(path, &config)
        .and_then(|output| write_output(&mut io::stdout().lock(), &output));
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Layer the user file and command-line flags over the defaults
fn load_config(matches: &ArgMatches) -> Result<BsvDocConfig, BsvDocError> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(prefix) = matches.get_one::<String>("link-prefix") {
        loader = loader.set_override("render.link_prefix", prefix.as_str())?;
    }
    Ok(loader.build()?)
}

/// Run the self-test table; exits 1 on any mismatch
fn handle_test_command() -> ! {
    let mut out = io::stdout().lock();
    let result = run_self_tests(&mut out).and_then(|errors| {
        if errors > 0 {
            write_output(&mut out, &format!("ERROR: Found {} errors\n", errors))?;
        } else {
            write_output(&mut out, "")?;
        }
        Ok(errors)
    });
    match result {
        Ok(0) => std::process::exit(0),
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
