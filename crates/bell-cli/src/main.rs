//! Bell Ringers CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use bell_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use bell_cli::commands::{
    run_check, run_describe, run_prompt, run_spin, run_spin_prompt, run_standards,
};
use bell_cli::logging::{LogConfig, LogFormat, init_logging};
use bell_cli::summary::{catalog_json, options_table, print_catalog, print_check, print_selection};
use bell_standards::standards_file;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let standards_path = standards_file(cli.standards_file.as_deref());
    let exit_code = match cli.command {
        Command::Standards(args) => {
            let catalog = run_standards(&standards_path);
            if args.json {
                print_json(&catalog_json(&catalog))
            } else {
                print_catalog(&catalog);
                0
            }
        }
        Command::Describe(args) => {
            println!("{}", run_describe(&standards_path, &args.code));
            0
        }
        Command::Check(args) => match run_check(&standards_path, &args) {
            Ok(result) => {
                let json_status = if args.json {
                    print_json(&result)
                } else {
                    print_check(&result);
                    0
                };
                if result.has_errors { 1 } else { json_status }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Options => {
            println!("{}", options_table());
            0
        }
        Command::Spin(args) => {
            let selection = run_spin(&args);
            if args.json {
                print_json(&selection)
            } else if args.prompt {
                match run_spin_prompt(&standards_path, &selection, args.standard.as_deref()) {
                    Ok(prompt) => {
                        print_selection(&selection);
                        println!();
                        println!("{prompt}");
                        0
                    }
                    Err(error) => {
                        eprintln!("error: {error:#}");
                        1
                    }
                }
            } else {
                print_selection(&selection);
                0
            }
        }
        Command::Prompt(args) => match run_prompt(&standards_path, &args) {
            Ok(prompt) => {
                println!("{prompt}");
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(error) => {
            eprintln!("error: failed to serialize output: {error}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
