mod cli;
mod commands;
mod demo;
mod error;
mod pages;
mod table;

use std::fs::File;
use std::io::BufRead;
use std::io::Write;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use cli::CliArgs;
use commands::Command;
use demo::Demo;
use error::CliError;

fn main() {
    let args = CliArgs::parse();

    let log_file = File::create(&args.log_file).expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
    }
}

fn run(args: CliArgs) -> Result<(), CliError> {
    let config = args.grid_config()?;
    let page = args.page.load();
    let mut demo = Demo::new(page, !args.uncontrolled, config)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", demo.title())?;
    writeln!(stdout, "{}", table::render(&demo.grid().render()))?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        match commands::execute(&mut demo, command) {
            Ok(Some(message)) => writeln!(stdout, "{}", message)?,
            Ok(None) => {}
            Err(e) => writeln!(stdout, "{}", e)?,
        }
        writeln!(stdout, "{}", table::render(&demo.grid().render()))?;
    }

    Ok(())
}
