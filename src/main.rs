mod cli;
mod config;

use cli::{Args, Command};
use config::{discover_config, load_config_from_path, unknown_field_warnings, ConfigFile, Settings};
use plainfs::prelude::*;
use std::io::{self, Write};
use std::process;

fn main() {
    let args = Args::parse_args();
    let reporter = StderrDiagnosticReporter::new().with_color(!args.no_color);

    let exit_code = match run(&args, reporter) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            report_error_chain(&reporter, &e);
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: &Args, reporter: StderrDiagnosticReporter) -> Result<()> {
    let config = load_config(args)?;
    if let Some(config) = config.as_ref() {
        for warning in unknown_field_warnings(config) {
            reporter.report_warning(&warning);
        }
    }

    let settings = Settings::resolve(config.as_ref(), args.command.buffer_size(), args.no_color);
    let reporter = reporter.with_color(settings.color);

    execute(&args.command, &settings, reporter)
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => Ok(Some(load_config_from_path(path)?)),
        None => discover_config(&std::env::current_dir()?),
    }
}

fn execute(
    command: &Command,
    settings: &Settings,
    reporter: StderrDiagnosticReporter,
) -> Result<()> {
    let files = TextFileService::new(reporter);

    match command {
        Command::Read { file, lines, .. } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if *lines {
                for (index, line) in files.try_open_lines(file, settings.buffer_size)?.enumerate() {
                    writeln!(out, "[{}] {}", index + 1, line.trim_end_matches('\n'))?;
                }
            } else {
                let text = files.try_read_all(file, settings.buffer_size)?;
                out.write_all(text.as_bytes())?;
            }
            out.flush()?;
        }
        Command::Write { file, content } => {
            files.try_write(file, content)?;
            eprintln!("✅ Wrote {} byte(s) to {}", content.len(), file.display());
        }
        Command::Append { file, content } => {
            files.try_append_to(file, content)?;
            eprintln!("✅ Appended {} byte(s) to {}", content.len(), file.display());
        }
        Command::List { dir } => {
            let lister = DirectoryLister::new(StdDirectorySource::new(), reporter);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for name in lister.try_list_entries(dir)? {
                writeln!(out, "{}", name)?;
            }
            out.flush()?;
        }
    }

    Ok(())
}

/// Reports the error and each cause not already spelled out by the message above it
fn report_error_chain(reporter: &StderrDiagnosticReporter, error: &anyhow::Error) {
    let message = error.to_string();
    reporter.report_error(&message);

    for cause in error.chain().skip(1) {
        let cause = cause.to_string();
        if !message.contains(&cause) {
            eprintln!("\nCaused by: {}", cause);
        }
    }
}
