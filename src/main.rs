use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use log::LevelFilter;
use moonlet::{
    error::Error,
    interpreter::evaluator::core::{MAX_CALL_DEPTH, Program},
    run_with,
};

/// moonlet runs scripts written in Moonlet, a small language built from two
/// character sigils.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run.
    file: PathBuf,

    /// Logs every executed node and prints the final bindings of the program.
    #[arg(short, long)]
    debug: bool,

    /// How deep function calls may nest before the program is stopped.
    #[arg(long, default_value_t = MAX_CALL_DEPTH)]
    max_depth: usize,
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Trace);
    }
    logger.init();

    let script = fs::read_to_string(&args.file).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not \
                                exist?",
                               args.file.display());
                     process::exit(1);
                 });

    let mut program = Program::new().with_max_call_depth(args.max_depth);
    match run_with(&script, &mut program) {
        Ok(bindings) => {
            if args.debug {
                for (name, value) in bindings {
                    println!("{name} = {value}");
                }
            }
        },
        Err(e) => {
            report(&e, &args.file);
            process::exit(1);
        },
    }
}

fn report(error: &Error, file: &Path) {
    let position = error.position;
    eprintln!("{}: {} ({}:{}:{}-{})",
              error.kind,
              error.message,
              file.display(),
              position.line + 1,
              position.start,
              position.end);
}
