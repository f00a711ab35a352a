use std::process;

use clap::Parser;
use colored::Colorize;
use kmertally::{cli::Args, run};

fn main() {
    let args = Args::parse();

    if !args.quiet {
        println!("{}: {}", "k-length".bold(), args.k.to_string().blue().bold());
        println!(
            "{}: {}",
            "input".bold(),
            args.input.display().to_string().underline().bold().blue()
        );
        println!(
            "{}: {}",
            "output".bold(),
            args.output.display().to_string().underline().bold().blue()
        );
        println!();
    }

    if let Err(e) = run::run(&args.input, args.k, &args.output, args.format) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}
