use std::process::exit;

use clap::Parser;

use stencil::{heading, render_error, Session, SessionOptions, TermPrompter};

/// Fill placeholder templates with values from a JSON file
#[derive(Parser, Debug)]
#[command(name = "stencil", author, version, about, long_about = None)]
struct Args {
    /// Path to the template file, prompted for when omitted
    #[arg(short, long)]
    template: Option<String>,

    /// Path to the JSON fields file, prompted for when omitted
    #[arg(short, long)]
    fields: Option<String>,

    /// Write processed text here instead of asking to dump
    #[arg(short, long)]
    output: Option<String>,

    /// Run a single cycle and exit, failing on any error
    #[arg(long)]
    once: bool,
}

fn main() {
    let args = Args::parse();

    let options = SessionOptions {
        template: args.template,
        fields: args.fields,
        output: args.output,
        once: args.once,
    };

    if !options.once {
        println!("{}", heading("Stencil Template Processor"));
        println!();
    }

    let mut prompter = TermPrompter::new();
    let mut session = Session::new(&mut prompter, options);

    if let Err(error) = session.run() {
        eprintln!("{}", render_error(&error));
        exit(1);
    }
}
