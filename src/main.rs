use std::fs;

use clap::Parser;
use fieldexpr::{
    interpreter::evaluator::core::Bindings,
    registry::TerminalRegistry,
};

/// fieldexpr parses and evaluates configuration expressions for
/// field definitions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells fieldexpr to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// Binds a custom terminal to a numeric value, as `name=value`. May be
    /// repeated.
    #[arg(short, long = "bind", value_name = "NAME=VALUE")]
    bind: Vec<String>,

    /// The spatial position substituted for x, y and z, as `X,Y,Z`.
    #[arg(long, value_name = "X,Y,Z")]
    at: Option<String>,

    /// The time substituted for t.
    #[arg(short, long, default_value_t = 0.0)]
    time: f64,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut registry = TerminalRegistry::new();
    let mut bindings = Bindings::new();
    bindings.set_time(args.time);

    for entry in &args.bind {
        let Some((name, value)) = entry.split_once('=') else {
            eprintln!("Invalid binding '{entry}'. Expected the form name=value.");
            std::process::exit(1);
        };
        let Ok(value) = value.parse::<f64>() else {
            eprintln!("Invalid numeric value in binding '{entry}'.");
            std::process::exit(1);
        };
        if let Err(e) = registry.register(name) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        bindings.supply(name, value.into());
    }

    if let Some(at) = &args.at {
        let coords = at.split(',')
                       .map(|part| part.trim().parse::<f64>())
                       .collect::<Result<Vec<_>, _>>();
        match coords.as_deref() {
            Ok([x, y, z]) => bindings.set_position([*x, *y, *z]),
            _ => {
                eprintln!("Invalid position '{at}'. Expected the form X,Y,Z.");
                std::process::exit(1);
            },
        }
    }

    let tree = match fieldexpr::parse(&source, &registry) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    match tree.evaluate(&bindings) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
