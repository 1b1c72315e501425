use std::io::{self, BufRead};

use clap::Parser;
use kalkulator::{
    calculator::{Accumulator, ERROR_MARKER, Event},
    engine::evaluate,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// kalkulator replays calculator key presses and prints what the display
/// shows. Decimals use a comma, e.g. `1,5 + 2,5 =`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the arguments as one expression with dot decimals and print its
    /// value instead of pressing keys. The arguments are joined without
    /// spaces, e.g. `-e 2 + 3`.
    #[arg(short, long)]
    expression: bool,

    /// Print the display after every key instead of once per sequence.
    #[arg(short, long)]
    steps: bool,

    /// Text shown when a calculation fails.
    #[arg(long, default_value = ERROR_MARKER)]
    error_marker: String,

    /// Keys to press: labels such as `sqrt`, `x^2`, `CE`, `C`, `<-`, or runs
    /// of single-character keys such as `12,5*(3-1)=`. Without keys, lines are
    /// read from stdin and pressed one line at a time.
    keys: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env()
                                                  .unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    if args.expression {
        match evaluate(&args.keys.concat()) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let mut calculator = Accumulator::with_error_marker(args.error_marker);

    if !args.keys.is_empty() {
        if let Err(e) = press(&mut calculator, &args.keys.join(" "), args.steps) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("failed to read stdin: {e}");
                std::process::exit(1);
            },
        };
        if let Err(e) = press(&mut calculator, &line, args.steps) {
            eprintln!("{e}");
        }
    }
}

/// Presses every key of `keys` and prints the display.
fn press(calculator: &mut Accumulator,
         keys: &str,
         steps: bool)
         -> Result<(), kalkulator::error::EventError> {
    let events = Event::parse_sequence(keys)?;
    for event in events {
        let shown = calculator.handle(event);
        if steps {
            println!("{:>4}  {:<24} {}", event.to_string(), shown.text, shown.state);
            if let Some(reason) = calculator.last_error() {
                println!("      {reason}");
            }
        }
    }
    if !steps {
        println!("{}", calculator.text());
    }
    Ok(())
}
