//! Petra CLI
//!
//! Two tools over the Petra libraries:
//! - `petra convert`: unit conversion, either through interactive menus or
//!   fully from arguments
//! - `petra solve`: quadratic equation roots via the discriminant
//!
//! All validation of typed input (parse failures, menu ranges, negative
//! amounts) happens here; the libraries receive only well-formed requests.

mod prompt;

use std::error::Error;
use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use petra_solver::{discriminant, solve};
use petra_units::{convert_all, format_result, format_series, Category, UnitDef, REGISTRY};

#[derive(Parser)]
#[command(name = "petra", version, about = "Oilfield unit converter and quadratic solver")]
struct Cli {
    /// Emit results as JSON instead of display lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert values between units of one category
    Convert {
        /// Category name (e.g. "Pressure"); omit for interactive menus
        #[arg(long)]
        category: Option<String>,
        /// Source unit symbol (e.g. "atm")
        #[arg(long)]
        from: Option<String>,
        /// Target unit symbol (e.g. "Pa")
        #[arg(long)]
        to: Option<String>,
        /// Values to convert
        values: Vec<f64>,
    },
    /// Solve a*x^2 + b*x + c = 0
    Solve {
        /// The three coefficients a b c; omit to be prompted
        coefficients: Vec<f64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Convert { category, from, to, values } => {
            match (category, from, to) {
                (Some(category), Some(from), Some(to)) => {
                    run_convert(&category, &from, &to, &values, cli.json)
                }
                (None, None, None) if values.is_empty() => run_convert_interactive(),
                _ => Err("convert needs either no arguments (interactive) or \
                          --category, --from, --to and at least one value"
                    .into()),
            }
        }
        Command::Solve { coefficients } => run_solve(&coefficients, cli.json),
    }
}

fn run_convert(
    category_name: &str,
    from_symbol: &str,
    to_symbol: &str,
    values: &[f64],
    as_json: bool,
) -> Result<(), Box<dyn Error>> {
    if values.is_empty() {
        return Err("no values to convert".into());
    }

    let category = REGISTRY.category(category_name)?;
    let from = lookup_unit(category, from_symbol)?;
    let to = lookup_unit(category, to_symbol)?;

    debug!(category = %category, from = from.symbol, to = to.symbol, count = values.len(), "converting");
    let results = convert_all(from, to, values)?;

    if as_json {
        let doc = json!({
            "category": category.name(),
            "from": from.symbol,
            "to": to.symbol,
            "values": values,
            "results": results,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        for line in format_series(from, to, values, &results) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn lookup_unit(category: Category, symbol: &str) -> Result<&'static UnitDef, Box<dyn Error>> {
    REGISTRY.find(category, symbol).ok_or_else(|| {
        let known: Vec<&str> = REGISTRY.units(category).iter().map(|u| u.symbol).collect();
        format!("unknown {} unit '{}'. Known: {}", category, symbol, known.join(", ")).into()
    })
}

fn run_convert_interactive() -> Result<(), Box<dyn Error>> {
    if !std::io::stdin().is_terminal() {
        debug!("stdin is not a terminal, menus may misbehave");
    }

    println!("Select a unit category:");
    let categories = REGISTRY.categories();
    for (i, category) in categories.iter().enumerate() {
        println!("{}. {}", i + 1, category);
    }
    let choice = prompt::prompt_index("Category number: ", categories.len())?;
    let category = categories[choice - 1];

    println!("Select units:");
    let units = REGISTRY.units(category);
    for (i, unit) in units.iter().enumerate() {
        println!("{}. {}: {}", i + 1, unit.symbol, unit.name);
    }
    let from_idx = prompt::prompt_index("Source unit number: ", units.len())?;
    let to_idx = prompt::prompt_index("Target unit number: ", units.len())?;
    let amount = prompt::prompt_amount("Amount: ")?;

    let from = REGISTRY.unit_at(category, from_idx)?;
    let to = REGISTRY.unit_at(category, to_idx)?;
    let result = petra_units::convert(from, to, amount)?;

    println!("{}", format_result(from, to, amount, result));
    Ok(())
}

fn run_solve(coefficients: &[f64], as_json: bool) -> Result<(), Box<dyn Error>> {
    let (a, b, c) = match coefficients {
        [a, b, c] => (*a, *b, *c),
        [] => (
            prompt::prompt_coefficient("Coefficient a: ")?,
            prompt::prompt_coefficient("Coefficient b: ")?,
            prompt::prompt_coefficient("Coefficient c: ")?,
        ),
        _ => return Err("solve expects exactly three coefficients: a b c".into()),
    };

    let roots = solve(a, b, c)?;
    let verified = roots.verify(a, b, c);
    debug!(a, b, c, d = discriminant(a, b, c), verified, "solved");

    if as_json {
        let doc = json!({
            "discriminant": discriminant(a, b, c),
            "roots": roots,
            "verified": verified,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", roots);
        if !verified {
            println!("warning: roots do not satisfy the equation within tolerance");
        }
    }
    Ok(())
}
