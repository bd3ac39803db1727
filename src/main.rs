use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use unitconv::catalog;
use unitconv::config::Config;
use unitconv::engine;
use unitconv::share::SharePayload;
use unitconv::state::SelectionState;

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert values between units of length, weight, temperature, area, volume and speed", long_about = None)]
struct Cli {
    /// Config file (default: ./unitconv.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Decimal places shown before trailing zeros are stripped
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    Convert {
        /// Value to convert (e.g., "2.5")
        value: String,

        /// Source unit (id, symbol or name, e.g., "m", "meter")
        from: String,

        /// Target unit
        to: String,

        /// Category to look the units up in (default: inferred from the units)
        #[arg(long)]
        category: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a free-text amount such as "5 ft" or "98.6 °F"
    Parse {
        /// Amount with unit
        text: String,

        /// Target unit
        to: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories and their units
    List {
        /// Only this category (e.g., "length")
        category: Option<String>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the unit catalog for inconsistencies
    Check,

    /// Interactive converter session driven by lines on stdin
    Session,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = load_config(cli.config, cli.precision).and_then(|config| match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            category,
            json,
        } => convert_value(&config, &value, &from, &to, category.as_deref(), json),
        Commands::Parse { text, to, json } => convert_text(&config, &text, &to, json),
        Commands::List { category, json } => list_units(category.as_deref(), json),
        Commands::Check => check_catalog(),
        Commands::Session => run_session(&config),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(
    path: Option<PathBuf>,
    precision: Option<usize>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let dir = std::env::current_dir()?;
    let mut config = Config::discover(path, dir)?;
    if let Some(precision) = precision {
        config.display.set_precision(precision);
    }
    Ok(config)
}

fn convert_value(
    config: &Config,
    value: &str,
    from: &str,
    to: &str,
    category: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Without an explicit category, the source unit decides it
    let active = match category {
        Some(name) => catalog::find_category(name)?,
        None => {
            catalog::lookup_unit(from)
                .ok_or_else(|| engine::ConversionError::UnknownUnit {
                    category: None,
                    unit: from.to_string(),
                })?
                .0
        }
    };

    if category.is_none() {
        if let Some((target_category, _)) = catalog::lookup_unit(to) {
            if target_category.id != active.id {
                return Err(engine::ConversionError::CategoryMismatch {
                    from: active.id,
                    to: target_category.id,
                }
                .into());
            }
        }
    }

    let conversion = engine::convert(active, from, to, value, config.display.precision())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        println!(
            "{} {} = {} {}",
            value.trim(),
            conversion.from.symbol,
            conversion.display,
            conversion.to.symbol
        );
    }

    Ok(())
}

fn convert_text(
    config: &Config,
    text: &str,
    to: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = engine::convert_quantity(text, to, config.display.precision())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        println!(
            "{} {} = {} {}",
            engine::format_value(conversion.input, config.display.precision()),
            conversion.from.symbol,
            conversion.display,
            conversion.to.symbol
        );
    }

    Ok(())
}

fn list_units(category: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let selected: Vec<&catalog::Category> = match category {
        Some(name) => vec![catalog::find_category(name)?],
        None => catalog::categories().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for category in selected {
        println!("{} ({}):", category.name, category.id);
        for unit in category.units {
            let marker = if unit.base { " [base]" } else { "" };
            println!("  - {} ({}) {}{}", unit.id, unit.symbol, unit.name, marker);
        }
    }

    Ok(())
}

fn check_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let report = catalog::validate_catalog();

    if !report.is_clean() {
        eprint!("{}", report);
    }

    if !report.is_valid() {
        return Err(format!("{} catalog error(s)", report.errors().count()).into());
    }

    let units: usize = catalog::categories().iter().map(|c| c.units.len()).sum();
    println!(
        "Catalog OK: {} categories, {} units",
        catalog::categories().len(),
        units
    );
    Ok(())
}

fn run_session(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = SelectionState::from_config(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_state(&state);
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        let outcome: Result<(), Box<dyn std::error::Error>> = match command {
            "" => Ok(()),
            "quit" | "exit" => break,
            "category" => catalog::find_category(argument)
                .map(|c| state.select_category(c.id))
                .map_err(Into::into),
            "from" => state.select_from(argument).map_err(Into::into),
            "to" => state.select_to(argument).map_err(Into::into),
            "value" => {
                state.set_input(argument);
                Ok(())
            }
            "swap" => {
                state.swap();
                Ok(())
            }
            "reset" => {
                state.reset();
                Ok(())
            }
            "share" => {
                match SharePayload::from_state(&state) {
                    Some(payload) => println!("{}", payload.to_plain_text()),
                    None => println!("(nothing to share)"),
                }
                continue;
            }
            "show" => Ok(()),
            "json" => {
                println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
                continue;
            }
            // Anything else is typed into the value field
            _ => {
                state.set_input(line);
                Ok(())
            }
        };

        if let Err(e) = outcome {
            eprintln!("Error: {}", e);
        }
        print_state(&state);
        stdout.flush()?;
    }

    Ok(())
}

fn print_state(state: &SelectionState) {
    let result = match state.output() {
        Ok(conversion) => conversion.display.clone(),
        Err(e) => format!("({})", e),
    };
    println!(
        "[{}] {} {} -> {} {}",
        state.category().name,
        state.input(),
        state.from_unit().symbol,
        result,
        state.to_unit().symbol
    );
}
