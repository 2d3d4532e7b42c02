use clap::{Parser, Subcommand};
use kalkulator::config::Config;
use kalkulator::display::DisplayFrame;
use kalkulator::speed::convert_all;
use kalkulator::units::{SpeedUnit, TimeUnit};
use kalkulator::{Calculator, Intent, Mode, Renderer};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(name = "kalkulator")]
#[command(about = "Arithmetic, time and speed calculator", long_about = None)]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a sequence of keys and actions, printing the display after each
    Run {
        /// Starting mode: normal, time or speed
        #[arg(short, long, default_value = "normal")]
        mode: Mode,

        /// Only print the final display
        #[arg(long)]
        last: bool,

        /// Keys (e.g. "12+3*(4" "=") or actions (now, calc, convert, all,
        /// ce, ac, back, mode:<name>, unit names)
        #[arg(required = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Convert a speed to the other units of its group
    Speed {
        /// Value to convert
        value: f64,

        /// Unit of the value (e.g. "km/h", "rpm")
        unit: SpeedUnit,

        /// Include the source unit in the listing
        #[arg(long)]
        all: bool,
    },

    /// List every time and speed unit
    Units,
}

/// Prints frames to stdout and messages to stderr
struct TerminalRenderer {
    quiet: bool,
    last: Option<DisplayFrame>,
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, frame: &DisplayFrame) {
        if !self.quiet {
            print_frame(frame);
        }
        self.last = Some(frame.clone());
    }

    fn notify(&mut self, message: &str) {
        eprintln!("! {}", message);
    }
}

fn print_frame(frame: &DisplayFrame) {
    if !frame.expression.is_empty() {
        println!("  {}", frame.expression);
    }
    for line in frame.result_text().lines() {
        println!("= {}", line);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run { mode, last, words } => {
            run_script(cli.config.as_deref(), mode, last, &words)
        }
        Commands::Speed { value, unit, all } => {
            convert_speed(cli.config.as_deref(), value, unit, all)
        }
        Commands::Units => {
            list_units();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None => Ok(Config::empty()),
    }
}

fn run_script(
    config_path: Option<&str>,
    mode: Mode,
    last: bool,
    words: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let mut calculator = Calculator::new(config);
    calculator.switch_mode(mode);

    let mut renderer = TerminalRenderer {
        quiet: last,
        last: None,
    };

    for word in words {
        // Parse against the mode in effect when the word is reached
        let intents = Intent::parse_word(word, calculator.mode())?;
        for intent in intents {
            // Rejected intents are reported through the renderer
            let _ = calculator.dispatch(intent, &mut renderer);
        }
    }

    if last {
        let frame = renderer.last.unwrap_or_else(|| calculator.frame());
        print_frame(&frame);
    }

    Ok(())
}

fn convert_speed(
    config_path: Option<&str>,
    value: f64,
    unit: SpeedUnit,
    all: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;

    println!("{} {} =", value, unit.label());
    for conversion in convert_all(value, unit, all) {
        println!("  {}", conversion.describe(config.display.speed_decimals));
    }

    Ok(())
}

fn list_units() {
    println!("Time units:");
    for unit in TimeUnit::ALL {
        println!("  {:<6} {:<4} {} s", unit.key(), unit.label(), unit.seconds());
    }

    println!("\nSpeed units:");
    for unit in SpeedUnit::ALL {
        println!(
            "  {:<7} {:<7} {:?}, x{}",
            unit.key(),
            unit.label(),
            unit.group(),
            unit.factor()
        );
    }
}
