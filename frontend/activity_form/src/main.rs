use std::path::PathBuf;

use activity_form::{FormConfig, FormSession, PredictionOutput};
use activity_model::{ExportRecord, PredictorEngine, Report};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "activity-form",
    version,
    about = "Estimate the probability of a person being physically active",
    long_about = "activity-form evaluates a logistic regression model over three answers:\n\
        whether the person is 50 or older, their gender, and their health status.\n\n\
        EXAMPLES:\n\
        \n  activity-form                                        Start the interactive form\n\
        \n  activity-form predict --age Yes --gender Female --health Good\n\
        \n  activity-form predict --age 0 --gender 1 --health 0 --csv out.csv\n\
        \n  activity-form table --json                           All eight outcomes as JSON"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML file with custom prompts and labels
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Predict once from command-line answers
    Predict(PredictArgs),

    /// Fill in the form interactively
    #[command(long_about = "Prompt for each answer in turn and print the prediction.\n\n\
        Commands:\n\
        \n  :help          Show available commands\n\
        \n  :reset         Clear the answers given so far\n\
        \n  :save <file>   Download the last prediction as CSV\n\
        \n  :quit          Exit (also :q, :exit)")]
    Form(FormArgs),

    /// Print the prediction for every combination of answers
    Table(TableArgs),
}

#[derive(Debug, Args, Clone)]
struct PredictArgs {
    /// Is the person 50 or older (e.g. Yes/No, 1/0)
    #[arg(long, value_name = "LABEL")]
    age: String,

    /// Gender (e.g. Male/Female, 0/1)
    #[arg(long, value_name = "LABEL")]
    gender: String,

    /// Health status (e.g. "Not good"/Good, 0/1)
    #[arg(long, value_name = "LABEL")]
    health: String,

    /// Print the prediction as JSON
    #[arg(long)]
    json: bool,

    /// Also write the one-row CSV export to FILE
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

#[derive(Debug, Args, Clone, Default)]
struct FormArgs {
    /// Write each completed prediction to FILE
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

#[derive(Debug, Args, Clone, Default)]
struct TableArgs {
    /// Print the table as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn load_config(path: &Option<PathBuf>) -> Result<FormConfig, activity_form::ConfigError> {
    match path {
        Some(p) => FormConfig::load(p),
        None => Ok(FormConfig::default()),
    }
}

fn run_predict(config: &FormConfig, args: &PredictArgs) -> i32 {
    let input = match config.resolve_input(&args.age, &args.gender, &args.health) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let result = PredictorEngine::new().predict(&input);

    if let Some(path) = &args.csv {
        let record = ExportRecord::new(config.selections(&input), &result);
        if let Err(e) = record.save(path) {
            eprintln!("error: failed to write '{}': {e}", path.display());
            return 2;
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&PredictionOutput::new(config, result)) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return 2;
            }
        }
    } else {
        println!("{}", Report::new(&result));
    }
    0
}

fn render_table(config: &FormConfig) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<8} {:<8} {:<10} {:>7} {:>11}  {}",
        "age≥50", "gender", "health", "logit", "probability", "tier"
    )];
    for result in PredictorEngine::new().outcome_table() {
        let s = config.selections(&result.input);
        lines.push(format!(
            "{:<8} {:<8} {:<10} {:>7.2} {:>11.3}  {}",
            s.age, s.gender, s.health, result.logit, result.probability, result.tier
        ));
    }
    lines
}

fn run_table(config: &FormConfig, args: &TableArgs) -> i32 {
    if args.json {
        let rows: Vec<PredictionOutput> = PredictorEngine::new()
            .outcome_table()
            .into_iter()
            .map(|result| PredictionOutput::new(config, result))
            .collect();
        match serde_json::to_string_pretty(&rows) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return 2;
            }
        }
    } else {
        for line in render_table(config) {
            println!("{line}");
        }
    }
    0
}

fn run_form(config: FormConfig, args: &FormArgs) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize form: {e}");
            return 2;
        }
    };

    let mut session = FormSession::new(config);
    if let Some(path) = &args.csv {
        session = session.with_autosave(path);
    }
    for line in session.intro() {
        println!("{line}");
    }

    loop {
        let prompt = session.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => {
                session.handle_line(":reset");
                continue;
            }
            Err(ReadlineError::Eof) => {
                return 0;
            }
            Err(e) => {
                eprintln!("error: form failed: {e}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    match cli.command.unwrap_or(Command::Form(FormArgs::default())) {
        Command::Predict(args) => run_predict(&config, &args),
        Command::Form(args) => run_form(config, &args),
        Command::Table(args) => run_table(&config, &args),
    }
}

fn main() {
    std::process::exit(run_cli());
}
