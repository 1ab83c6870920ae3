use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "psykit")]
#[command(about = "Assemble clinical worksheet content and score questionnaires")]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble every record in a catalogue and print the blocks as JSON
    Assemble {
        /// Catalogue JSON file (an array of content records)
        catalogue: PathBuf,

        /// Assembly config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Score a questionnaire and print the result as JSON
    Score {
        /// Instrument id, name or alias (e.g. "phq9", "PHQ-9")
        instrument: String,

        /// One response per question
        #[arg(allow_negative_numbers = true)]
        responses: Vec<f64>,

        #[arg(long, value_enum)]
        sex: Option<SexArg>,

        /// Fail instead of coercing responses that are out of range or
        /// the wrong count
        #[arg(long)]
        strict: bool,
    },
    /// Sanitize HTML read from stdin
    Sanitize,
    /// Extract plain text from HTML read from stdin
    Text,
    /// List the detected profile of every record in a catalogue
    Profile {
        catalogue: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SexArg {
    Male,
    Female,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let logs = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        logs.json().init();
    } else {
        logs.init();
    }

    match cli.command {
        Command::Assemble { catalogue, config } => {
            commands::assemble(&catalogue, config.as_deref())
        }
        Command::Score {
            instrument,
            responses,
            sex,
            strict,
        } => commands::score(&instrument, &responses, sex.map(SexArg::into_sex), strict),
        Command::Sanitize => commands::sanitize(),
        Command::Text => commands::text(),
        Command::Profile { catalogue } => commands::profile(&catalogue),
    }
}

impl SexArg {
    fn into_sex(self) -> psykit_instruments::scoring::Sex {
        match self {
            SexArg::Male => psykit_instruments::scoring::Sex::Male,
            SexArg::Female => psykit_instruments::scoring::Sex::Female,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn score_accepts_negative_responses() {
        let cli = Cli::try_parse_from(["psykit", "score", "phq9", "-1", "2", "--sex", "female"])
            .unwrap();
        match cli.command {
            Command::Score {
                instrument,
                responses,
                sex,
                strict,
            } => {
                assert_eq!(instrument, "phq9");
                assert_eq!(responses, [-1.0, 2.0]);
                assert!(matches!(sex, Some(SexArg::Female)));
                assert!(!strict);
            }
            _ => panic!("expected score"),
        }
    }

    #[test]
    fn strict_flag_is_parsed() {
        let cli = Cli::try_parse_from(["psykit", "score", "gad7", "--strict", "1", "2"]).unwrap();
        assert!(matches!(cli.command, Command::Score { strict: true, .. }));
    }
}
