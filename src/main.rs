use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use night_third::config::Config;
use night_third::{
    share_result, ConsoleNotifier, ExportFormat, NightThirdCalculator, ShareOutcome, TimeOfDay,
};
use std::error::Error;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "night-third")]
#[command(version, about = "First third of the night from Maghreb and Fajr", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the first third of the night and record it
    Calc {
        /// Maghreb time, HH:MM
        maghreb: TimeOfDay,
        /// Fajr time, HH:MM
        fajr: TimeOfDay,
        /// Share the result after computing it
        #[arg(long)]
        share: bool,
    },
    /// Print the recent calculations
    History {
        /// Output format: csv, md or json
        #[arg(default_value = "md", value_parser = parse_format)]
        format: ExportFormat,
    },
}

fn parse_format(name: &str) -> Result<ExportFormat, String> {
    ExportFormat::parse(name)
        .ok_or_else(|| format!("unknown format {:?}, expected csv, md or json", name))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    debug!("using {:?}", config);

    match cli.command {
        Commands::Calc {
            maghreb,
            fajr,
            share,
        } => {
            let mut calculator = NightThirdCalculator::open(config.open_store()?);
            let night = night_third::night_duration(maghreb, fajr);
            let record = calculator
                .calculate_today(Some(maghreb), Some(fajr))
                .ok_or("calculation skipped")?;

            println!("First third of the night: {}", record.first_third());
            println!(
                "Night length: {}h{:02}",
                night.num_hours(),
                night.num_minutes() % 60
            );

            if share {
                let mut notifier = ConsoleNotifier::new(io::stdout());
                match share_result(&mut notifier, &record) {
                    Ok(ShareOutcome::Shared) => info!("result shared"),
                    Ok(ShareOutcome::Copied) => println!("Result copied to clipboard"),
                    Err(e) => warn!("could not share result: {}", e),
                }
            }
        }
        Commands::History { format } => {
            if !config.store_exists() {
                println!("No calculations yet");
                return Ok(());
            }
            let calculator = NightThirdCalculator::open(config.open_store()?);
            if calculator.history().is_empty() {
                println!("No calculations yet");
            } else {
                print!("{}", format.render(calculator.history().records())?);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calc() {
        let cli = Cli::try_parse_from(["night-third", "calc", "18:00", "05:00"]).unwrap();
        match cli.command {
            Commands::Calc {
                maghreb,
                fajr,
                share,
            } => {
                assert_eq!(maghreb, TimeOfDay::new(18, 0).unwrap());
                assert_eq!(fajr, TimeOfDay::new(5, 0).unwrap());
                assert!(!share);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_share_flag_anywhere() {
        let cli =
            Cli::try_parse_from(["night-third", "calc", "18:00", "--share", "05:00"]).unwrap();
        assert!(matches!(cli.command, Commands::Calc { share: true, .. }));
    }

    #[test]
    fn test_rejects_bad_calc_arguments() {
        assert!(Cli::try_parse_from(["night-third", "calc", "18:00", "05:00", "--shar"]).is_err());
        assert!(
            Cli::try_parse_from(["night-third", "calc", "18:00", "05:00", "extra", "junk"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["night-third", "calc", "18:00"]).is_err());
        assert!(Cli::try_parse_from(["night-third", "calc", "sunset", "05:00"]).is_err());
        assert!(Cli::try_parse_from(["night-third"]).is_err());
    }

    #[test]
    fn test_parse_history_format() {
        let cli = Cli::try_parse_from(["night-third", "history"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::History {
                format: ExportFormat::Markdown
            }
        ));
        let cli = Cli::try_parse_from(["night-third", "history", "csv"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::History {
                format: ExportFormat::Csv
            }
        ));
        assert!(Cli::try_parse_from(["night-third", "history", "pdf"]).is_err());
    }

    #[test]
    fn test_help_is_not_an_error_string() {
        let err = Cli::try_parse_from(["night-third", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("calc"));
    }
}
