mod demo;

use clap::{Args, Parser, Subcommand};
use credit_app::application::{
    CreditApplication, CreditApplicationDecision, CreditPolicy, StandardCreditApplicationService,
};
use credit_app::config::{AppConfig, OutputFormat};
use credit_app::error::AppError;
use credit_app::telemetry;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Application Decision Engine",
    about = "Score, rate and decide credit and mortgage applications from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide a single application read from a JSON file or stdin
    Decide(DecideArgs),
    /// Decide the built-in sample applications (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct DecideArgs {
    /// Path to a JSON encoded credit application (reads stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Override the configured output format (text or json)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the configured output format (text or json)
    #[arg(long, value_parser = parse_format)]
    pub(crate) format: Option<OutputFormat>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    info!(?config.environment, "credit decision engine ready");

    let service = StandardCreditApplicationService::standard(&CreditPolicy::default());
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Decide(args) => {
            let format = args.format.unwrap_or(config.output);
            let application = read_application(args.input)?;
            let decision = service.decide(&application);
            println!("{}", render_decision(&decision, format)?);
            Ok(())
        }
        Command::Demo(args) => demo::run_demo(&service, args.format.unwrap_or(config.output)),
    }
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(raw).map_err(|err| err.to_string())
}

fn read_application(input: Option<PathBuf>) -> Result<CreditApplication, AppError> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn render_decision(
    decision: &CreditApplicationDecision,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "[{}] {}",
            decision.decision_type().label(),
            decision.message()
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(decision)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credit_app::application::{Education, MaritalStatus, PersonalData};

    fn personal_data() -> PersonalData {
        PersonalData {
            name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            mothers_maiden_name: "Zielinska".to_string(),
            marital_status: MaritalStatus::Single,
            education: Education::Middle,
        }
    }

    #[test]
    fn text_output_prefixes_decision_type() {
        let decision = CreditApplicationDecision::contact_required(personal_data(), 320);

        let rendered = render_decision(&decision, OutputFormat::Text).expect("renders");

        assert!(rendered.starts_with("[CONTACT_REQUIRED] Sorry Jan Kowalski"));
    }

    #[test]
    fn json_output_is_the_serialized_decision() {
        let decision = CreditApplicationDecision::negative_scoring(personal_data(), 90);

        let rendered = render_decision(&decision, OutputFormat::Json).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

        assert_eq!(value["decision_type"], "NEGATIVE_SCORING");
        assert_eq!(value["personal_data"]["name"], "Jan");
    }

    #[test]
    fn format_flag_rejects_unknown_values() {
        assert_eq!(parse_format("json"), Ok(OutputFormat::Json));
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn cli_defaults_to_demo() {
        let cli = Cli::try_parse_from(["credit-app"]).expect("parses");
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from([
            "credit-app",
            "decide",
            "--input",
            "app.json",
            "--format",
            "json",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Decide(args)) => {
                assert_eq!(args.input, Some(PathBuf::from("app.json")));
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            other => panic!("expected decide command, got {other:?}"),
        }
    }
}
