use crate::Joback::cp_estimator::{GroupCount, estimate_with};
use crate::Joback::group_table::joback_table;
use crate::Joback::joback_api::{
    Integrator, JobackError, check_interval, create_integrator_by_name,
};
use crate::settings::{DEFAULT_CONFIG_FILE, ServerSettings};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("cannot parse '{0}' as a number")]
    InvalidNumber(String),
    #[error("expected <group>=<count>, got '{0}'")]
    InvalidGroup(String),
    #[error("unknown integration method '{0}' (expected analytic or symbolic)")]
    UnknownIntegrator(String),
    #[error(transparent)]
    Joback(#[from] JobackError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// run the HTTP server
    Serve,
    /// one estimation printed to the terminal
    Calc {
        t_min: f64,
        t_max: f64,
        groups: GroupCount,
    },
    /// print the coefficient table
    Groups,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub config: String,
    /// overrides the integration method of the config file
    pub integration: Option<Integrator>,
    pub command: Command,
}

impl CliArgs {
    /// config file settings with the command line overrides applied
    pub fn apply(&self, mut settings: ServerSettings) -> ServerSettings {
        if let Some(integration) = &self.integration {
            settings.integration = integration.clone();
        }
        settings
    }
}

pub const USAGE: &str = "usage:
    joback_cp [--config <file>] [--integration analytic|symbolic] [serve]
    joback_cp [--config <file>] [--integration analytic|symbolic] calc <t_min> <t_max> <group>=<count> ...
    joback_cp groups
    joback_cp help";

fn parse_number(s: &str) -> Result<f64, CliError> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| CliError::InvalidNumber(s.to_string()))
}

/// `-CH3=2` -> ("-CH3", 2.0); the count follows the last '=' because labels such as `=CH2` contain one
pub fn parse_group(arg: &str) -> Result<(String, f64), CliError> {
    match arg.rsplit_once('=') {
        Some((label, count)) if !label.is_empty() => Ok((label.to_string(), parse_number(count)?)),
        _ => Err(CliError::InvalidGroup(arg.to_string())),
    }
}

/// parses the arguments after the program name
pub fn parse_args(args: &[String]) -> Result<CliArgs, CliError> {
    let mut config = DEFAULT_CONFIG_FILE.to_string();
    let mut integration = None;
    let mut rest: Vec<&str> = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            config = iter.next().ok_or(CliError::MissingValue("--config"))?.clone();
        } else if arg == "--integration" {
            let name = iter.next().ok_or(CliError::MissingValue("--integration"))?;
            integration = Some(
                create_integrator_by_name(name)
                    .ok_or_else(|| CliError::UnknownIntegrator(name.clone()))?,
            );
        } else {
            rest.push(arg.as_str());
        }
    }

    let command = match rest.split_first() {
        None | Some((&"serve", _)) => Command::Serve,
        Some((&"groups", _)) => Command::Groups,
        Some((&"help", _)) | Some((&"--help", _)) | Some((&"-h", _)) => Command::Help,
        Some((&"calc", tail)) => {
            let t_min = parse_number(tail.first().ok_or(CliError::MissingValue("t_min"))?)?;
            let t_max = parse_number(tail.get(1).ok_or(CliError::MissingValue("t_max"))?)?;
            let mut groups = GroupCount::new();
            for arg in tail.iter().skip(2) {
                let (label, count) = parse_group(arg)?;
                *groups.entry(label).or_insert(0.0) += count;
            }
            Command::Calc {
                t_min,
                t_max,
                groups,
            }
        }
        Some((other, _)) => return Err(CliError::UnknownCommand(other.to_string())),
    };
    Ok(CliArgs {
        config,
        integration,
        command,
    })
}

/// runs every command except `serve`
pub fn run_command(command: &Command, settings: &ServerSettings) -> Result<(), CliError> {
    match command {
        Command::Calc {
            t_min,
            t_max,
            groups,
        } => {
            check_interval(*t_min, *t_max)?;
            let estimate = estimate_with(groups, *t_min, *t_max, &settings.integration)?;
            estimate.pretty_print();
        }
        Command::Groups => joback_table().pretty_print(),
        Command::Help => println!("{}", USAGE),
        Command::Serve => {}
    }
    Ok(())
}
