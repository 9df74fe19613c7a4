//! Configuration structures for the pass generator
//!
//! This module contains the command line arguments, the optional JSON config
//! file, and the merged [`PassConfig`] with its validation logic.

use super::{OutputFormat, Role};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Default form values offered before the user types anything
pub mod defaults {
    /// Role preselected for new templates
    pub const ROLE: &str = "PROFESSOR";

    /// Event name preselected for new templates
    pub const EVENT_NAME: &str = "Software Engineering Expo";

    /// Event date preselected for new templates
    pub const EVENT_DATE: &str = "2026-02-20";

    /// Venue preselected for new templates
    pub const VENUE: &str = "Main Auditorium";
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "event-pass",
    version,
    about = "Event Pass Generator - builds role templates and issues personalized passes",
    long_about = "Builds an event pass template for a role (professor, monitor or student) and issues personalized passes cloned from it.

EXAMPLES:
    # Build the default professor template and show it
    event-pass

    # Build a monitor template and issue two passes
    event-pass --role monitor --event Expo --issue \"Ana Lee <ana@x.edu>\" --issue \"Bo Kim,bo@x.edu\"

    # Emit the result as JSON
    event-pass --role student --issue \"Cy Diaz <cy@x.edu>\" --output-format json

    # Drive the generator from a command prompt
    event-pass --interactive

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag, JSON)
    3. Default values (lowest priority)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Role to build the template for
    #[arg(
        long,
        help = "Template role (professor, monitor, student)",
        long_help = "Role to build the template for. Case-insensitive. Default: PROFESSOR"
    )]
    pub role: Option<String>,

    /// Event name
    #[arg(long, help = "Event name")]
    pub event: Option<String>,

    /// Event date
    #[arg(long, help = "Event date (YYYY-MM-DD recommended)")]
    pub date: Option<String>,

    /// Event venue
    #[arg(long, help = "Event venue")]
    pub venue: Option<String>,

    /// Holders to issue passes for
    #[arg(
        long = "issue",
        value_name = "HOLDER",
        help = "Issue a pass for \"Name <email>\" or \"Name,email\" (repeatable)"
    )]
    pub issue: Vec<String>,

    /// Random seed for reproducible pass identifiers
    #[arg(long, help = "Random seed for reproducible pass identifiers")]
    pub seed: Option<u64>,

    /// Output format for batch runs
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for batch runs. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Read commands from standard input
    #[arg(short, long, help = "Read commands from standard input")]
    pub interactive: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without building anything
    #[arg(long, help = "Validate configuration without building passes")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// A named holder a pass should be issued for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderSpec {
    /// Holder display name
    pub name: String,
    /// Holder email address
    pub email: String,
}

impl HolderSpec {
    /// Create a holder spec
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }
}

impl fmt::Display for HolderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

impl FromStr for HolderSpec {
    type Err = String;

    /// Accepts `Name <email>` or `Name,email`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(open) = s.rfind('<') {
            let rest = &s[open + 1..];
            let close = rest
                .find('>')
                .ok_or_else(|| format!("Missing closing '>' in holder: {}", s))?;
            return Ok(Self::new(s[..open].trim(), rest[..close].trim()));
        }
        match s.split_once(',') {
            Some((name, email)) => Ok(Self::new(name.trim(), email.trim())),
            None => Err(format!("Expected \"Name <email>\" or \"Name,email\", got: {}", s)),
        }
    }
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Role to build the template for
    pub role: Option<String>,

    /// Event name
    pub event_name: Option<String>,

    /// Event date
    pub event_date: Option<String>,

    /// Event venue
    pub venue: Option<String>,

    /// Holders to issue passes for
    pub holders: Option<Vec<HolderSpec>>,

    /// Random seed for reproducible pass identifiers
    pub seed: Option<u64>,

    /// Output format for batch runs
    pub output_format: Option<String>,
}

/// Configuration for a pass generator run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassConfig {
    /// Role to build the template for
    pub role: String,

    /// Event name
    pub event_name: String,

    /// Event date
    pub event_date: String,

    /// Event venue
    pub venue: String,

    /// Holders to issue passes for, in order
    pub holders: Vec<HolderSpec>,

    /// Random seed for reproducible pass identifiers
    pub seed: Option<u64>,

    /// Output format for batch runs
    pub output_format: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),

    /// A holder given on the command line could not be parsed
    #[error("Invalid holder argument: {0}")]
    InvalidHolder(String),
}

/// Validation errors for pass configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Role is not one of the supported roles
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// A required event field is blank
    #[error("{0} cannot be empty")]
    BlankField(&'static str),

    /// Output format is not supported
    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),

    /// A holder entry has a blank name or email
    #[error("Holder #{index} needs both a name and an email, got \"{holder}\"")]
    IncompleteHolder {
        /// One-based position of the holder in the list
        index: usize,
        /// The offending holder rendered back as text
        holder: String,
    },
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            role: defaults::ROLE.to_string(),
            event_name: defaults::EVENT_NAME.to_string(),
            event_date: defaults::EVENT_DATE.to_string(),
            venue: defaults::VENUE.to_string(),
            holders: Vec::new(),
            seed: None,
            output_format: "text".to_string(),
        }
    }
}

impl PassConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args)?;

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            role: config_file.role.unwrap_or(defaults.role),
            event_name: config_file.event_name.unwrap_or(defaults.event_name),
            event_date: config_file.event_date.unwrap_or(defaults.event_date),
            venue: config_file.venue.unwrap_or(defaults.venue),
            holders: config_file.holders.unwrap_or(defaults.holders),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) -> Result<(), ConfigError> {
        if let Some(value) = args.role {
            config.role = value;
        }
        if let Some(value) = args.event {
            config.event_name = value;
        }
        if let Some(value) = args.date {
            config.event_date = value;
        }
        if let Some(value) = args.venue {
            config.venue = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }

        // Holders given on the command line replace the file's list
        if !args.issue.is_empty() {
            config.holders = args
                .issue
                .iter()
                .map(|raw| raw.parse::<HolderSpec>().map_err(ConfigError::InvalidHolder))
                .collect::<Result<Vec<_>, _>>()?;
        }

        Ok(())
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.get_role()?;
        self.get_output_format()?;

        if self.event_name.trim().is_empty() {
            return Err(ConfigValidationError::BlankField("Event name"));
        }
        if self.event_date.trim().is_empty() {
            return Err(ConfigValidationError::BlankField("Event date"));
        }
        if self.venue.trim().is_empty() {
            return Err(ConfigValidationError::BlankField("Venue"));
        }

        for (i, holder) in self.holders.iter().enumerate() {
            if holder.name.trim().is_empty() || holder.email.trim().is_empty() {
                return Err(ConfigValidationError::IncompleteHolder {
                    index: i + 1,
                    holder: holder.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get the configured role as an enum
    pub fn get_role(&self) -> Result<Role, ConfigValidationError> {
        self.role
            .parse()
            .map_err(|_| ConfigValidationError::UnknownRole(self.role.clone()))
    }

    /// Get the output format as an enum
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse()
            .map_err(|_| ConfigValidationError::UnknownOutputFormat(self.output_format.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = PassConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.get_role().unwrap(), Role::Professor);
        assert_eq!(config.get_output_format().unwrap(), OutputFormat::Text);
        assert_eq!(config.event_name, "Software Engineering Expo");
        assert_eq!(config.event_date, "2026-02-20");
        assert_eq!(config.venue, "Main Auditorium");
        assert!(config.holders.is_empty());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = PassConfig { role: "janitor".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::UnknownRole(_))));

        let config = PassConfig { venue: "   ".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::BlankField("Venue"))));

        let config = PassConfig { output_format: "xml".to_string(), ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::UnknownOutputFormat(_))
        ));

        let config = PassConfig {
            holders: vec![HolderSpec::new("Ana", "ana@x.edu"), HolderSpec::new("Bo", " ")],
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigValidationError::IncompleteHolder { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected incomplete holder, got {:?}", other),
        }
    }

    #[test]
    fn test_holder_spec_parsing() {
        let holder: HolderSpec = "Ana Lee <ana@x.edu>".parse().unwrap();
        assert_eq!(holder, HolderSpec::new("Ana Lee", "ana@x.edu"));

        let holder: HolderSpec = " Bo Kim , bo@x.edu ".parse().unwrap();
        assert_eq!(holder, HolderSpec::new("Bo Kim", "bo@x.edu"));

        assert!("Ana Lee <ana@x.edu".parse::<HolderSpec>().is_err());
        assert!("just a name".parse::<HolderSpec>().is_err());
    }

    #[test]
    fn test_config_file_merges_with_defaults() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"role": "monitor", "venue": "Hall B", "holders": [{{"name": "Ana", "email": "ana@x.edu"}}]}}"#
        )
        .unwrap();

        let config = PassConfig::from_file(file.path()).unwrap();
        assert_eq!(config.role, "monitor");
        assert_eq!(config.venue, "Hall B");
        assert_eq!(config.event_name, defaults::EVENT_NAME);
        assert_eq!(config.holders, vec![HolderSpec::new("Ana", "ana@x.edu")]);
    }

    #[test]
    fn test_config_file_errors() {
        assert!(matches!(
            PassConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::FileNotFound(_))
        ));

        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(
            PassConfig::from_file(file.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = PassConfig {
            role: "STUDENT".to_string(),
            seed: Some(9),
            holders: vec![HolderSpec::new("Cy", "cy@x.edu")],
            ..Default::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = PassConfig::from_file(&path).unwrap();
        assert_eq!(loaded.role, "STUDENT");
        assert_eq!(loaded.seed, Some(9));
        assert_eq!(loaded.holders, config.holders);
    }
}
