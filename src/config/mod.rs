use crate::utils::error::Result;
use crate::utils::validation::validate_required_argument;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "series-sum", version)]
#[command(about = "Sum the integers 0..n-1 using the arithmetic progression formula")]
pub struct CliConfig {
    /// Upper bound (exclusive) of the summed range; must be a positive integer
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub number: Option<String>,

    /// Print a structured JSON report instead of the bare number
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output on stderr")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
            json: false,
            verbose: false,
        }
    }

    pub fn number(&self) -> Result<&str> {
        validate_required_argument(&self.number).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SumError;

    #[test]
    fn test_parses_positional_number() {
        let config = CliConfig::try_parse_from(["series-sum", "100"]).unwrap();
        assert_eq!(config.number.as_deref(), Some("100"));
        assert!(!config.json);
        assert!(config.number().is_ok());
    }

    #[test]
    fn test_negative_number_is_not_a_flag() {
        let config = CliConfig::try_parse_from(["series-sum", "-3"]).unwrap();
        assert_eq!(config.number.as_deref(), Some("-3"));
    }

    #[test]
    fn test_missing_number_is_reported() {
        let config = CliConfig::try_parse_from(["series-sum"]).unwrap();
        assert!(matches!(config.number(), Err(SumError::MissingArgument)));
    }

    #[test]
    fn test_extra_arguments_rejected() {
        let err = CliConfig::try_parse_from(["series-sum", "1", "2"]).unwrap_err();
        let err = SumError::from(err);
        assert!(matches!(err, SumError::Usage { .. }));
        assert!(err.to_string().ends_with("Usage: series-sum <number>"));
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::try_parse_from(["series-sum", "--json", "-v", "5"]).unwrap();
        assert!(config.json);
        assert!(config.verbose);
        assert_eq!(config.number().unwrap(), "5");
    }
}
