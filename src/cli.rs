use clap::Parser;
use scal::RequestOptions;

/// Jalali (Shamsi) calendar for the terminal.
#[derive(Debug, Parser)]
#[command(name = "scal", version, about = "Display a Jalali (Shamsi) calendar")]
pub struct Cli {
    /// Jalali year to show (1-9999); alone, shows the whole year.
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Jalali month to show (1-12).
    #[arg(short, long, allow_negative_numbers = true)]
    pub month: Option<i32>,

    /// Show the previous, current and next month.
    #[arg(short = '3', long)]
    pub three: bool,

    /// Show all twelve months of the year.
    #[arg(short = 'Y', long)]
    pub full_year: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub const fn options(&self) -> RequestOptions {
        RequestOptions {
            year: self.year,
            month: self.month,
            three: self.three,
            full_year: self.full_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["scal"]).unwrap();
        assert_eq!(cli.options(), RequestOptions::default());
        assert!(!cli.no_color);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["scal", "-y", "1403", "-m", "12", "-3", "-vv"]).unwrap();
        assert_eq!(
            cli.options(),
            RequestOptions {
                year: Some(1403),
                month: Some(12),
                three: true,
                full_year: false,
            }
        );
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from(["scal", "--year", "1400", "--full-year", "--no-color"])
            .unwrap();
        assert_eq!(cli.options().year, Some(1400));
        assert!(cli.options().full_year);
        assert!(cli.no_color);
    }

    #[test]
    fn test_out_of_range_values_reach_validation() {
        let cli = Cli::try_parse_from(["scal", "-y", "-5", "-m", "13"]).unwrap();
        assert_eq!(cli.year, Some(-5));
        assert_eq!(cli.month, Some(13));
    }

    #[test]
    fn test_non_numeric_year_rejected() {
        assert!(Cli::try_parse_from(["scal", "-y", "abc"]).is_err());
    }
}
