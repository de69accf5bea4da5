use std::path::PathBuf;

use clap::{ArgAction, Parser};

use diary_core::VERSION;

/// Diary - a small, local, menu-driven personal diary
#[derive(Debug, Parser)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Path to the diary database file
    #[arg(short, long, env = "DIARY_DATABASE", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Never clear the screen between menus
    #[arg(long)]
    pub no_clear: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["diary"]).unwrap();
        assert!(!cli.no_clear);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags_parse() {
        let cli =
            Cli::try_parse_from(["diary", "--database", "/tmp/x.db", "--no-clear", "-vv"]).unwrap();
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/x.db")));
        assert!(cli.no_clear);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["diary", "--journal", "x"]).is_err());
    }
}
