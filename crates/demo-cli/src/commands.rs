//! Command-line definition

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// City used by `weather` when `--city` is absent
pub const DEFAULT_CITY: &str = "Seattle";

fn user_arg() -> Arg {
    Arg::new("user")
        .long("user")
        .help("User id (blank selects the default user)")
}

/// Deepest subcommand matches
///
/// Global flags are always visible here, wherever they were typed.
#[must_use]
pub fn leaf_matches(matches: &ArgMatches) -> &ArgMatches {
    let mut current = matches;
    while let Some((_, sub)) = current.subcommand() {
        current = sub;
    }
    current
}

/// Build the `demo-cli` command
#[must_use]
pub fn cli() -> Command {
    Command::new("demo-cli")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Demo profile, search, weather and style services")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .subcommand(
            Command::new("profile")
                .about("Inspect or change a user profile")
                .subcommand_required(true)
                .subcommand(
                    Command::new("show")
                        .about("Show a profile (creating it if new)")
                        .arg(user_arg()),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update one allow-listed field")
                        .arg(user_arg())
                        .arg(
                            Arg::new("field")
                                .long("field")
                                .required(true)
                                .help("Field name: Name, Email, Age, City, State, Country, FavoriteColor"),
                        )
                        .arg(
                            Arg::new("value")
                                .long("value")
                                .required(true)
                                .help("New value"),
                        ),
                )
                .subcommand(
                    Command::new("deactivate")
                        .about("Clear a profile's active flag")
                        .arg(user_arg()),
                ),
        )
        .subcommand(Command::new("stats").about("Show profile counters"))
        .subcommand(
            Command::new("search")
                .about("Search the document corpus")
                .arg(
                    Arg::new("term")
                        .long("term")
                        .help("Text to look for (blank matches all)"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .default_value("10")
                        .value_parser(value_parser!(usize))
                        .help("Maximum results (0 = unlimited)"),
                ),
        )
        .subcommand(
            Command::new("weather")
                .about("Generate a demo weather report")
                .arg(
                    Arg::new("city")
                        .long("city")
                        .default_value(DEFAULT_CITY)
                        .help("City to report on"),
                ),
        )
        .subcommand(
            Command::new("style")
                .about("Generate random styles")
                .subcommand_required(true)
                .subcommand(Command::new("font").about("Pick a font family"))
                .subcommand(Command::new("color").about("Pick a hex color"))
                .subcommand(Command::new("chaos").about("Build a random inline style")),
        )
}
