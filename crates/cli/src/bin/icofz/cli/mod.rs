mod args;
mod output;
mod styles;

pub(crate) use args::{CliArgs, Command, OutputFormat, parse_cli};
pub(crate) use output::{print_json, print_outcome_plain};
