use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser, Subcommand, ValueEnum};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `icofz` binary.
#[derive(Parser, Debug)]
#[command(
	name = "icofz",
	version,
	long_version = long_version(),
	about = "Find block editor icons by name and copy them for use in your code",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ICOFZ_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "icons-dir",
		value_name = "DIR",
		global = true,
		help = "Load icons from a directory of .svg files (default: bundled icons only)"
	)]
	pub(crate) icons_dir: Option<PathBuf>,
	#[arg(
		long = "builtin",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		global = true,
		help = "Include the bundled icons (default: enabled)"
	)]
	pub(crate) builtin: Option<bool>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the window title (default: Gutenberg Icons Finder)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search keyword (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: slate)")]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 's',
		long,
		value_name = "PX",
		global = true,
		help = "Icon size used in generated snippets (default: 24)"
	)]
	pub(crate) size: Option<u16>,
	#[arg(
		long = "download-dir",
		value_name = "DIR",
		global = true,
		help = "Directory exported icons are written to (default: user download directory)"
	)]
	pub(crate) download_dir: Option<PathBuf>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs of the interactive finder to FILE (default: cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(long = "print-config", help = "Print the effective configuration before running")]
	pub(crate) print_config: bool,
	#[arg(short = 'l', long = "list-themes", help = "List supported themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		global = true,
		help = "Choose how to print results"
	)]
	pub(crate) output: OutputFormat,
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
}

/// Non-interactive commands. Without one the interactive finder starts.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
	/// List icon names matching KEYWORD, in catalog order (all when omitted)
	List { keyword: Option<String> },
	/// Print the usage snippet for an icon
	Snippet { name: String },
	/// Write an icon's SVG markup to a file
	Export {
		name: String,
		#[arg(
			short = 'O',
			long = "out",
			value_name = "DIR",
			help = "Directory to write into (default: download directory)"
		)]
		out: Option<PathBuf>,
	},
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}
