use clap::{
    builder::{styling::AnsiColor, Styles},
    ArgAction, Parser, Subcommand,
};
use op_cli::{
    cmd::{config::ConfigCommands, owners::OwnersCommand},
    common::{OutputFormat, RegistryArgs},
    logs::{init_tracing, Verbosity},
};
use op_cli_runner::CliRunner;
use op_version::{version_with_platform, SHORT_VERSION};

#[derive(Debug, Parser)]
#[command(
    name = "op",
    about = "Inspect OP Stack rollups and the ownership of their L1 contracts.",
    version = SHORT_VERSION.as_str(),
    long_version = version_with_platform(),
    term_width = 80,
    styles = get_color_style()
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table, help = "Output format")]
    pub fmt: OutputFormat,

    #[clap(flatten)]
    pub registry: RegistryArgs,

    #[arg(long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    /// Verbosity level of the log messages.
    ///
    /// Pass multiple times to increase the verbosity (e.g. -v, -vv, -vvv).
    /// Ignored when RUST_LOG is set.
    #[arg(help_heading = "Display options", global = true, short, long, verbatim_doc_comment, action = ArgAction::Count)]
    verbosity: Verbosity,
}

impl Cli {
    pub fn run(self) -> eyre::Result<()> {
        init_tracing(self.verbosity, self.debug)?;

        let registry = self.registry.load()?;
        let fmt = self.fmt;
        let runner = CliRunner::try_default_runtime()?;
        match self.command {
            Commands::Config(config) => {
                runner.run_command_until_exit(|ctx| config.execute(ctx, &registry, fmt))
            }
            Commands::Owners(owners) => {
                runner.run_command_until_exit(|ctx| owners.execute(ctx, &registry, fmt))
            }
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect the superchain registry.
    #[command(name = "config", subcommand)]
    Config(ConfigCommands),

    #[command(name = "owners")]
    Owners(OwnersCommand),
}

fn get_color_style() -> Styles {
    Styles::styled()
        .usage(AnsiColor::Green.on_default().bold().underline())
        .header(AnsiColor::Yellow.on_default().bold().underline())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}
