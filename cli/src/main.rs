mod cmd;

use crate::cmd::{
    generate::{Generate, GenerateOpts},
    peer_id::{PeerId, PeerIdOpts},
    resource::{Resource, ResourceOpts},
    set_log_level, KeyCliCommand,
};
use clap::{ArgAction, Parser};

#[derive(clap::Parser, Clone, Debug)]
#[command(
    name = "libp2p-key",
    about = "Generate libp2p peer identities and manage them as declarative resources",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
struct Opt {
    #[command(subcommand)]
    command: CommandsOpt,
    /// Format output as JSON
    #[arg(long, short, global = true)]
    json: bool,
    /// Set verbosity
    #[arg(short, global = true, action = ArgAction::Count)]
    verbosity: u8,
}

#[derive(clap::Subcommand, Debug, Clone)]
enum CommandsOpt {
    Generate(GenerateOpts),
    PeerId(PeerIdOpts),
    #[command(subcommand, arg_required_else_help(true))]
    Resource(ResourceOpts),
}

fn main() -> anyhow::Result<()> {
    let Opt {
        command,
        json,
        verbosity,
    } = Opt::parse();
    set_log_level(verbosity)?;

    match command {
        CommandsOpt::Generate(opts) => Generate::output(opts, json),
        CommandsOpt::PeerId(opts) => PeerId::output(opts, json),
        CommandsOpt::Resource(opts) => Resource::output(opts, json),
    }
}
