use anyhow::Context;
use formats::CliResult;
use libp2p_key_resource::{KeyModel, KeyResourceResult, Schema};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod formats;
pub mod generate;
pub mod peer_id;
pub mod resource;

pub trait KeyCliCommand {
    type Opt;
    type Output: Serialize;
    fn run(opts: Self::Opt) -> KeyResourceResult<Self::Output>;
    fn pretty(result: Self::Output) -> String;
    fn output(opts: Self::Opt, json: bool) -> anyhow::Result<()> {
        let item = Self::run(opts);
        let failed = item.is_err();
        if json {
            let s = serde_json::to_string(&CliResult::from(item)).context("serializing result")?;
            println!("{}", s);
        } else {
            match item {
                Ok(r) => println!("{}", Self::pretty(r)),
                Err(err) => eprintln!("{}", err),
            }
        }
        if failed {
            std::process::exit(1)
        }
        Ok(())
    }
}

/// Install the stderr logger.
///
/// Without `-v` the level comes from `RUST_LOG`, falling back to errors only.
pub fn set_log_level(verbosity: u8) -> anyhow::Result<()> {
    let filter = if verbosity == 0 {
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "error".to_owned())
    } else {
        match verbosity {
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
        .to_owned()
    };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;
    Ok(())
}

/// A key record as printed by the commands.
///
/// JSON output always carries every attribute, the pretty form hides the sensitive ones unless
/// `show_sensitive` is set.
#[derive(Serialize, Debug, Clone)]
pub struct KeyOutput {
    #[serde(flatten)]
    pub model: KeyModel,
    #[serde(skip)]
    pub show_sensitive: bool,
}

impl KeyOutput {
    pub fn pretty(&self) -> String {
        let schema = Schema::key();
        schema
            .attributes
            .iter()
            .filter_map(|attr| {
                let value = self.model.get(attr.name)?;
                let value = if attr.sensitive && !self.show_sensitive {
                    "(sensitive)".to_owned()
                } else {
                    value
                };
                Some(format!("{:<8} {}", attr.name, value))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
