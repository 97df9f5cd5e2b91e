use super::{generate::KeyArgs, KeyCliCommand, KeyOutput};
use libp2p_key_resource::{KeyResourceResult, Provider, ProviderMetadata, Schema, StateFile};
use serde::Serialize;
use std::path::PathBuf;

#[derive(clap::Subcommand, Clone, Debug)]
/// Manage a key kept in a state file
pub enum ResourceOpts {
    /// Generate a key and record it; fails if the state already holds one
    Create(WithKey),
    /// Print the recorded key
    Show(WithState),
    /// Change the recorded inputs; the key material itself is never regenerated
    Update(WithKey),
    /// Forget the recorded key
    Delete(StateArgs),
    /// Print provider metadata and the attribute schema
    Schema,
}

#[derive(clap::Args, Clone, Debug)]
pub struct StateArgs {
    /// JSON file holding the key record
    #[arg(long, short, value_name = "FILE", env = "LIBP2P_KEY_STATE")]
    state: PathBuf,
}

#[derive(clap::Args, Clone, Debug)]
pub struct WithState {
    #[command(flatten)]
    state: StateArgs,
    /// Print sensitive attributes in clear text
    #[arg(long)]
    show_sensitive: bool,
}

#[derive(clap::Args, Clone, Debug)]
pub struct WithKey {
    #[command(flatten)]
    target: WithState,
    #[command(flatten)]
    key: KeyArgs,
}

#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum Output {
    Key(KeyOutput),
    Deleted { deleted: bool },
    Schema { provider: ProviderMetadata, schema: Schema },
}

pub struct Resource;

impl KeyCliCommand for Resource {
    type Opt = ResourceOpts;
    type Output = Output;

    fn run(opts: Self::Opt) -> KeyResourceResult<Self::Output> {
        let provider = Provider::default();
        let resource = provider.key();
        match opts {
            ResourceOpts::Create(WithKey { target, key }) => {
                let file = StateFile::new(target.state.state);
                let model = resource.read(&resource.create(&key.into(), &file.load()?)?)?;
                file.store_new(&model)?;
                Ok(Output::Key(KeyOutput {
                    model,
                    show_sensitive: target.show_sensitive,
                }))
            }
            ResourceOpts::Show(WithState { state, show_sensitive }) => {
                let file = StateFile::new(state.state);
                Ok(Output::Key(KeyOutput {
                    model: resource.read(&file.load()?)?,
                    show_sensitive,
                }))
            }
            ResourceOpts::Update(WithKey { target, key }) => {
                let file = StateFile::new(target.state.state);
                let next = resource.update(&key.into(), &file.load()?)?;
                file.store(&next)?;
                Ok(Output::Key(KeyOutput {
                    model: resource.read(&next)?,
                    show_sensitive: target.show_sensitive,
                }))
            }
            ResourceOpts::Delete(StateArgs { state }) => {
                let file = StateFile::new(state);
                let prior = file.load()?;
                file.store(&resource.delete(&prior))?;
                Ok(Output::Deleted {
                    deleted: prior.is_present(),
                })
            }
            ResourceOpts::Schema => Ok(Output::Schema {
                provider: provider.metadata(),
                schema: resource.schema().clone(),
            }),
        }
    }

    fn pretty(result: Self::Output) -> String {
        match result {
            Output::Key(key) => key.pretty(),
            Output::Deleted { deleted: true } => "deleted".to_owned(),
            Output::Deleted { deleted: false } => "nothing to delete".to_owned(),
            Output::Schema { provider, schema } => {
                let mut lines = vec![format!(
                    "{} {} resources: {}",
                    provider.type_name,
                    provider.version,
                    provider.resources.join(", ")
                )];
                for attr in schema.attributes {
                    lines.push(format!(
                        "  {:<8} {:?}{} {}",
                        attr.name,
                        attr.kind,
                        if attr.sensitive { " sensitive" } else { "" },
                        attr.description
                    ));
                }
                lines.join("\n")
            }
        }
    }
}
