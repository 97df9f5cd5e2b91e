use super::{KeyCliCommand, KeyOutput};
use libp2p_key_resource::{KeyRequest, KeyResource, KeyResourceResult, ResourceState};

#[derive(clap::Parser, Clone, Debug)]
/// Generate a key without keeping any state
pub struct GenerateOpts {
    #[command(flatten)]
    pub key: KeyArgs,
    /// Print sensitive attributes in clear text
    #[arg(long)]
    pub show_sensitive: bool,
}

#[derive(clap::Args, Clone, Debug)]
pub struct KeyArgs {
    /// Key type, one of RSA, ED25519, SECP256K1, ECDSA
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub key_type: String,
    /// Bit count, required for RSA keys
    #[arg(long, short = 'b', allow_negative_numbers = true)]
    pub bits: Option<i64>,
}

impl From<KeyArgs> for KeyRequest {
    fn from(args: KeyArgs) -> Self {
        KeyRequest::new(args.key_type, args.bits)
    }
}

pub struct Generate;

impl KeyCliCommand for Generate {
    type Opt = GenerateOpts;
    type Output = KeyOutput;

    fn run(opts: Self::Opt) -> KeyResourceResult<Self::Output> {
        let resource = KeyResource::default();
        let state = resource.create(&opts.key.into(), &ResourceState::Absent)?;
        Ok(KeyOutput {
            model: resource.read(&state)?,
            show_sensitive: opts.show_sensitive,
        })
    }

    fn pretty(result: Self::Output) -> String {
        result.pretty()
    }
}
