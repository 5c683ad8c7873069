use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy_primitives::Address;
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use ens_wrap_encoder::{
    fuses::fuse_spec_from_json, LocalSigner, RegistrarExpiry, WrapNameBuilder, WrapOptions,
};
use ens_wrap_types::{CallerIdentity, Expiry, FuseSpec};
use serde_json::Value;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod rpc;

use rpc::RpcChain;

/// Build the unsigned transaction that wraps an ENS name in the NameWrapper.
///
/// Nothing is signed or broadcast: the transaction is printed (or written to `--out`)
/// as JSON for the caller's own signer.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Name to wrap (eg, vitalik.eth, sub.vitalik.eth, mydao.xyz).
    name: String,

    /// Owner of the wrapped name.
    #[arg(long, env = "WRAPPED_OWNER")]
    wrapped_owner: Address,

    /// Fuses to burn (`.eth` second-level names only).
    ///
    /// Accepts a JSON object of named fuses (eg, `{"cannotUnwrap":true}`),
    /// a decimal number (`64`), or `0x`-prefixed hex (`0x40`). Bare digits are
    /// always decimal; hex without the prefix is rejected.
    #[arg(long)]
    fuses: Option<String>,

    /// Expiry (`.eth` second-level names only): unix seconds, `0x` hex, or an RFC 3339 date.
    #[arg(long)]
    expiry: Option<String>,

    /// Resolver for the wrapped name. Defaults to the public resolver.
    #[arg(long)]
    resolver: Option<Address>,

    /// RPC URL used for the approval and expiry reads.
    #[arg(long, env = "RPC_URL")]
    rpc_url: String,

    /// Path to a file containing the sender private key.
    #[arg(long, env = "PRIV_KEY_PATH", conflicts_with_all = ["private_key", "from"])]
    private_key_path: Option<PathBuf>,

    /// Sender private key (hex string, 0x...).
    #[arg(long, env = "PKEY", conflicts_with_all = ["private_key_path", "from"])]
    private_key: Option<String>,

    /// Sender address, when no key is available locally.
    #[arg(long, env = "FROM_ADDRESS")]
    from: Option<Address>,

    /// Deployments JSON with `ens-registry`, `base-registrar`, `name-wrapper` and
    /// `public-resolver` entries. Mainnet addresses are used when omitted.
    #[arg(long, env = "DEPLOYMENTS_PATH")]
    deployments_path: Option<PathBuf>,

    /// Write the transaction JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Sending account, from a local key or a bare address.
enum Caller {
    Key(LocalSigner),
    Address(Address),
}

impl CallerIdentity for Caller {
    fn address(&self) -> Address {
        match self {
            Caller::Key(signer) => signer.address(),
            Caller::Address(address) => *address,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let contracts = config::load_contracts(cli.deployments_path.as_deref())?;
    let caller = resolve_caller(&cli)?;
    let options = wrap_options(&cli)?;

    let chain = RpcChain::connect(&cli.rpc_url, contracts)?;
    let expiry = RegistrarExpiry::new(&chain);
    let tx = WrapNameBuilder::new(&contracts, &chain, &expiry, &caller)
        .build(&cli.name, &options)
        .await
        .with_context(|| format!("failed building wrap transaction for `{}`", cli.name))?;

    info!(wrap_name = %cli.name, to = %tx.to, method = tx.method, "built wrap transaction");

    let json = serde_json::to_value(&tx).context("failed serialising transaction")?;
    match &cli.out {
        Some(path) => {
            write_json_atomic(path, &json)?;
            info!(path = %path.display(), "wrote transaction");
        }
        None => println!("{}", serde_json::to_string_pretty(&json)?),
    }
    Ok(())
}

fn resolve_caller(cli: &Cli) -> Result<Caller> {
    let key = if let Some(ref path) = cli.private_key_path {
        Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed reading {}", path.display()))?,
        )
    } else {
        cli.private_key.clone()
    };

    match (key, cli.from) {
        (Some(key), _) => {
            let signer =
                LocalSigner::from_hex(&key).map_err(|_| anyhow!("invalid sender private key"))?;
            Ok(Caller::Key(signer))
        }
        (None, Some(address)) => Ok(Caller::Address(address)),
        (None, None) => Err(anyhow!(
            "missing sender: provide --private-key-path, --private-key or --from (or set PRIV_KEY_PATH/PKEY/FROM_ADDRESS)"
        )),
    }
}

fn wrap_options(cli: &Cli) -> Result<WrapOptions> {
    let mut options = WrapOptions::new(cli.wrapped_owner);
    options.fuses = cli.fuses.as_deref().map(parse_fuses).transpose()?.flatten();
    options.expiry = cli.expiry.as_deref().map(parse_expiry);
    options.resolver = cli.resolver;
    Ok(options)
}

/// `0x`-prefixed input is hex. Everything else must be JSON, so bare digits
/// read as a decimal number.
fn parse_fuses(raw: &str) -> Result<Option<FuseSpec>> {
    let raw = raw.trim();
    if is_hex_prefixed(raw) {
        return Ok(Some(FuseSpec::Hex(raw.to_string())));
    }
    let value: Value = serde_json::from_str(raw).with_context(|| {
        format!("invalid --fuses `{raw}`: expected a JSON object, a decimal number or 0x-prefixed hex")
    })?;
    if let Value::String(s) = &value {
        if !is_hex_prefixed(s) {
            bail!("invalid --fuses `{raw}`: hex fuse strings need a 0x prefix");
        }
    }
    fuse_spec_from_json(value).context("invalid --fuses")
}

fn is_hex_prefixed(raw: &str) -> bool {
    raw.starts_with("0x") || raw.starts_with("0X")
}

fn parse_expiry(raw: &str) -> Expiry {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(at) => Expiry::At(at),
        Err(_) => Expiry::Raw(raw.to_string()),
    }
}

fn write_json_atomic(path: &Path, value: &Value) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    if !parent.as_os_str().is_empty() && !parent.exists() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating directory {}", parent.display()))?;
    }

    let serialised =
        serde_json::to_string_pretty(value).context("failed serialising transaction JSON")?;
    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, serialised.as_bytes())
        .with_context(|| format!("failed writing temp file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("failed replacing {}", path.display()))?;
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ens_wrap_encoder::fuses::decode_fuses;
    use ens_wrap_types::FuseOptions;

    #[test]
    fn fuses_accept_json_number_and_hex() {
        let named = parse_fuses(r#"{"cannotUnwrap":true,"cannotTransfer":true}"#).unwrap();
        assert_eq!(
            named,
            Some(FuseSpec::Options(FuseOptions {
                cannot_unwrap: true,
                cannot_transfer: true,
                ..Default::default()
            }))
        );
        assert_eq!(parse_fuses("5").unwrap(), Some(FuseSpec::Number(5)));
        assert_eq!(parse_fuses("0x5").unwrap(), Some(FuseSpec::Hex("0x5".to_string())));
        assert_eq!(parse_fuses(r#""0x5""#).unwrap(), Some(FuseSpec::Hex("0x5".to_string())));
        assert_eq!(parse_fuses("null").unwrap(), None);
        assert!(parse_fuses("true").is_err());
    }

    #[test]
    fn bare_digits_are_decimal_and_hex_needs_a_prefix() {
        let decimal = parse_fuses("40").unwrap();
        assert_eq!(decimal, Some(FuseSpec::Number(40)));
        assert_eq!(decode_fuses(decimal.as_ref()).unwrap(), "28");

        let hex = parse_fuses("0x40").unwrap();
        assert_eq!(decode_fuses(hex.as_ref()).unwrap(), "40");

        assert!(parse_fuses("4a").is_err());
        assert!(parse_fuses(r#""40""#).is_err());
        assert!(parse_fuses("-1").is_err());
    }

    #[test]
    fn expiry_accepts_dates_and_integers() {
        assert_eq!(
            parse_expiry("2030-01-01T00:00:00Z"),
            Expiry::At(OffsetDateTime::from_unix_timestamp(1_893_456_000).unwrap())
        );
        assert_eq!(parse_expiry("1800000000"), Expiry::Raw("1800000000".to_string()));
    }

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(tmp_path_for(Path::new("out/tx.json")), PathBuf::from("out/tx.json.tmp"));
    }

    #[test]
    fn cli_rejects_conflicting_senders() {
        let parsed = Cli::try_parse_from([
            "ens-wrap",
            "vitalik.eth",
            "--wrapped-owner",
            "0x00000000000000000000000000000000000000a1",
            "--rpc-url",
            "http://localhost:8545",
            "--private-key",
            "0x01",
            "--from",
            "0x00000000000000000000000000000000000000c1",
        ]);
        assert!(parsed.is_err());
    }
}
