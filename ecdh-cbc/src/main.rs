use clap::Parser;
use ecdh_cbc::{PrivateScalar, PublicKeyX, WidthPolicy, codec, key_agreement::agree};
use tracing_subscriber::EnvFilter;

/// Sample private scalar of the local party.
const SAMPLE_PRIVATE_KEY: &str = "0000000000000000000000000000000000000000000000000000000000002222";

/// Sample x-coordinate of the remote party's public key.
const SAMPLE_REMOTE_X: &str = "2ef93f01cd2493e04235a6b87b10d3c4a74e2a7eb7c3caf168268f6af73314b5";

#[derive(Parser, Debug)]
#[command(
    name = "ecdh-cbc",
    about = "Agree on a secp256k1 ECDH secret and push a message through an AES-256-CBC envelope"
)]
pub struct Config {
    /// Local private scalar, hex encoded
    #[arg(long, default_value = SAMPLE_PRIVATE_KEY)]
    pub private_key: String,

    /// x-coordinate of the remote public key, hex encoded
    #[arg(long, default_value = SAMPLE_REMOTE_X)]
    pub remote_x: String,

    /// Message to encrypt and decrypt
    #[arg(short, long, default_value = "hi")]
    pub message: String,

    /// Reject keys wider than 32 bytes instead of keeping their low-order bytes
    #[arg(long)]
    pub strict_width: bool,
}

fn main() -> Result<(), ecdh_cbc::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Config::parse();
    let policy = if args.strict_width { WidthPolicy::Reject } else { WidthPolicy::Truncate };

    let private_key = PrivateScalar::from_hex(&args.private_key, policy)?;
    let remote_x = PublicKeyX::from_hex(&args.remote_x, policy)?;

    let shared_secret = agree(&private_key, &remote_x)?;
    println!("secretKey = {}", shared_secret.to_hex());

    let envelope = codec::encrypt(&shared_secret, &args.message).to_string();
    println!("msg = {envelope}");

    let decoded = codec::decrypt(&shared_secret, &envelope)?;
    println!("decodedMessage = {decoded}");

    Ok(())
}
