//! keccak-rsa command line
//!
//! Generates key pairs and signs or verifies files with them.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use keccak_rsa::buffer::ByteBuffer;
use keccak_rsa::config::FileConfig;
use keccak_rsa::rsa::{decrypt_to_string, encrypt, generate_keypair, sign, verify};
use keccak_rsa::util::{load_key, save_keypair, sign_file, verify_file};

// ── CLI Arguments ─────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "keccak-rsa", version, about = "RSA-OAEP with a SHA3 sponge")]
struct Args {
    /// Suffix of public key files
    #[arg(long, default_value = ".pk", env = "KECCAK_RSA_PK_SUFFIX")]
    pk_suffix: String,

    /// Suffix of secret key files
    #[arg(long, default_value = ".sk", env = "KECCAK_RSA_SK_SUFFIX")]
    sk_suffix: String,

    /// Suffix appended to a file name for its signature
    #[arg(long, default_value = ".sign", env = "KECCAK_RSA_SIGN_SUFFIX")]
    sign_suffix: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write <stem>.pk and <stem>.sk
    GenerateKeypair { stem: String },

    /// Sign <file> with <key>
    SignFile {
        key: PathBuf,
        file: String,
        /// Signature path, defaults to <file> plus the signature suffix
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Check the signature of <file> with <key>
    VerifyFile {
        key: PathBuf,
        file: String,
        /// Signature path, defaults to <file> plus the signature suffix
        #[arg(short, long)]
        signature: Option<PathBuf>,
    },

    /// Generate a key pair, then encrypt, decrypt, sign and verify a message
    Demo {
        #[arg(default_value = "abc")]
        message: String,
    },
}

// ── Entry Point ───────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keccak_rsa=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = FileConfig::default()
        .with_public_suffix(args.pk_suffix)
        .with_secret_suffix(args.sk_suffix)
        .with_signature_suffix(args.sign_suffix);

    // One generator for the whole process, seeded from OS entropy
    let mut rng = StdRng::from_entropy();

    match args.command {
        Command::GenerateKeypair { stem } => {
            let keys = generate_keypair(&mut rng).context("generating key pair")?;
            let (pk, sk) = save_keypair(&stem, &keys, &config)
                .with_context(|| format!("writing key pair {}", stem))?;
            println!("Public key: {}", pk.display());
            println!("Secret key: {}", sk.display());
        }

        Command::SignFile { key, file, out } => {
            let sk = load_key(&key).with_context(|| format!("loading key {}", key.display()))?;
            let out = out.unwrap_or_else(|| PathBuf::from(config.signature_path(&file)));
            sign_file(&out, file.as_ref(), &sk).with_context(|| format!("signing {}", file))?;
            println!("Signature: {}", out.display());
        }

        Command::VerifyFile { key, file, signature } => {
            let pk = load_key(&key).with_context(|| format!("loading key {}", key.display()))?;
            let signature =
                signature.unwrap_or_else(|| PathBuf::from(config.signature_path(&file)));
            let valid = verify_file(&signature, file.as_ref(), &pk)
                .with_context(|| format!("verifying {}", file))?;
            println!("Signature is {}", if valid { "valid" } else { "invalid" });
        }

        Command::Demo { message } => {
            let msg = ByteBuffer::from_bytes(message.as_bytes());
            println!("Original message: {}", msg);

            let keys = generate_keypair(&mut rng).context("generating key pair")?;

            let cipher = encrypt(&msg, &keys.public_key, &mut rng)?;
            println!("Encrypted message: {}", cipher);

            let signature = sign(&msg, &keys.secret_key)?;
            let valid = verify(&signature, &msg, &keys.public_key)?;
            println!("Signature is {}", if valid { "valid" } else { "invalid" });

            let plain = decrypt_to_string(cipher.as_bytes(), &keys.secret_key)?;
            println!("Decrypted message: {}", plain);
        }
    }

    Ok(())
}
