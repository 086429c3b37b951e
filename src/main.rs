use clap::{CommandFactory, Parser, ValueEnum};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use tessera::encoding::encode_block;
use tessera::internal::SplitMix64;
use tessera::{BlockCipher, Tessera128, Tessera256, TesseraError};

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "TESSERA block cipher CLI tool", long_about = None)]
struct Cli {
    /// Generate a random block-width hex string
    #[arg(long)]
    generate: bool,

    /// Master key in hex (required with --encrypt / --decrypt)
    #[arg(long)]
    key: Option<String>,

    /// Plaintext block to encrypt under --key, in hex
    #[arg(long, value_name = "HEX")]
    encrypt: Option<String>,

    /// Ciphertext block to decrypt under --key, in hex
    #[arg(long, value_name = "HEX")]
    decrypt: Option<String>,

    /// Block width in bits
    #[arg(long, value_enum, default_value = "128")]
    width: BlockWidth,
}

#[derive(Clone, Copy, ValueEnum)]
enum BlockWidth {
    #[value(name = "128")]
    W128,
    #[value(name = "256")]
    W256,
}

impl BlockWidth {
    fn block_bytes(self) -> usize {
        match self {
            BlockWidth::W128 => Tessera128::BLOCK_BYTES,
            BlockWidth::W256 => Tessera256::BLOCK_BYTES,
        }
    }
}

/// Produce a random block as lowercase hex from a freshly seeded generator.
fn generate_hex(block_bytes: usize) -> String {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x9E37_79B9_7F4A_7C15);
    let mut rng = SplitMix64::new(seed);
    let mut block = vec![0u8; block_bytes];
    rng.fill_bytes(&mut block);
    encode_block(&block)
}

fn run<C: BlockCipher>(key: &str, payload: &str, decrypting: bool) -> Result<String, TesseraError> {
    let cipher = C::with_key_hex(key)?;
    if decrypting {
        cipher.decrypt_hex(payload)
    } else {
        cipher.encrypt_hex(payload)
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.generate {
        println!("{}", generate_hex(cli.width.block_bytes()));
        return;
    }

    let outcome = match (&cli.key, &cli.encrypt, &cli.decrypt) {
        (Some(key), Some(plaintext), None) => match cli.width {
            BlockWidth::W128 => run::<Tessera128>(key, plaintext, false),
            BlockWidth::W256 => run::<Tessera256>(key, plaintext, false),
        },
        (Some(key), None, Some(ciphertext)) => match cli.width {
            BlockWidth::W128 => run::<Tessera128>(key, ciphertext, true),
            BlockWidth::W256 => run::<Tessera256>(key, ciphertext, true),
        },
        _ => {
            // No recognized action combination: show usage, signal misuse.
            let _ = Cli::command().print_help();
            process::exit(2);
        }
    };

    match outcome {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
