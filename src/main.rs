use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cipher_demo::cli::{
    handle_asymmetric_command, handle_symmetric_command, AsymmetricArgs, SymmetricArgs,
};
use cipher_demo::config::{paths::DemoPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "cipher-demo",
    version,
    about = "AES-256 (CTR/CFB) and RSA-OAEP encryption demonstrations",
    long_about = "cipher-demo encrypts a message, decrypts it again and prints every \
                  intermediate value: key material, hex ciphertext and the round-trip \
                  result. Symmetric runs use AES-256 in CTR or CFB mode; asymmetric runs \
                  use RSA with OAEP (SHA-256) padding."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt and decrypt a message with AES-256 (CTR or CFB)
    #[command(alias = "aes")]
    Symmetric(SymmetricArgs),

    /// Generate an RSA key pair and round-trip a message through RSA-OAEP
    #[command(alias = "rsa")]
    Asymmetric(AsymmetricArgs),

    /// Show current configuration, writing the defaults if no settings file exists
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = DemoPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let round_trip_ok = match cli.command {
        Some(Commands::Symmetric(args)) => handle_symmetric_command(&settings, args)?,
        Some(Commands::Asymmetric(args)) => handle_asymmetric_command(&settings, args)?,
        Some(Commands::Config) => {
            let created = !paths.settings_file().exists();
            if created {
                settings.save(&paths)?;
            }

            println!("cipher-demo Configuration");
            println!("=========================");
            println!("Config file: {}", paths.settings_file().display());
            if created {
                println!("  (created with default settings)");
            }
            println!();
            println!("Settings:");
            println!("  Symmetric mode:        {}", settings.symmetric.default_mode);
            println!("  RSA modulus bits:      {}", settings.asymmetric.modulus_bits);
            println!("  RSA public exponent:   {}", settings.asymmetric.public_exponent);
            println!("  Symmetric message:     {}", settings.demo.symmetric_message);
            println!("  Asymmetric message:    {}", settings.demo.asymmetric_message);
            true
        }
        None => {
            println!("cipher-demo - AES-256 and RSA-OAEP encryption demonstrations");
            println!();
            println!("Run 'cipher-demo --help' for usage information.");
            println!("Run 'cipher-demo symmetric' or 'cipher-demo asymmetric' to start.");
            true
        }
    };

    if !round_trip_ok {
        bail!("decrypted text does not match the original");
    }

    Ok(())
}
