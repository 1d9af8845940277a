//! Demo CLI: drives the full signing flow against the scripted platform.
//!
//! No biometric hardware is involved; prompt outcomes are chosen on the
//! command line. Useful for exercising the classification and receipt shapes
//! on a development machine.

use std::str::FromStr;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing::level_filters::LevelFilter;

use biosign::adapters::{ScriptedOutcome, ScriptedPlatform};
use biosign::{Biometrics, PromptOptions, SignatureOptions};

#[derive(Parser, Debug)]
#[command(name = "biosign")]
#[command(about = "Biometric-gated signing demo (scripted platform)", version)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report biometric availability
    Check {
        /// Capability the scripted platform reports
        #[arg(long, value_enum, default_value_t = CapabilityArg::Enrolled)]
        capability: CapabilityArg,
    },

    /// Generate the managed keypair and print its public key
    CreateKeys,

    /// Sign a payload after a (scripted) biometric ceremony
    Sign {
        /// Payload to sign
        payload: String,

        /// Prompt title shown to the user
        #[arg(long, default_value = "Sign with biometrics")]
        prompt: String,

        /// How the scripted prompt resolves
        #[arg(long, value_enum, default_value_t = OutcomeArg::Approve)]
        outcome: OutcomeArg,
    },

    /// Run an unbound liveness prompt
    Prompt {
        /// Prompt title shown to the user
        #[arg(long, default_value = "Confirm your identity")]
        message: String,

        /// How the scripted prompt resolves
        #[arg(long, value_enum, default_value_t = OutcomeArg::Approve)]
        outcome: OutcomeArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CapabilityArg {
    Enrolled,
    NoHardware,
    HardwareUnavailable,
    NoneEnrolled,
}

impl From<CapabilityArg> for biosign::CapabilityCode {
    fn from(arg: CapabilityArg) -> Self {
        match arg {
            CapabilityArg::Enrolled => biosign::CapabilityCode::Success,
            CapabilityArg::NoHardware => biosign::CapabilityCode::NoHardware,
            CapabilityArg::HardwareUnavailable => biosign::CapabilityCode::HardwareUnavailable,
            CapabilityArg::NoneEnrolled => biosign::CapabilityCode::NoneEnrolled,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutcomeArg {
    Approve,
    Cancel,
    FailMatch,
    Lockout,
    PermanentLockout,
    SensorError,
}

impl From<OutcomeArg> for ScriptedOutcome {
    fn from(arg: OutcomeArg) -> Self {
        match arg {
            OutcomeArg::Approve => ScriptedOutcome::Approve,
            OutcomeArg::Cancel => ScriptedOutcome::Cancel,
            OutcomeArg::FailMatch => ScriptedOutcome::FailMatch,
            OutcomeArg::Lockout => ScriptedOutcome::Lockout { permanent: false },
            OutcomeArg::PermanentLockout => ScriptedOutcome::Lockout { permanent: true },
            OutcomeArg::SensorError => ScriptedOutcome::Error("sensor error".to_string()),
        }
    }
}

fn init_tracing(verbosity: &Verbosity<WarnLevel>) {
    let level = LevelFilter::from_str(&verbosity.log_level_filter().to_string())
        .unwrap_or(LevelFilter::WARN);
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to serialize result")?
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.verbosity);

    let biometrics = Biometrics::new(ScriptedPlatform::new());

    match cli.command {
        Commands::Check { capability } => {
            biometrics.platform().set_capability(capability.into());
            print_json(&biometrics.is_sensor_available())?;
        }
        Commands::CreateKeys => {
            let created = biometrics
                .create_keys()
                .context("key generation failed")?;
            print_json(&created)?;
        }
        Commands::Sign {
            payload,
            prompt,
            outcome,
        } => {
            biometrics.create_keys().context("key generation failed")?;
            biometrics.platform().script(outcome.into());

            match biometrics
                .create_signature(SignatureOptions {
                    prompt_message: prompt,
                    payload: payload.into_bytes(),
                    cancel_button_text: None,
                })
                .await
            {
                Ok(receipt) => print_json(&receipt)?,
                Err(err) => {
                    eprintln!("{}: {err}", err.code());
                    std::process::exit(1);
                }
            }
        }
        Commands::Prompt { message, outcome } => {
            biometrics.platform().script(outcome.into());

            match biometrics
                .simple_prompt(PromptOptions {
                    prompt_message: message,
                    cancel_button_text: None,
                })
                .await
            {
                Ok(receipt) => print_json(&receipt)?,
                Err(err) => {
                    eprintln!("{}: {err}", err.code());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
