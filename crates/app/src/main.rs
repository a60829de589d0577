use clap::Parser;
use std::process::ExitCode;
use talkback_app::{logging, pipeline};
use talkback_audio::Player;
use talkback_tts::{SynthesisOptions, TtsEngine};
use talkback_tts_edge::EdgeTtsEngine;
use tracing::error;

#[derive(Parser)]
#[command(name = "talkback")]
#[command(about = "Speak text aloud through edge-tts and mpv")]
struct Cli {
    /// Text to speak; multiple arguments are joined with spaces
    text: Vec<String>,

    /// TTS voice (default: zh-CN-XiaoxiaoNeural)
    #[arg(long)]
    voice: Option<String>,

    /// Speech rate, e.g. "+10%"
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,

    /// Volume, e.g. "-5%"
    #[arg(long, allow_hyphen_values = true)]
    volume: Option<String>,

    /// List available voices and exit
    #[arg(long)]
    list_voices: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    let engine = EdgeTtsEngine::new(&std::env::temp_dir());

    if cli.list_voices {
        return match engine.list_voices().await {
            Ok(voices) => {
                for voice in voices {
                    println!("{:<40} {}", voice.id, voice.language);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let text = cli.text.join(" ");
    if text.trim().is_empty() {
        eprintln!("Error: no text provided");
        eprintln!();
        eprintln!("Usage: talkback <TEXT>... [--voice <NAME>] [--rate <PERCENT>] [--volume <PERCENT>]");
        return ExitCode::FAILURE;
    }

    let options = SynthesisOptions {
        voice: cli.voice,
        rate: cli.rate,
        volume: cli.volume,
    };

    match pipeline::speak(&engine, &Player::new(), &text, &options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
