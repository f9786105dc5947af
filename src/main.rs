use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use tts_uploader::{
    config::Config, converter::BatchConverter, document, engines::azure::AzureSpeech,
    storage::s3::S3Store, OutputMode, Voice,
};

#[derive(Parser, Debug)]
#[command(name = "tts-uploader")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Synthesize paragraphs to speech, upload the audio to S3 and write CDN URLs")]
struct Args {
    /// JSON file mapping paragraph keys to text
    #[arg(short, long, value_name = "FILE", required_unless_present = "list_voices")]
    input: Option<PathBuf>,

    /// Voice used for every paragraph
    #[arg(short, long, value_enum, default_value_t = Voice::Alloy)]
    voice: Voice,

    /// Output shape: input keys, or renumbered slideN entries
    #[arg(short, long, value_enum, default_value_t = OutputMode::Keyed)]
    mode: OutputMode,

    /// Secrets TOML with [azure] and [aws] tables; environment variables are used when omitted
    #[arg(short, long, value_name = "FILE")]
    secrets: Option<PathBuf>,

    /// Where to write the output document
    #[arg(short, long, value_name = "FILE", default_value = "Output_data.json")]
    output: PathBuf,

    /// Directory for audio staged before upload
    #[arg(long, value_name = "DIR")]
    temp_dir: Option<PathBuf>,

    /// Print the available voices and exit
    #[arg(long)]
    list_voices: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.list_voices {
        for voice in Voice::all() {
            println!("{voice}");
        }
        return Ok(());
    }

    let mut config = match &args.secrets {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };
    if let Some(dir) = args.temp_dir {
        config.temp_dir = dir;
    }

    let input = args.input.ok_or("--input is required")?;
    let paragraphs = document::load_paragraphs(&input)?;
    log::info!("Loaded {} paragraphs", paragraphs.len());

    let speech = AzureSpeech::new(&config.azure)?;
    let store = S3Store::new(&config.aws)?;
    let converter = BatchConverter::new(speech, store, &config);

    let start = Instant::now();
    let output = converter.convert(&paragraphs, args.voice, args.mode)?;
    log::info!("Done uploading to S3 in {:.2?}", start.elapsed());

    output.write_json(&args.output)?;
    println!("Wrote {} entries to {}", output.len(), args.output.display());
    Ok(())
}
