use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use lexivox::batch::{self, BatchEvent};
use lexivox::config::Config;
use lexivox::engine::{Engine, InitEvent};
use lexivox::error::LexivoxError;
use lexivox::vocabulary::Vocabulary;
use lexivox::{corpus, dirs, trainer};

#[derive(Parser)]
#[command(name = "lexivox")]
#[command(about = "Vocabulary-aware batch speech transcription")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn domain terms and phrases from a folder of reference documents
    Train {
        /// Folder containing reference documents
        folder: PathBuf,
    },
    /// Transcribe audio files and clean them with the trained vocabulary
    Run {
        /// Audio files or folders to transcribe
        inputs: Vec<PathBuf>,
        /// Output directory (default: <prefix>_<timestamp>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show vocabulary and model status
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_default();
    let _guard = lexivox::init_logging(&config)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Train { folder } => cmd_train(&config, &folder),
        Commands::Run { inputs, output } => cmd_run(config, &inputs, output).await,
        Commands::Status => cmd_status(&config),
    }
}

fn cmd_train(config: &Config, folder: &Path) -> anyhow::Result<()> {
    println!("Analyzing reference documents in {}", folder.display());

    let documents = corpus::collect_documents(folder, &config.training.document_extensions)?;
    let vocabulary = trainer::train(&documents)?;

    let store = dirs::vocabulary_path()?;
    vocabulary.save(&store)?;

    println!(
        "Trained on {} documents: {} terms, {} phrases",
        documents.len(),
        vocabulary.term_count(),
        vocabulary.phrase_count()
    );
    println!("Vocabulary saved to {}", store.display());

    Ok(())
}

async fn cmd_run(config: Config, inputs: &[PathBuf], output: Option<PathBuf>) -> anyhow::Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("no input files or folders given");
    }

    let queue = batch::build_queue(inputs, &config.batch)?;
    if queue.is_empty() {
        anyhow::bail!("no audio files found in the given paths");
    }

    let vocabulary = load_vocabulary()?;
    let output_dir = output.unwrap_or_else(|| batch::default_output_dir(&config.batch.output_prefix));

    let mut engine = Engine::new(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));
    engine
        .initialize(|event| match event {
            InitEvent::Downloading { model } => {
                spinner.set_message(format!("Downloading model {model}..."));
            }
            InitEvent::Loading { model } => {
                spinner.set_message(format!("Loading model {model}..."));
            }
            InitEvent::Ready => spinner.finish_with_message("Model ready"),
        })
        .await?;

    let bar = ProgressBar::new(queue.len() as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?.progress_chars("=> "));

    let summary = batch::run_batch(&mut engine, &vocabulary, &queue, &output_dir, |event| {
        match event {
            BatchEvent::FileStarted { path, .. } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                bar.set_message(name);
            }
            BatchEvent::FileFinished { .. } => bar.inc(1),
            BatchEvent::FileFailed { path, error } => {
                bar.println(format!("failed: {}: {error}", path.display()));
                bar.inc(1);
            }
        }
    })?;
    bar.finish_and_clear();

    println!(
        "Processed {} files ({} failed)",
        summary.processed, summary.failed
    );
    println!("Transcripts saved to {}", output_dir.display());

    Ok(())
}

/// Load the trained vocabulary; a missing or corrupt store degrades to the
/// untrained state (cleaning becomes a pass-through).
fn load_vocabulary() -> anyhow::Result<Vocabulary> {
    match Vocabulary::load(dirs::vocabulary_path()?) {
        Ok(vocabulary) => {
            println!(
                "Vocabulary: {} terms \u{2022} {} phrases",
                vocabulary.term_count(),
                vocabulary.phrase_count()
            );
            Ok(vocabulary)
        }
        Err(err) => {
            warn!(error = %err, "No usable vocabulary, cleaning disabled");
            eprintln!("Warning: no trained vocabulary ({err}); transcripts will keep filler words");
            Ok(Vocabulary::default())
        }
    }
}

fn cmd_status(config: &Config) -> anyhow::Result<()> {
    match Vocabulary::load(dirs::vocabulary_path()?) {
        Ok(vocabulary) => println!(
            "Vocabulary: trained \u{2022} {} terms \u{2022} {} phrases",
            vocabulary.term_count(),
            vocabulary.phrase_count()
        ),
        Err(LexivoxError::StoreMissing(_)) => println!("Vocabulary: not trained"),
        Err(err) => println!("Vocabulary: unreadable ({err}) \u{2014} run train to rebuild"),
    }

    println!("Model: {}", config.model.model);
    println!("Language: {}", config.model.language);

    Ok(())
}
