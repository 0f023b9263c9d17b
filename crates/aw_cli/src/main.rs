use aw_cleaner::boilerplate::BOILERPLATE;
use aw_cleaner::{init_logging, Normalizer, PipelineManager};
use aw_core::{ArticleSource, PipelineConfig, Result};
use aw_inference::RelevanceClassifier;
use aw_storage::{create_storage, JsonlSource};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "aw", author, version, about = "Clean, filter and tag news articles about AI and work", long_about = None)]
pub struct Cli {
    /// TOML configuration file; every value has a default
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the whole pipeline over a JSON-lines file
    Run(RunArgs),
    /// Clean one article body
    Clean {
        /// Also strip boilerplate after the first pass
        #[arg(long)]
        extended: bool,
        /// Text to clean; read from stdin when omitted
        text: Option<String>,
    },
    /// Clean one headline
    Title { title: String },
    /// Print the relevance verdict for a text as JSON
    Classify {
        /// Text to classify; read from stdin when omitted
        text: Option<String>,
    },
    /// List the boilerplate rules in the order they are applied
    Rules,
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Input file, one JSON article per line, or `-` for stdin
    input: PathBuf,
    /// Storage backend (memory, jsonl)
    #[arg(long)]
    storage: Option<String>,
    /// Output file; implies the jsonl backend
    #[arg(long)]
    output: Option<PathBuf>,
    /// Skip sentiment tagging
    #[arg(long)]
    no_sentiment: bool,
    /// Keep records without a usable date
    #[arg(long)]
    keep_undated: bool,
    /// Maximum number of chunks processed at once
    #[arg(long)]
    concurrency: Option<usize>,
}

fn load_config(path: Option<&PathBuf>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::load(path),
        None => Ok(PipelineConfig::default()),
    }
}

/// Command line flags take precedence over the configuration file.
fn apply_run_overrides(mut config: PipelineConfig, args: &RunArgs) -> Result<PipelineConfig> {
    if let Some(output) = &args.output {
        config.storage.backend = "jsonl".to_string();
        config.storage.path = Some(output.display().to_string());
    }
    if let Some(storage) = &args.storage {
        config.storage.backend = storage.clone();
    }
    if args.no_sentiment {
        config.sentiment.enabled = false;
    }
    if args.keep_undated {
        config.pipeline.drop_undated = false;
    }
    if let Some(concurrency) = args.concurrency {
        config.pipeline.max_concurrency = concurrency;
    }
    config.validate()?;
    Ok(config)
}

async fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            Ok(buffer)
        }
    }
}

async fn run(config: PipelineConfig, args: RunArgs) -> Result<()> {
    let storage = create_storage(&config.storage).await?;
    info!("💾 Storage initialized (using {})", config.storage.backend);

    let source = JsonlSource::new(args.input);
    let articles = source.load_articles().await?;

    let manager = PipelineManager::from_config(&config, storage.clone())?;
    let stats = manager.run(articles).await?;

    let mut out = std::io::stdout().lock();
    if config.storage.backend == "memory" {
        for article in storage.all_articles().await? {
            writeln!(out, "{}", serde_json::to_string(&article)?)?;
        }
    } else {
        writeln!(out, "{}", serde_json::to_string(&stats)?)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Run(args) => {
            let config = apply_run_overrides(config, &args)?;
            run(config, args).await?;
        }
        Commands::Clean { extended, text } => {
            let normalizer = Normalizer::new(config.cleaner)?;
            let text = normalizer.normalize(read_text(text).await?);
            let text = if extended {
                normalizer.strip_boilerplate(&text)
            } else {
                text
            };
            println!("{}", text);
        }
        Commands::Title { title } => {
            let normalizer = Normalizer::new(config.cleaner)?;
            println!("{}", normalizer.normalize_title(title));
        }
        Commands::Classify { text } => {
            let classifier = RelevanceClassifier::new(&config.relevance);
            let text = Normalizer::new(config.cleaner)?.normalize(read_text(text).await?);
            println!("{}", serde_json::to_string(&classifier.classify(&text))?);
        }
        Commands::Rules => {
            let normalizer = Normalizer::new(config.cleaner)?;
            let mut out = std::io::stdout().lock();
            for rule in normalizer.rules().rules() {
                writeln!(out, "{:<28} {:<12} {}", rule.name(), rule.category(), rule.pattern())?;
            }
            info!(
                "{} built-in rules, {} from configuration",
                BOILERPLATE.len(),
                normalizer.rules().len() - BOILERPLATE.len()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from([
            "aw",
            "run",
            "articles.jsonl",
            "--output",
            "out.jsonl",
            "--no-sentiment",
            "--concurrency",
            "4",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level, "debug");
        let Commands::Run(args) = cli.command else {
            panic!("expected the run command");
        };
        assert_eq!(args.input, PathBuf::from("articles.jsonl"));
        assert!(args.no_sentiment);
        assert!(!args.keep_undated);
        assert_eq!(args.concurrency, Some(4));
    }

    #[test]
    fn test_parse_clean_from_stdin() {
        let cli = Cli::try_parse_from(["aw", "--config", "aw.toml", "clean", "--extended"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("aw.toml")));
        assert!(matches!(cli.command, Commands::Clean { extended: true, text: None }));
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["aw"]).is_err());
        assert!(Cli::try_parse_from(["aw", "title"]).is_err());
    }

    #[test]
    fn test_run_overrides() {
        let args = RunArgs {
            input: PathBuf::from("-"),
            storage: None,
            output: Some(PathBuf::from("out.jsonl")),
            no_sentiment: true,
            keep_undated: true,
            concurrency: Some(2),
        };
        let config = apply_run_overrides(PipelineConfig::default(), &args).unwrap();
        assert_eq!(config.storage.backend, "jsonl");
        assert_eq!(config.storage.path.as_deref(), Some("out.jsonl"));
        assert!(!config.sentiment.enabled);
        assert!(!config.pipeline.drop_undated);
        assert_eq!(config.pipeline.max_concurrency, 2);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let args = RunArgs {
            input: PathBuf::from("-"),
            storage: None,
            output: None,
            no_sentiment: false,
            keep_undated: false,
            concurrency: Some(0),
        };
        assert!(apply_run_overrides(PipelineConfig::default(), &args).is_err());
    }
}
