//! Command implementations for the Topica CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::Corpus;
use crate::error::{Result, TopicaError};
use crate::sampler::{GibbsConfig, GibbsSampler};

/// Execute a CLI command.
pub fn execute_command(args: TopicaArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load a tokenized corpus from a JSON file.
///
/// The expected shape is the output of an external preprocessing stage: a
/// JSON array of documents, each an array of token strings.
pub fn load_corpus_from_file(path: &Path) -> Result<Corpus> {
    let content = fs::read_to_string(path)?;
    let documents: Vec<Vec<String>> = serde_json::from_str(&content).map_err(|e| {
        TopicaError::corpus(format!(
            "{} is not a JSON array of arrays of token strings: {e}",
            path.display()
        ))
    })?;
    Ok(Corpus::from_documents(documents))
}

/// Fit a topic model and report it.
fn train(args: TrainArgs, cli_args: &TopicaArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading corpus from: {}", args.input.display());
    }
    let corpus = load_corpus_from_file(&args.input)?;

    let config = GibbsConfig {
        num_topics: args.topics,
        alpha: args.alpha,
        beta: args.beta,
        num_sweeps: args.sweeps,
        seed: args.seed,
    };
    let sampler = GibbsSampler::new(config)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Sampling {} tokens across {} documents...",
            corpus.total_tokens(),
            corpus.num_documents()
        );
    }

    let start = Instant::now();
    let model = sampler.fit(&corpus)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let topics = model
        .top_words(&corpus, args.top_words)
        .into_iter()
        .enumerate()
        .map(|(topic, top_words)| TopicSummary { topic, top_words })
        .collect();
    let document_topics = (0..corpus.num_documents())
        .map(|d| model.document_topic_distribution(d))
        .collect();

    let report = TrainReport {
        config: sampler.config().clone(),
        duration_ms,
        topics,
        document_topics,
    };

    if let Some(output) = &args.output {
        fs::write(output, serde_json::to_string_pretty(&report)?)?;
        if cli_args.verbosity() > 0 {
            println!("Report written to: {}", output.display());
        }
    }

    print_train_report(&report, cli_args)
}

/// Show corpus statistics.
fn show_stats(args: StatsArgs, cli_args: &TopicaArgs) -> Result<()> {
    let corpus = load_corpus_from_file(&args.input)?;

    let stats = CorpusStats {
        documents: corpus.num_documents(),
        vocabulary_size: corpus.num_terms(),
        token_occurrences: corpus.total_tokens(),
    };

    print_corpus_stats(&stats, cli_args)
}
