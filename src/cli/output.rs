//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TopicaArgs};
use crate::error::Result;
use crate::estimates::TermWeight;
use crate::sampler::GibbsConfig;

/// Result structure for corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub documents: usize,
    pub vocabulary_size: usize,
    pub token_occurrences: u64,
}

/// Top words of a single topic.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopicSummary {
    pub topic: usize,
    pub top_words: Vec<TermWeight>,
}

/// Result structure for a training run.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainReport {
    pub config: GibbsConfig,
    pub duration_ms: u64,
    pub topics: Vec<TopicSummary>,
    /// One smoothed topic distribution per document.
    pub document_topics: Vec<Vec<f64>>,
}

/// Serialize a report honoring the `--pretty` flag.
pub fn to_json<T: Serialize>(value: &T, args: &TopicaArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Print corpus statistics in the selected format.
pub fn print_corpus_stats(stats: &CorpusStats, args: &TopicaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => println!("{}", to_json(stats, args)?),
        OutputFormat::Human => {
            println!("Documents:         {}", stats.documents);
            println!("Vocabulary size:   {}", stats.vocabulary_size);
            println!("Token occurrences: {}", stats.token_occurrences);
        }
    }
    Ok(())
}

/// Print a training report in the selected format.
pub fn print_train_report(report: &TrainReport, args: &TopicaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => println!("{}", to_json(report, args)?),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!(
                    "Fitted {} topics in {} sweeps ({} ms)",
                    report.config.num_topics, report.config.num_sweeps, report.duration_ms
                );
            }
            for summary in &report.topics {
                let words: Vec<String> = summary
                    .top_words
                    .iter()
                    .map(|tw| format!("{} ({:.4})", tw.term, tw.weight))
                    .collect();
                println!("Topic {}: {}", summary.topic, words.join(", "));
            }
            if args.verbosity() > 1 {
                for (d, dist) in report.document_topics.iter().enumerate() {
                    let cells: Vec<String> =
                        dist.iter().map(|p| format!("{p:.4}")).collect();
                    println!("Doc {d}: [{}]", cells.join(", "));
                }
            }
        }
    }
    Ok(())
}
