mod logging;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;
use serde::Serialize;
use tracing::info;

use annotation_graph::{validate_dependencies, DependencyIssue};
use annotation_protocol::ParserEvaluationScore;
use annotation_sentence::AnnotatedCorpus;

#[derive(Parser)]
#[command(author, version, about = "Batch operations over annotated sentence corpora")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct CorpusArgs {
    /// Directory holding one sentence file per sentence
    #[arg(short, long, value_name = "DIR")]
    corpus: PathBuf,

    /// Only files whose name contains this text
    #[arg(short, long)]
    pattern: Option<String>,
}

impl CorpusArgs {
    fn load(&self) -> anyhow::Result<AnnotatedCorpus> {
        AnnotatedCorpus::load(&self.corpus, self.pattern.as_deref())
            .with_context(|| format!("loading corpus {}", self.corpus.display()))
    }
}

#[derive(Subcommand)]
enum Command {
    /// Export the corpus in CoNLL-U
    Conllu {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Prefix for every `sent_id`
        #[arg(long)]
        sent_id_prefix: Option<String>,

        /// Write here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Score the dependency layer of a corpus against a gold corpus
    Compare {
        #[command(flatten)]
        corpus: CorpusArgs,

        #[arg(short, long, value_name = "DIR")]
        gold: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// Archive the corpus into a single binary snapshot
    Pack {
        #[command(flatten)]
        corpus: CorpusArgs,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Report structural problems in the dependency layer
    Validate {
        #[command(flatten)]
        corpus: CorpusArgs,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ComparisonReport {
    sentences: usize,
    score: ParserEvaluationScore,
    las: f64,
    uas: f64,
    ls: f64,
}

#[derive(Serialize)]
struct SentenceIssues {
    file: String,
    issues: Vec<DependencyIssue>,
}

fn compare(system: &AnnotatedCorpus, gold: &AnnotatedCorpus) -> ComparisonReport {
    let score = system.compare_parses(gold);
    ComparisonReport {
        sentences: system.sentence_count().min(gold.sentence_count()),
        score,
        las: score.las(),
        uas: score.uas(),
        ls: score.ls(),
    }
}

fn pack(corpus: &AnnotatedCorpus) -> anyhow::Result<AlignedVec> {
    let mut serializer = AllocSerializer::<4096>::default();
    serializer
        .serialize_value(corpus)
        .map_err(|e| anyhow!("failed to archive corpus: {:?}", e))?;
    Ok(serializer.into_serializer().into_inner())
}

fn validate(corpus: &AnnotatedCorpus) -> Vec<SentenceIssues> {
    corpus
        .sentences()
        .iter()
        .enumerate()
        .filter_map(|(i, sentence)| {
            let issues = validate_dependencies(sentence);
            if issues.is_empty() {
                return None;
            }
            let file = sentence
                .file_name()
                .map_or_else(|| format!("#{}", i), ToOwned::to_owned);
            Some(SentenceIssues { file, issues })
        })
        .collect()
}

fn write_output(output: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Conllu {
            corpus,
            sent_id_prefix,
            output,
        } => {
            let corpus = corpus.load()?;
            info!(sentences = corpus.sentence_count(), "exporting CoNLL-U");
            let text = corpus.universal_dependency_format(sent_id_prefix.as_deref());
            write_output(output.as_deref(), &text)?;
        }
        Command::Compare { corpus, gold, json } => {
            let gold = AnnotatedCorpus::load(&gold, corpus.pattern.as_deref())
                .with_context(|| format!("loading gold corpus {}", gold.display()))?;
            let report = compare(&corpus.load()?, &gold);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "sentences: {}\nrelations: {}\nLAS: {:.4}\nUAS: {:.4}\nLS: {:.4}",
                    report.sentences, report.score.total, report.las, report.uas, report.ls
                );
            }
        }
        Command::Pack { corpus, output } => {
            let corpus = corpus.load()?;
            let bytes = pack(&corpus)?;
            fs::write(&output, bytes.as_slice())
                .with_context(|| format!("writing {}", output.display()))?;
            info!(
                sentences = corpus.sentence_count(),
                bytes = bytes.len(),
                path = %output.display(),
                "packed corpus"
            );
        }
        Command::Validate { corpus, json } => {
            let corpus = corpus.load()?;
            let report = validate(&corpus);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for sentence in &report {
                    for issue in &sentence.issues {
                        println!("{}: {}", sentence.file, issue);
                    }
                }
            }
            info!(
                sentences = corpus.sentence_count(),
                with_issues = report.len(),
                "validated corpus"
            );
        }
    }

    Ok(())
}
