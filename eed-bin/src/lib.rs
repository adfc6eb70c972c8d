use anyhow::Context;
use clap::{value_parser, Parser};
use derive_more::AddAssign;
use eed::{cli::CostArgs, Cost, Eed, EedStats};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Extended Edit Distance metric for machine translation.
///
/// Scores each line of the hypothesis file against the same line of the
/// reference file and reports the mean as the system score.
#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(author, about, disable_version_flag(true))]
pub struct Cli {
    /// Reference file, one sentence per line.
    #[clap(short, long, alias = "ref", value_parser = value_parser!(PathBuf), display_order = 1)]
    pub reference: PathBuf,

    /// Input (test) file, one sentence per line.
    #[clap(short = 'i', long, alias = "hyp", value_parser = value_parser!(PathBuf), display_order = 1)]
    pub hypothesis: PathBuf,

    /// Show scores of each sentence.
    #[clap(short, long)]
    pub verbose: bool,

    /// Write a .json with the per-sentence scores and the system score.
    #[clap(short, long, value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// Parameters of the metric.
    #[clap(flatten)]
    pub costs: CostArgs,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("input file has {hyp} lines, but reference has {reference} lines.")]
    LineCountMismatch { hyp: usize, reference: usize },
}

/// Summed statistics over the scored sentences.
#[derive(Default, Clone, Copy, AddAssign, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Sum of the sentence scores.
    pub total: Cost,
    /// Sentences whose ratio exceeded 1.
    pub capped: usize,
    pub sample_size: usize,
}

impl From<&EedStats> for CorpusStats {
    fn from(s: &EedStats) -> Self {
        Self {
            total: s.score,
            capped: s.is_capped() as usize,
            sample_size: 1,
        }
    }
}

impl CorpusStats {
    /// Mean sentence score; 0 for an empty corpus.
    pub fn mean(&self) -> Cost {
        if self.sample_size == 0 {
            0.0
        } else {
            self.total / self.sample_size as Cost
        }
    }
}

#[derive(Default, Clone, Debug, PartialEq)]
pub struct CorpusScores {
    /// One score per line, in input order.
    pub scores: Vec<Cost>,
    pub stats: CorpusStats,
}

#[derive(Serialize)]
struct Report<'a> {
    scores: &'a [Cost],
    mean: Cost,
}

impl CorpusScores {
    pub fn mean(&self) -> Cost {
        self.stats.mean()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Report {
            scores: &self.scores,
            mean: self.mean(),
        })
    }
}

/// Read all lines of a UTF-8 file without their line terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let io_err = |source| InputError::Io {
        path: path.to_owned(),
        source,
    };
    let f = File::open(path).map_err(io_err)?;
    BufReader::new(f)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)
}

/// Score each hypothesis line against the reference line with the same index.
pub fn score_corpus<H: AsRef<str>, R: AsRef<str>>(
    eed: &Eed,
    hyps: &[H],
    refs: &[R],
) -> Result<CorpusScores, InputError> {
    if hyps.len() != refs.len() {
        return Err(InputError::LineCountMismatch {
            hyp: hyps.len(),
            reference: refs.len(),
        });
    }
    let mut corpus = CorpusScores::default();
    for (lineno, (h, r)) in hyps.iter().zip(refs).enumerate() {
        let stats = eed.score_with_stats(h.as_ref(), r.as_ref());
        debug!("sentence {}: {stats}", lineno + 1);
        corpus.scores.push(stats.score);
        corpus.stats += CorpusStats::from(&stats);
    }
    Ok(corpus)
}

impl Cli {
    /// Score the input files and print the report to `out`.
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<CorpusScores> {
        let eed = self.costs.scorer()?;
        let hyps = read_lines(&self.hypothesis)?;
        let refs = read_lines(&self.reference)?;
        let corpus = score_corpus(&eed, &hyps, &refs)?;

        if self.verbose {
            for (lineno, score) in corpus.scores.iter().enumerate() {
                writeln!(out, "Sentence {}: {score:.4}", lineno + 1)?;
            }
        }
        writeln!(out, "System Score={:.4}", corpus.mean())?;
        info!(
            "scored {} sentences, {} capped",
            corpus.stats.sample_size, corpus.stats.capped
        );

        if let Some(output) = &self.output {
            std::fs::write(output, corpus.to_json()? + "\n")
                .with_context(|| format!("cannot write {}", output.display()))?;
        }
        Ok(corpus)
    }
}
