use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::config::{Settings, SpawnParams, StepParams};
use crate::error::SimResult;
use crate::genetic_algorithm::Statistics;
use crate::session::Session;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub p50: f64,
    pub p90: f64,
}

#[derive(Debug, Clone, Default)]
pub struct MetricAggregator {
    samples: Vec<f64>,
    sum: f64,
    min: f64,
    max: f64,
}

impl MetricAggregator {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.samples.push(value);
    }

    pub fn summary(&self) -> MetricSummary {
        if self.samples.is_empty() {
            return MetricSummary::default();
        }

        let mut sorted = self.samples.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        MetricSummary {
            count: self.samples.len(),
            min: self.min,
            max: self.max,
            mean: self.sum / self.samples.len() as f64,
            p50: percentile_nearest_rank(&sorted, 0.50),
            p90: percentile_nearest_rank(&sorted, 0.90),
        }
    }
}

fn percentile_nearest_rank(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let p = p.clamp(0.0, 1.0);
    let rank = ((p * sorted.len() as f64).ceil() as usize).saturating_sub(1);
    sorted[rank.min(sorted.len() - 1)]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: usize,
    pub min_fitness: f32,
    pub max_fitness: f32,
    pub avg_fitness: f32,
}

/// Outcome of a headless run, written as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub seed: Option<u64>,
    pub spawn: SpawnParams,
    pub step: StepParams,
    pub generations: Vec<GenerationRecord>,
    pub avg_fitness: MetricSummary,
    pub max_fitness: MetricSummary,
}

/// Collects per-generation statistics while a headless run progresses.
#[derive(Debug, Clone)]
pub struct RunRecorder {
    seed: Option<u64>,
    spawn: SpawnParams,
    step: StepParams,
    generations: Vec<GenerationRecord>,
    avg: MetricAggregator,
    max: MetricAggregator,
}

impl RunRecorder {
    pub fn new(seed: Option<u64>, spawn: SpawnParams, step: StepParams) -> Self {
        Self {
            seed,
            spawn,
            step,
            generations: Vec::new(),
            avg: MetricAggregator::new(),
            max: MetricAggregator::new(),
        }
    }

    pub fn record(&mut self, generation: usize, stats: &Statistics) {
        self.avg.push(stats.avg_fitness as f64);
        self.max.push(stats.max_fitness as f64);
        self.generations.push(GenerationRecord {
            generation,
            min_fitness: stats.min_fitness,
            max_fitness: stats.max_fitness,
            avg_fitness: stats.avg_fitness,
        });
    }

    pub fn finish(self) -> RunReport {
        RunReport {
            seed: self.seed,
            spawn: self.spawn,
            step: self.step,
            avg_fitness: self.avg.summary(),
            max_fitness: self.max.summary(),
            generations: self.generations,
        }
    }
}

/// Train `generations` full generations without a window and report on them.
pub fn run_headless(settings: &Settings, generations: usize) -> SimResult<RunReport> {
    let mut session = Session::from_params(settings.spawn, settings.seed)?;
    let mut recorder = RunRecorder::new(settings.seed, *session.spawn_params(), settings.step);

    tracing::info!(generations, "headless run");
    for _ in 0..generations {
        let stats = session.train(&settings.step)?;
        recorder.record(session.generation(), &stats);
    }

    Ok(recorder.finish())
}

impl RunReport {
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write to `path`, or to stdout when no path is given.
    pub fn write(&self, path: Option<&Path>) -> SimResult<()> {
        let json = self.to_json()?;
        match path {
            Some(path) => {
                std::fs::write(path, json)?;
                tracing::info!("report written to {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{json}")?;
            }
        }
        Ok(())
    }
}
