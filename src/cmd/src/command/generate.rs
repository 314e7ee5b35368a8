use std::fmt::Write;
use std::time::Instant;

use bytesize::ByteSize;
use clap::Parser;
use common::config::Config;
use common::config::Generation;
use common::layout::Layout;
use datagen::facts::cells;
use datagen::generate_dimensions;
use datagen::generate_facts;
use indicatif::ProgressBar;
use indicatif::ProgressState;
use indicatif::ProgressStyle;
use tracing::debug;
use tracing::info;

use crate::error::Result;

#[derive(Parser, Clone, Debug, Default)]
pub struct Generate {
    /// Rows per fact file
    #[arg(long)]
    pub rows: Option<usize>,
    /// Generation threads
    #[arg(long)]
    pub workers: Option<usize>,
}

impl Generate {
    pub fn apply(&self, generation: &mut Generation) -> Result<()> {
        if let Some(rows) = self.rows {
            generation.rows_per_file = rows;
        }
        if let Some(workers) = self.workers {
            generation.workers = workers;
        }

        Ok(generation.validate()?)
    }
}

pub fn run(cfg: &Config) -> Result<()> {
    let layout = Layout::new(&cfg.volume.path);
    let generation = &cfg.generation;
    info!("generating raw files into {}", layout.root().display());
    debug!(
        "{} partner(s), months {:?} of {}, {} rows per file, {} worker(s)",
        cfg.universe.partners.len(),
        generation.months,
        generation.year,
        generation.rows_per_file,
        generation.workers
    );

    let files = cells(&cfg.universe, generation).len();
    let pb = ProgressBar::new(files as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} files ({eta})",
        )?
        .with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
        })
        .progress_chars("#>-"),
    );

    let start = Instant::now();
    let reports = generate_facts(&layout, &cfg.universe, generation, |_| pb.inc(1))?;
    pb.finish_and_clear();

    let rows: usize = reports.iter().map(|r| r.rows).sum();
    let bytes: u64 = reports.iter().map(|r| r.bytes).sum();
    info!(
        "{} fact files, {rows} rows, {} in {}",
        reports.len(),
        ByteSize::b(bytes),
        humantime::format_duration(start.elapsed())
    );

    for dim in generate_dimensions(&layout, &cfg.universe, generation)? {
        info!("{}: {} rows", dim.path.display(), dim.rows);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let mut generation = Generation::default();
        Generate {
            rows: Some(500),
            workers: None,
        }
        .apply(&mut generation)
        .unwrap();
        assert_eq!(generation.rows_per_file, 500);
        assert_eq!(generation.workers, 1);
    }

    #[test]
    fn test_apply_rejects_invalid() {
        let mut generation = Generation::default();
        let res = Generate {
            rows: Some(0),
            workers: None,
        }
        .apply(&mut generation);
        assert!(res.is_err());
    }
}
