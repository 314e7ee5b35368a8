use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::thread;

use bytesize::ByteSize;
use chrono::Duration;
use chrono::NaiveDate;
use common::config::Generation;
use common::config::Partner;
use common::config::Universe;
use common::layout::Layout;
use common::SalesKind;
use enum_iterator::all;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::catalog::DAYS_PER_MONTH;
use crate::choice::Choice;
use crate::error::DatagenError;
use crate::error::Result;
use crate::facts::fnb::FnbSampler;
use crate::facts::retail::RetailSampler;
use crate::facts::ticket::TicketSampler;
use crate::seed::fact_key;
use crate::seed::rng_for;

pub mod fnb;
pub mod retail;
pub mod ticket;

/// One output file: a (kind, partner, month) triple.
#[derive(Debug, Clone)]
pub struct Cell<'a> {
    pub kind: SalesKind,
    pub partner: &'a Partner,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone)]
pub struct CellReport {
    pub kind: SalesKind,
    pub partner: String,
    pub month: u32,
    pub path: PathBuf,
    pub rows: usize,
    pub bytes: u64,
}

/// Draws shared by all transaction kinds of one cell.
pub struct Base<'a> {
    id_prefix: String,
    dates: Choice<NaiveDate>,
    facilities: Choice<&'a str>,
    ips: Choice<&'a str>,
    customer_universe: u32,
}

impl<'a> Base<'a> {
    pub fn try_new(
        universe: &'a Universe,
        generation: &Generation,
        partner: &'a Partner,
        kind: SalesKind,
        month: u32,
    ) -> Result<Self> {
        Ok(Self {
            id_prefix: format!(
                "{}_{}_{}",
                kind.id_prefix(),
                partner_code(&partner.name),
                month
            ),
            dates: Choice::try_new_uniform(month_dates(generation.year, month)?)?,
            facilities: Choice::try_new_uniform(partner.facilities.iter().map(|f| f.as_str()))?,
            ips: Choice::try_new_uniform(universe.ips.iter().map(|ip| ip.as_str()))?,
            customer_universe: generation.customer_universe,
        })
    }

    pub fn transaction_id(&self, seq: usize) -> String {
        format!("{}_{:06}", self.id_prefix, seq)
    }

    pub fn date<R: Rng>(&self, rng: &mut R) -> NaiveDate {
        *self.dates.sample(rng)
    }

    pub fn facility<R: Rng>(&self, rng: &mut R) -> String {
        self.facilities.sample(rng).to_string()
    }

    pub fn ip<R: Rng>(&self, rng: &mut R) -> String {
        self.ips.sample(rng).to_string()
    }

    pub fn customer_id<R: Rng>(&self, rng: &mut R) -> String {
        format!("CUST_{:06}", rng.gen_range(1..self.customer_universe))
    }
}

pub trait FactSampler: Sized {
    const KIND: SalesKind;
    type Record: Serialize;

    fn try_new() -> Result<Self>;

    fn sample<R: Rng>(&self, rng: &mut R, base: &Base<'_>, seq: usize) -> Self::Record;
}

/// Lazily generated transactions of one cell.
pub struct Rows<'a, S: FactSampler> {
    sampler: S,
    base: Base<'a>,
    rng: StdRng,
    seq: usize,
    rows: usize,
}

impl<'a, S: FactSampler> Iterator for Rows<'a, S> {
    type Item = S::Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seq >= self.rows {
            return None;
        }
        let rec = self.sampler.sample(&mut self.rng, &self.base, self.seq);
        self.seq += 1;

        Some(rec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.rows - self.seq;
        (left, Some(left))
    }
}

/// Seeded from the (kind, partner, month) key, so the same cell always yields the same rows.
pub fn rows<'a, S: FactSampler>(
    universe: &'a Universe,
    generation: &Generation,
    partner: &'a Partner,
    month: u32,
) -> Result<Rows<'a, S>> {
    Ok(Rows {
        sampler: S::try_new()?,
        base: Base::try_new(universe, generation, partner, S::KIND, month)?,
        rng: rng_for(&fact_key(S::KIND, &partner.name, month)),
        seq: 0,
        rows: generation.rows_per_file,
    })
}

/// First three characters of the partner name, used in transaction ids.
pub fn partner_code(partner: &str) -> String {
    partner.chars().take(3).collect()
}

/// The first 28 days of the month.
pub fn month_dates(year: i32, month: u32) -> Result<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DatagenError::Internal(format!("invalid month {year}-{month}")))?;

    Ok((0..DAYS_PER_MONTH)
        .map(|day| first + Duration::days(day as i64))
        .collect())
}

pub(crate) fn write_csv<T, I>(path: &Path, records: I) -> Result<usize>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut wtr = csv::Writer::from_path(path)?;
    let mut rows = 0;
    for rec in records {
        wtr.serialize(rec)?;
        rows += 1;
    }
    wtr.flush()?;

    Ok(rows)
}

pub fn write_cell(
    layout: &Layout,
    universe: &Universe,
    generation: &Generation,
    cell: &Cell,
) -> Result<CellReport> {
    let path = layout.sales_file(&cell.partner.name, cell.kind, cell.year, cell.month);
    let rows = match cell.kind {
        SalesKind::Ticket => write_csv(
            &path,
            rows::<TicketSampler>(universe, generation, cell.partner, cell.month)?,
        )?,
        SalesKind::Fnb => write_csv(
            &path,
            rows::<FnbSampler>(universe, generation, cell.partner, cell.month)?,
        )?,
        SalesKind::Retail => write_csv(
            &path,
            rows::<RetailSampler>(universe, generation, cell.partner, cell.month)?,
        )?,
    };
    let bytes = fs::metadata(&path)?.len();
    debug!(
        "{} {} month {}: {rows} rows, {}",
        cell.partner.name,
        cell.kind,
        cell.month,
        ByteSize::b(bytes)
    );

    Ok(CellReport {
        kind: cell.kind,
        partner: cell.partner.name.clone(),
        month: cell.month,
        path,
        rows,
        bytes,
    })
}

pub fn cells<'a>(universe: &'a Universe, generation: &Generation) -> Vec<Cell<'a>> {
    let mut cells = Vec::new();
    for partner in &universe.partners {
        for month in &generation.months {
            for kind in all::<SalesKind>() {
                cells.push(Cell {
                    kind,
                    partner,
                    year: generation.year,
                    month: *month,
                });
            }
        }
    }

    cells
}

/// Replaces everything under `partners/` with freshly generated files. Cells are spread over
/// `generation.workers` threads; each cell owns its output path.
pub fn generate_facts<F>(
    layout: &Layout,
    universe: &Universe,
    generation: &Generation,
    progress: F,
) -> Result<Vec<CellReport>>
where
    F: Fn(&CellReport) + Sync,
{
    // duplicate months or partners would map two cells onto one output path
    universe.validate()?;
    generation.validate()?;

    let partners_dir = layout.partners_dir();
    if partners_dir.exists() {
        fs::remove_dir_all(&partners_dir)?;
    }
    for partner in &universe.partners {
        fs::create_dir_all(layout.partner_dir(&partner.name))?;
    }

    let cells = cells(universe, generation);
    let workers = generation.workers.clamp(1, cells.len().max(1));
    debug!("{} cells over {workers} worker(s)", cells.len());

    let (tx, rx) = crossbeam_channel::unbounded();
    for cell in cells {
        tx.send(cell)
            .map_err(|err| DatagenError::Internal(err.to_string()))?;
    }
    drop(tx);

    let progress = &progress;
    let mut reports = thread::scope(|s| {
        let handles = (0..workers)
            .map(|_| {
                let rx = rx.clone();
                s.spawn(move || -> Result<Vec<CellReport>> {
                    let mut done = Vec::new();
                    for cell in rx.iter() {
                        let report = write_cell(layout, universe, generation, &cell)?;
                        progress(&report);
                        done.push(report);
                    }
                    Ok(done)
                })
            })
            .collect::<Vec<_>>();

        let mut reports = Vec::new();
        for handle in handles {
            let done = handle
                .join()
                .map_err(|_| DatagenError::Internal("generation worker panicked".to_string()))??;
            reports.extend(done);
        }

        Ok::<_, DatagenError>(reports)
    })?;

    reports.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_dates() {
        let dates = month_dates(2025, 7).unwrap();
        assert_eq!(dates.len(), 28);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(dates[27], NaiveDate::from_ymd_opt(2025, 7, 28).unwrap());

        let feb = month_dates(2025, 2).unwrap();
        assert_eq!(feb[27], NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());

        assert!(month_dates(2025, 13).is_err());
    }

    #[test]
    fn test_partner_code() {
        assert_eq!(partner_code("DreamWorld_Parks"), "Dre");
        assert_eq!(partner_code("KV"), "KV");
    }

    #[test]
    fn test_cells_cover_every_triple() {
        let universe = Universe::default();
        let generation = Generation::default();
        let cells = cells(&universe, &generation);
        assert_eq!(cells.len(), 5 * 6 * 3);
    }
}
