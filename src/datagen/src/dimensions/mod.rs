use std::fs;
use std::path::PathBuf;

use common::config::Generation;
use common::config::Universe;
use common::layout::Layout;
use common::types::DIM_CAMPAIGNS;
use common::types::DIM_CUSTOMERS;
use common::types::DIM_DATES;
use common::types::DIM_FACILITIES;
use common::types::DIM_PRODUCTS;
use tracing::debug;

use crate::error::Result;
use crate::facts::write_csv;

pub mod campaigns;
pub mod customers;
pub mod dates;
pub mod facilities;
pub mod products;

#[derive(Debug, Clone)]
pub struct DimensionReport {
    pub name: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

/// Replaces `dimensions/` with the five reference tables.
pub fn generate_dimensions(
    layout: &Layout,
    universe: &Universe,
    generation: &Generation,
) -> Result<Vec<DimensionReport>> {
    let dir = layout.dimensions_dir();
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir)?;

    let mut reports = Vec::with_capacity(5);
    let mut write = |name: &'static str, rows: Result<usize>| -> Result<()> {
        let rows = rows?;
        debug!("{name}: {rows} rows");
        reports.push(DimensionReport {
            name,
            path: layout.dimension_file(name),
            rows,
        });
        Ok(())
    };

    write(
        DIM_CAMPAIGNS,
        write_csv(
            &layout.dimension_file(DIM_CAMPAIGNS),
            campaigns::campaigns(generation)?,
        ),
    )?;
    write(
        DIM_PRODUCTS,
        write_csv(&layout.dimension_file(DIM_PRODUCTS), products::products()?),
    )?;
    write(
        DIM_FACILITIES,
        write_csv(
            &layout.dimension_file(DIM_FACILITIES),
            facilities::facilities(universe)?,
        ),
    )?;
    write(
        DIM_CUSTOMERS,
        write_csv(
            &layout.dimension_file(DIM_CUSTOMERS),
            customers::customers(universe, generation)?,
        ),
    )?;
    write(
        DIM_DATES,
        write_csv(
            &layout.dimension_file(DIM_DATES),
            dates::calendar(generation.start_date, generation.end_date),
        ),
    )?;

    Ok(reports)
}
