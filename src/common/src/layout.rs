use std::path::Path;
use std::path::PathBuf;

use crate::types::SalesKind;
use crate::types::DIR_DIMENSIONS;
use crate::types::DIR_DOCUMENTATION;
use crate::types::DIR_PARTNERS;

/// File layout of the raw volume:
///
/// ```text
/// <root>/partners/<partner>/<kind>_sales_<MM>_<YYYY>.csv
/// <root>/dimensions/<dim>.csv
/// <root>/documentation/<doc>.pdf
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn partners_dir(&self) -> PathBuf {
        self.root.join(DIR_PARTNERS)
    }

    pub fn partner_dir(&self, partner: &str) -> PathBuf {
        self.partners_dir().join(partner)
    }

    pub fn sales_file(&self, partner: &str, kind: SalesKind, year: i32, month: u32) -> PathBuf {
        self.partner_dir(partner)
            .join(format!("{kind}_sales_{month:02}_{year}.csv"))
    }

    /// Wildcard over every partner and month of one kind.
    pub fn sales_pattern(&self, kind: SalesKind) -> PathBuf {
        self.partners_dir()
            .join("*")
            .join(format!("{kind}_sales_*.csv"))
    }

    pub fn dimensions_dir(&self) -> PathBuf {
        self.root.join(DIR_DIMENSIONS)
    }

    pub fn dimension_file(&self, name: &str) -> PathBuf {
        self.dimensions_dir().join(format!("{name}.csv"))
    }

    pub fn documentation_dir(&self) -> PathBuf {
        self.root.join(DIR_DOCUMENTATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let layout = Layout::new("/vol");
        assert_eq!(
            layout.sales_file("DreamWorld_Parks", SalesKind::Fnb, 2025, 7),
            PathBuf::from("/vol/partners/DreamWorld_Parks/fnb_sales_07_2025.csv")
        );
        assert_eq!(
            layout.sales_pattern(SalesKind::Ticket),
            PathBuf::from("/vol/partners/*/ticket_sales_*.csv")
        );
        assert_eq!(
            layout.dimension_file("dim_dates"),
            PathBuf::from("/vol/dimensions/dim_dates.csv")
        );
    }
}
