use chrono::NaiveDate;
use common::config::Market;
use common::config::Universe;
use common::types::DIM_FACILITIES;
use common::UNKNOWN;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

use crate::catalog::EXPERIENCE_TYPES;
use crate::catalog::FACILITY_CAPACITY;
use crate::catalog::FACILITY_OPENED_MONTHS;
use crate::catalog::FACILITY_OPENED_YEARS;
use crate::choice::Choice;
use crate::error::DatagenError;
use crate::error::Result;
use crate::seed::rng_for;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub facility_id: String,
    pub facility_name: String,
    pub partner_name: String,
    pub market: String,
    pub country: String,
    pub capacity: u32,
    pub opened_date: NaiveDate,
    pub experience_type: String,
}

/// First market with a location fragment contained in the facility id.
pub fn market_for(facility_id: &str, markets: &[Market]) -> String {
    markets
        .iter()
        .find(|m| m.locations.iter().any(|l| facility_id.contains(l.as_str())))
        .map(|m| m.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Token between the first and the second underscore.
pub fn country_for(facility_id: &str) -> String {
    match facility_id.split('_').nth(1) {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

pub fn facilities(universe: &Universe) -> Result<Vec<Facility>> {
    let mut rng = rng_for(DIM_FACILITIES);
    let experience_types = Choice::try_new_uniform(EXPERIENCE_TYPES.iter().copied())?;

    let mut out = Vec::new();
    for partner in &universe.partners {
        for facility in &partner.facilities {
            let year = 2000 + rng.gen_range(FACILITY_OPENED_YEARS.0..=FACILITY_OPENED_YEARS.1);
            let month = rng.gen_range(FACILITY_OPENED_MONTHS.0..=FACILITY_OPENED_MONTHS.1);
            let opened_date = NaiveDate::from_ymd_opt(year as i32, month, 1).ok_or_else(|| {
                DatagenError::Internal(format!("invalid opening date {year}-{month}"))
            })?;

            out.push(Facility {
                facility_id: facility.clone(),
                facility_name: facility.replace('_', " "),
                partner_name: partner.name.clone(),
                market: market_for(facility, &universe.markets),
                country: country_for(facility),
                capacity: rng.gen_range(FACILITY_CAPACITY.0..=FACILITY_CAPACITY.1),
                opened_date,
                experience_type: experience_types.sample(&mut rng).to_string(),
            });
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    #[test]
    fn test_market_for() {
        let universe = Universe::default();
        let m = |f: &str| market_for(f, &universe.markets);
        assert_eq!(m("DW_Orlando"), "North_America");
        assert_eq!(m("KV_Montreal"), "North_America");
        assert_eq!(m("TL_Berlin"), "Europe");
        assert_eq!(m("DW_Tokyo"), "Asia_Pacific");
        assert_eq!(m("PN_Brisbane"), "Asia_Pacific");
        assert_eq!(m("XX_SaoPaulo"), "Latin_America");
        assert_eq!(m("XX_Atlantis"), UNKNOWN);
    }

    #[test]
    fn test_country_for() {
        assert_eq!(country_for("DW_Orlando"), "Orlando");
        assert_eq!(country_for("DW_New_York"), "New");
        assert_eq!(country_for("Orlando"), UNKNOWN);
        assert_eq!(country_for("DW_"), UNKNOWN);
    }

    #[test]
    fn test_facilities() {
        let universe = Universe::default();
        let facilities = facilities(&universe).unwrap();
        assert_eq!(facilities.len(), 15);

        let markets = universe.market_names();
        for f in &facilities {
            assert!(markets.contains(&f.market), "{}", f.market);
            assert_eq!(f.market, market_for(&f.facility_id, &universe.markets));
            assert!((5_000..=25_000).contains(&f.capacity));
            assert!(f.opened_date >= NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
            assert!(f.opened_date <= NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());
            assert!((1..=9).contains(&f.opened_date.month()));
            assert!(EXPERIENCE_TYPES.contains(&f.experience_type.as_str()));
            let partner = universe.partner(&f.partner_name).unwrap();
            assert!(partner.facilities.contains(&f.facility_id));
        }

        let orlando = &facilities[0];
        assert_eq!(orlando.facility_name, "DW Orlando");
        assert_eq!(orlando.partner_name, "DreamWorld_Parks");
        assert_eq!(orlando.country, "Orlando");
    }
}
