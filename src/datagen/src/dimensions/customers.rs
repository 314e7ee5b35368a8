use chrono::Duration;
use chrono::NaiveDate;
use common::config::Generation;
use common::config::Universe;
use common::types::DIM_CUSTOMERS;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

use crate::catalog::CUSTOMER_AGE_GROUPS;
use crate::catalog::CUSTOMER_FAMILY_SIZE;
use crate::catalog::CUSTOMER_LOYALTY_TIERS;
use crate::catalog::CUSTOMER_SEGMENTS;
use crate::catalog::CUSTOMER_SIGNUP_DAYS_BEFORE;
use crate::choice::Choice;
use crate::error::Result;
use crate::seed::rng_for;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub customer_segment: String,
    pub age_group: String,
    pub family_size: u32,
    pub home_market: String,
    pub signup_date: NaiveDate,
    pub loyalty_tier: String,
}

/// Customer attributes are independent uniform draws. Only the first `customers` ids exist
/// here, so most customer ids on transactions have no dimension row.
pub fn customers(universe: &Universe, generation: &Generation) -> Result<Vec<Customer>> {
    let mut rng = rng_for(DIM_CUSTOMERS);
    let segments = Choice::try_new_uniform(CUSTOMER_SEGMENTS.iter().copied())?;
    let age_groups = Choice::try_new_uniform(CUSTOMER_AGE_GROUPS.iter().copied())?;
    let markets = Choice::try_new_uniform(universe.market_names())?;
    let tiers = Choice::try_new_uniform(CUSTOMER_LOYALTY_TIERS.iter().copied())?;

    Ok((0..generation.customers)
        .map(|i| {
            let days_before =
                rng.gen_range(CUSTOMER_SIGNUP_DAYS_BEFORE.0..=CUSTOMER_SIGNUP_DAYS_BEFORE.1);
            Customer {
                customer_id: format!("CUST_{i:06}"),
                customer_segment: segments.sample(&mut rng).to_string(),
                age_group: age_groups.sample(&mut rng).to_string(),
                family_size: rng.gen_range(CUSTOMER_FAMILY_SIZE.0..=CUSTOMER_FAMILY_SIZE.1),
                home_market: markets.sample(&mut rng).clone(),
                signup_date: generation.start_date - Duration::days(days_before),
                loyalty_tier: tiers.sample(&mut rng).to_string(),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customers() {
        let generation = Generation {
            customers: 2_000,
            ..Generation::default()
        };
        let customers = customers(&Universe::default(), &generation).unwrap();
        assert_eq!(customers.len(), 2_000);
        assert_eq!(customers[0].customer_id, "CUST_000000");

        let earliest = generation.start_date - Duration::days(730);
        let latest = generation.start_date - Duration::days(30);
        for c in &customers {
            assert!((1..=6).contains(&c.family_size));
            assert!(c.signup_date >= earliest && c.signup_date <= latest);
        }
        for size in 1..=6 {
            assert!(customers.iter().any(|c| c.family_size == size), "{size}");
        }
    }
}
