use chrono::Duration;
use chrono::NaiveDate;
use common::config::Generation;
use common::types::DIM_CAMPAIGNS;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

use crate::catalog::CAMPAIGN_BUDGET;
use crate::catalog::CAMPAIGN_CHANNELS;
use crate::catalog::CAMPAIGN_DAYS;
use crate::catalog::CAMPAIGN_DEMOGRAPHICS;
use crate::catalog::CAMPAIGN_NAMES;
use crate::choice::Choice;
use crate::error::Result;
use crate::seed::rng_for;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub campaign_id: String,
    pub campaign_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget_usd: u32,
    pub channel: String,
    pub target_demographic: String,
    pub is_active: bool,
}

/// Back-to-back 30 day campaigns from the generation start; the latest
/// `active_campaigns` of them are active.
pub fn campaigns(generation: &Generation) -> Result<Vec<Campaign>> {
    let mut rng = rng_for(DIM_CAMPAIGNS);
    let channels = Choice::try_new_uniform(CAMPAIGN_CHANNELS.iter().copied())?;
    let demographics = Choice::try_new_uniform(CAMPAIGN_DEMOGRAPHICS.iter().copied())?;
    let first_active = CAMPAIGN_NAMES
        .len()
        .saturating_sub(generation.active_campaigns);

    Ok(CAMPAIGN_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let n = i as i64;
            Campaign {
                campaign_id: format!("CAMP_{:03}", i + 1),
                campaign_name: name.to_string(),
                start_date: generation.start_date + Duration::days(n * CAMPAIGN_DAYS),
                end_date: generation.start_date
                    + Duration::days((n + 1) * CAMPAIGN_DAYS - 1),
                budget_usd: rng.gen_range(CAMPAIGN_BUDGET.0..=CAMPAIGN_BUDGET.1),
                channel: channels.sample(&mut rng).to_string(),
                target_demographic: demographics.sample(&mut rng).to_string(),
                is_active: i >= first_active,
            }
        })
        .collect())
}
