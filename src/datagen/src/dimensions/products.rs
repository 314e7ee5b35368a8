use chrono::NaiveDate;
use common::types::DIM_PRODUCTS;
use common::DECIMAL_SCALE;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::catalog::PRODUCTS;
use crate::catalog::PRODUCT_BASE_PRICE_CENTS;
use crate::catalog::PRODUCT_COST_CENTS;
use crate::catalog::PRODUCT_LAUNCH_DATE;
use crate::catalog::PRODUCT_SUPPLIERS;
use crate::choice::Choice;
use crate::error::DatagenError;
use crate::error::Result;
use crate::seed::rng_for;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub ip_name: String,
    pub base_price: Decimal,
    pub cost: Decimal,
    pub supplier: String,
    pub launch_date: NaiveDate,
}

pub fn products() -> Result<Vec<Product>> {
    let mut rng = rng_for(DIM_PRODUCTS);
    let suppliers = Choice::try_new_uniform(PRODUCT_SUPPLIERS.iter().copied())?;
    let (y, m, d) = PRODUCT_LAUNCH_DATE;
    let launch_date = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| DatagenError::Internal(format!("invalid launch date {y}-{m}-{d}")))?;

    Ok(PRODUCTS
        .iter()
        .enumerate()
        .map(|(i, (name, category, ip))| Product {
            product_id: format!("PROD_{:04}", i + 1),
            product_name: name.to_string(),
            category: category.to_string(),
            ip_name: ip.to_string(),
            base_price: Decimal::new(
                rng.gen_range(PRODUCT_BASE_PRICE_CENTS.0..=PRODUCT_BASE_PRICE_CENTS.1),
                DECIMAL_SCALE,
            ),
            cost: Decimal::new(
                rng.gen_range(PRODUCT_COST_CENTS.0..=PRODUCT_COST_CENTS.1),
                DECIMAL_SCALE,
            ),
            supplier: suppliers.sample(&mut rng).to_string(),
            launch_date,
        })
        .collect())
}
