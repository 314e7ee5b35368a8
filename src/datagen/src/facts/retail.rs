use chrono::NaiveDate;
use common::SalesKind;
use common::DECIMAL_SCALE;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::catalog::RETAIL_CATEGORIES;
use crate::catalog::RETAIL_ITEMS;
use crate::catalog::RETAIL_ONLINE_P;
use crate::catalog::RETAIL_QUANTITY;
use crate::catalog::RETAIL_STORES;
use crate::choice::Choice;
use crate::error::Result;
use crate::facts::fnb::line_total;
use crate::facts::Base;
use crate::facts::FactSampler;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailSale {
    pub transaction_id: String,
    pub transaction_date: NaiveDate,
    pub facility_id: String,
    pub ip_name: String,
    pub product_name: String,
    pub product_category: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub customer_id: String,
    pub store_id: String,
    pub is_online: bool,
    pub total_amount: Decimal,
}

pub struct RetailSampler {
    items: Choice<(&'static str, i64)>,
    categories: Choice<&'static str>,
}

impl FactSampler for RetailSampler {
    const KIND: SalesKind = SalesKind::Retail;
    type Record = RetailSale;

    fn try_new() -> Result<Self> {
        Ok(Self {
            items: Choice::try_new_uniform(RETAIL_ITEMS.iter().copied())?,
            categories: Choice::try_new_uniform(RETAIL_CATEGORIES.iter().copied())?,
        })
    }

    fn sample<R: Rng>(&self, rng: &mut R, base: &Base<'_>, seq: usize) -> RetailSale {
        let (product_name, cents) = *self.items.sample(rng);
        let unit_price = Decimal::new(cents, DECIMAL_SCALE);
        let quantity = rng.gen_range(RETAIL_QUANTITY.0..=RETAIL_QUANTITY.1);

        RetailSale {
            transaction_id: base.transaction_id(seq),
            transaction_date: base.date(rng),
            facility_id: base.facility(rng),
            ip_name: base.ip(rng),
            product_name: product_name.to_string(),
            product_category: self.categories.sample(rng).to_string(),
            unit_price,
            quantity,
            customer_id: base.customer_id(rng),
            store_id: format!("STORE_{:03}", rng.gen_range(RETAIL_STORES.0..=RETAIL_STORES.1)),
            is_online: rng.gen_bool(RETAIL_ONLINE_P),
            total_amount: line_total(quantity, unit_price),
        }
    }
}
