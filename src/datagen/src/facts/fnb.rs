use chrono::NaiveDate;
use common::SalesKind;
use common::DECIMAL_SCALE;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::catalog::FNB_CATEGORIES;
use crate::catalog::FNB_HOURS;
use crate::catalog::FNB_ITEMS;
use crate::catalog::FNB_OUTLETS;
use crate::catalog::FNB_PAYMENT_METHODS;
use crate::catalog::FNB_QUANTITY;
use crate::choice::Choice;
use crate::error::Result;
use crate::facts::Base;
use crate::facts::FactSampler;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FnbSale {
    pub transaction_id: String,
    pub transaction_date: NaiveDate,
    pub facility_id: String,
    pub item_name: String,
    pub item_category: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub customer_id: String,
    pub outlet_id: String,
    pub payment_method: String,
    pub transaction_hour: u32,
    pub total_amount: Decimal,
}

pub fn line_total(quantity: u32, unit_price: Decimal) -> Decimal {
    (Decimal::from(quantity) * unit_price).round_dp(DECIMAL_SCALE)
}

pub struct FnbSampler {
    items: Choice<(&'static str, i64)>,
    categories: Choice<&'static str>,
    payment_methods: Choice<&'static str>,
}

impl FactSampler for FnbSampler {
    const KIND: SalesKind = SalesKind::Fnb;
    type Record = FnbSale;

    fn try_new() -> Result<Self> {
        Ok(Self {
            items: Choice::try_new_uniform(FNB_ITEMS.iter().copied())?,
            categories: Choice::try_new_weighted(FNB_CATEGORIES.iter().copied())?,
            payment_methods: Choice::try_new_weighted(FNB_PAYMENT_METHODS.iter().copied())?,
        })
    }

    fn sample<R: Rng>(&self, rng: &mut R, base: &Base<'_>, seq: usize) -> FnbSale {
        let (item_name, cents) = *self.items.sample(rng);
        let unit_price = Decimal::new(cents, DECIMAL_SCALE);
        let quantity = rng.gen_range(FNB_QUANTITY.0..=FNB_QUANTITY.1);

        FnbSale {
            transaction_id: base.transaction_id(seq),
            transaction_date: base.date(rng),
            facility_id: base.facility(rng),
            item_name: item_name.to_string(),
            item_category: self.categories.sample(rng).to_string(),
            unit_price,
            quantity,
            customer_id: base.customer_id(rng),
            outlet_id: format!("OUTLET_{:03}", rng.gen_range(FNB_OUTLETS.0..=FNB_OUTLETS.1)),
            payment_method: self.payment_methods.sample(rng).to_string(),
            transaction_hour: rng.gen_range(FNB_HOURS.0..=FNB_HOURS.1),
            total_amount: line_total(quantity, unit_price),
        }
    }
}
