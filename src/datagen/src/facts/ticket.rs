use chrono::NaiveDate;
use common::SalesKind;
use common::DECIMAL_SCALE;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::catalog::TICKET_CHANNELS;
use crate::catalog::TICKET_DISCOUNTS;
use crate::catalog::TICKET_PRICE_CENTS;
use crate::catalog::TICKET_QUANTITY;
use crate::catalog::TICKET_REPEAT_VISITOR_P;
use crate::catalog::TICKET_TYPES;
use crate::catalog::TICKET_VISIT_HOURS;
use crate::choice::Choice;
use crate::error::Result;
use crate::facts::Base;
use crate::facts::FactSampler;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketSale {
    pub transaction_id: String,
    pub transaction_date: NaiveDate,
    pub facility_id: String,
    pub ip_name: String,
    pub ticket_type: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub discount_pct: u32,
    pub customer_id: String,
    pub is_repeat_visitor: bool,
    pub visit_hour: u32,
    pub channel: String,
    pub total_amount: Decimal,
}

/// quantity * unit_price * (1 - discount/100), rounded half-to-even to cents.
pub fn ticket_total(quantity: u32, unit_price: Decimal, discount_pct: u32) -> Decimal {
    let factor = Decimal::ONE - Decimal::from(discount_pct) / Decimal::ONE_HUNDRED;
    (Decimal::from(quantity) * unit_price * factor).round_dp(DECIMAL_SCALE)
}

pub struct TicketSampler {
    ticket_types: Choice<&'static str>,
    discounts: Choice<u32>,
    channels: Choice<&'static str>,
}

impl FactSampler for TicketSampler {
    const KIND: SalesKind = SalesKind::Ticket;
    type Record = TicketSale;

    fn try_new() -> Result<Self> {
        Ok(Self {
            ticket_types: Choice::try_new_weighted(TICKET_TYPES.iter().copied())?,
            discounts: Choice::try_new_weighted(TICKET_DISCOUNTS.iter().copied())?,
            channels: Choice::try_new_weighted(TICKET_CHANNELS.iter().copied())?,
        })
    }

    fn sample<R: Rng>(&self, rng: &mut R, base: &Base<'_>, seq: usize) -> TicketSale {
        let quantity = rng.gen_range(TICKET_QUANTITY.0..=TICKET_QUANTITY.1);
        let unit_price = Decimal::new(
            rng.gen_range(TICKET_PRICE_CENTS.0..=TICKET_PRICE_CENTS.1),
            DECIMAL_SCALE,
        );
        let discount_pct = *self.discounts.sample(rng);

        TicketSale {
            transaction_id: base.transaction_id(seq),
            transaction_date: base.date(rng),
            facility_id: base.facility(rng),
            ip_name: base.ip(rng),
            ticket_type: self.ticket_types.sample(rng).to_string(),
            quantity,
            unit_price,
            discount_pct,
            customer_id: base.customer_id(rng),
            is_repeat_visitor: rng.gen_bool(TICKET_REPEAT_VISITOR_P),
            visit_hour: rng.gen_range(TICKET_VISIT_HOURS.0..=TICKET_VISIT_HOURS.1),
            channel: self.channels.sample(rng).to_string(),
            total_amount: ticket_total(quantity, unit_price, discount_pct),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_ticket_total() {
        let price = Decimal::from_str("99.99").unwrap();
        assert_eq!(ticket_total(3, price, 0), Decimal::from_str("299.97").unwrap());
        assert_eq!(ticket_total(1, price, 25), Decimal::from_str("74.99").unwrap());
        // 2 * 25.25 * 0.95 = 47.975 -> half to even
        let price = Decimal::from_str("25.25").unwrap();
        assert_eq!(ticket_total(2, price, 5), Decimal::from_str("47.98").unwrap());
        // 1 * 26.05 * 0.9 = 23.445
        let price = Decimal::from_str("26.05").unwrap();
        assert_eq!(ticket_total(1, price, 10), Decimal::from_str("23.44").unwrap());
    }
}
