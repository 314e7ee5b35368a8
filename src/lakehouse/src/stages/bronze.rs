use common::layout::Layout;
use common::types::DIM_CAMPAIGNS;
use common::types::DIM_CUSTOMERS;
use common::types::DIM_DATES;
use common::types::DIM_FACILITIES;
use common::types::DIM_PRODUCTS;
use common::types::TABLE_BRONZE_DIM_CAMPAIGNS;
use common::types::TABLE_BRONZE_DIM_CUSTOMERS;
use common::types::TABLE_BRONZE_DIM_DATES;
use common::types::TABLE_BRONZE_DIM_FACILITIES;
use common::types::TABLE_BRONZE_DIM_PRODUCTS;
use common::types::TABLE_BRONZE_FNB_SALES;
use common::types::TABLE_BRONZE_RETAIL_SALES;
use common::types::TABLE_BRONZE_TICKET_SALES;
use common::SalesKind;

use crate::stages::Layer;
use crate::stages::Stage;
use crate::stages::Step;

/// Raw files as they are, facts stamped with provenance.
pub fn stage(layout: &Layout) -> Stage {
    let facts = [
        (TABLE_BRONZE_TICKET_SALES, SalesKind::Ticket),
        (TABLE_BRONZE_FNB_SALES, SalesKind::Fnb),
        (TABLE_BRONZE_RETAIL_SALES, SalesKind::Retail),
    ];
    let dims = [
        (TABLE_BRONZE_DIM_FACILITIES, DIM_FACILITIES),
        (TABLE_BRONZE_DIM_CAMPAIGNS, DIM_CAMPAIGNS),
        (TABLE_BRONZE_DIM_CUSTOMERS, DIM_CUSTOMERS),
        (TABLE_BRONZE_DIM_DATES, DIM_DATES),
        (TABLE_BRONZE_DIM_PRODUCTS, DIM_PRODUCTS),
    ];

    let mut steps = Vec::with_capacity(facts.len() + dims.len());
    for (table, kind) in facts {
        steps.push(Step::ReadFiles {
            table,
            pattern: layout.sales_pattern(kind),
            provenance: true,
        });
    }
    for (table, dim) in dims {
        steps.push(Step::ReadFiles {
            table,
            pattern: layout.dimension_file(dim),
            provenance: false,
        });
    }

    Stage {
        layer: Layer::Bronze,
        steps,
    }
}
