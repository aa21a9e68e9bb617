//! Homepage section identifiers and their fixed orderings.

style_axis! {
    /// A homepage content section.
    Section: "section" {
        HowItWorks => "howItWorks",
        Features => "features",
        Programs => "programs",
        States => "states",
        Cities => "cities",
        Cta => "cta",
    }
}

/// One ordering of all six homepage sections.
pub type SectionOrder = [Section; 6];

use Section::{Cities, Cta, Features, HowItWorks, Programs, States};

/// The section-order catalog. Each entry is a permutation of every section.
pub const SECTION_ORDERS: &[SectionOrder] = &[
    [HowItWorks, Features, Programs, States, Cities, Cta],
    [Features, HowItWorks, Programs, Cities, States, Cta],
    [Programs, Features, HowItWorks, States, Cta, Cities],
    [HowItWorks, Programs, Features, Cta, States, Cities],
    [Features, Programs, HowItWorks, Cities, Cta, States],
    [Programs, HowItWorks, Features, States, Cities, Cta],
    [Cta, Features, HowItWorks, Programs, States, Cities],
    [Features, Cta, HowItWorks, Programs, Cities, States],
];

const _: () = assert!(!SECTION_ORDERS.is_empty());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StyleOption;

    #[test]
    fn every_order_is_a_permutation() {
        for order in SECTION_ORDERS {
            let mut sorted = *order;
            sorted.sort();
            assert_eq!(sorted.as_slice(), Section::ALL);
        }
    }

    #[test]
    fn orders_are_distinct() {
        for (i, a) in SECTION_ORDERS.iter().enumerate() {
            for b in &SECTION_ORDERS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
