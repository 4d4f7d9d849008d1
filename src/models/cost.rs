use rust_decimal::Decimal;

/// Unit the cost estimates are denominated in.
pub const COST_UNIT: &str = "credits";

/// One duration bucket of the provider's credit pricing.
#[derive(Debug, Clone)]
pub struct CostEntry {
    pub duration_secs: u32,
    pub credits: Decimal,
}

/// Duration → credit-cost table.
///
/// The provider prices by clip length. Known buckets live in `entries`;
/// any duration without a bucket falls back to `default_credits`. The
/// table is data, not code: new buckets are rows, not branches.
#[derive(Debug, Clone)]
pub struct CostTable {
    entries: Vec<CostEntry>,
    default_credits: Decimal,
}

impl CostTable {
    pub fn new(entries: Vec<CostEntry>, default_credits: Decimal) -> Self {
        Self {
            entries,
            default_credits,
        }
    }

    pub fn estimate(&self, duration_secs: u32) -> Decimal {
        self.entries
            .iter()
            .find(|e| e.duration_secs == duration_secs)
            .map(|e| e.credits)
            .unwrap_or(self.default_credits)
    }
}

impl Default for CostTable {
    /// The pricing observed in production: a 5-second clip costs one
    /// credit, every other length two.
    fn default() -> Self {
        Self {
            entries: vec![CostEntry {
                duration_secs: 5,
                credits: Decimal::ONE,
            }],
            default_credits: Decimal::TWO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_second_clips_cost_one_credit() {
        assert_eq!(CostTable::default().estimate(5), Decimal::ONE);
    }

    #[test]
    fn other_durations_fall_back_to_two_credits() {
        let table = CostTable::default();
        assert_eq!(table.estimate(10), Decimal::TWO);
        assert_eq!(table.estimate(1), Decimal::TWO);
        assert_eq!(table.estimate(0), Decimal::TWO);
    }

    #[test]
    fn extra_buckets_are_rows_not_code_changes() {
        let table = CostTable::new(
            vec![
                CostEntry {
                    duration_secs: 5,
                    credits: Decimal::ONE,
                },
                CostEntry {
                    duration_secs: 10,
                    credits: Decimal::from(3),
                },
            ],
            Decimal::from(4),
        );
        assert_eq!(table.estimate(10), Decimal::from(3));
        assert_eq!(table.estimate(7), Decimal::from(4));
    }
}
