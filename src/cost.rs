//! Labor cost model: a flat daily rate per worker.

/// Daily wage per laborer, in currency minor units.
pub const DAILY_RATE: i64 = 200_000;

/// Cost of one day's work. Pure; the labor count is non-negative by type.
pub fn labor_cost(labor_count: u32) -> i64 {
    i64::from(labor_count) * DAILY_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_linear_in_labor_count() {
        assert_eq!(labor_cost(0), 0);
        assert_eq!(labor_cost(1), 200_000);
        assert_eq!(labor_cost(7), 1_400_000);
        for n in 0..100u32 {
            assert_eq!(labor_cost(n), i64::from(n) * 200_000);
        }
    }
}
