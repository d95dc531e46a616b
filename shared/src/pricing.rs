//! Price math helpers for quote and order totals

use rust_decimal::Decimal;

/// Unit price after a percentage discount
pub fn discounted_price(price: Decimal, discount_percent: Decimal) -> Decimal {
    let factor = (Decimal::from(100) - discount_percent) / Decimal::from(100);
    (price * factor).round_dp(2)
}

/// Total for one line: unit price times quantity
pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price * Decimal::from(quantity)
}

/// Total across lines; lines without a known price are skipped
pub fn order_total<I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = (Option<Decimal>, u32)>,
{
    lines
        .into_iter()
        .filter_map(|(price, quantity)| price.map(|p| line_total(p, quantity)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_discounted_price() {
        assert_eq!(discounted_price(dec("200.00"), dec("15")), dec("170.00"));
        assert_eq!(discounted_price(dec("99.99"), dec("0")), dec("99.99"));
        assert_eq!(discounted_price(dec("50.00"), dec("100")), dec("0.00"));
    }

    #[test]
    fn test_discounted_price_rounds_to_cents() {
        assert_eq!(discounted_price(dec("10.00"), dec("33.333")), dec("6.67"));
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(dec("12.50"), 4), dec("50.00"));
        assert_eq!(line_total(dec("12.50"), 0), dec("0.00"));
    }

    #[test]
    fn test_order_total_skips_unpriced_lines() {
        let lines = vec![
            (Some(dec("10.00")), 2),
            (None, 5),
            (Some(dec("2.50")), 4),
        ];
        assert_eq!(order_total(lines), dec("30.00"));
    }
}
