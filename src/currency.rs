//! Currency formatting in the Brazilian convention used throughout the UI:
//! `R$` prefix, dot-grouped thousands, comma decimal separator.

/// Formats an amount as currency with exactly two fraction digits.
/// `50000.0` renders as `"R$ 50.000,00"`. Negative amounts (a displayed
/// loss) carry a leading minus sign.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let grouped = group_thousands(whole);
    if negative {
        format!("-R$ {},{:02}", grouped, fraction)
    } else {
        format!("R$ {},{:02}", grouped, fraction)
    }
}

/// Inserts a `.` between every group of three digits, counting from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_amounts() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(15_000.0), "R$ 15.000,00");
        assert_eq!(format_currency(50_000.0), "R$ 50.000,00");
        assert_eq!(format_currency(57_900.0), "R$ 57.900,00");
    }

    #[test]
    fn test_format_fractional_amounts() {
        assert_eq!(format_currency(0.5), "R$ 0,50");
        assert_eq!(format_currency(1_234.56), "R$ 1.234,56");
        assert_eq!(format_currency(999.999), "R$ 1.000,00");
    }

    #[test]
    fn test_format_large_amounts() {
        assert_eq!(format_currency(1_234_567.0), "R$ 1.234.567,00");
        assert_eq!(format_currency(1_000_000_000.25), "R$ 1.000.000.000,25");
    }

    #[test]
    fn test_format_small_groups() {
        assert_eq!(format_currency(1.0), "R$ 1,00");
        assert_eq!(format_currency(12.0), "R$ 12,00");
        assert_eq!(format_currency(123.0), "R$ 123,00");
        assert_eq!(format_currency(1_234.0), "R$ 1.234,00");
    }

    #[test]
    fn test_format_negative_amounts() {
        assert_eq!(format_currency(-2_500.0), "-R$ 2.500,00");
        assert_eq!(format_currency(-0.01), "-R$ 0,01");
    }
}
