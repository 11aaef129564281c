//! Display formatting for tick labels, tooltips and the maturity summary

/// Compact magnitude label: 1500 -> "1.5K", 2_500_000 -> "2.5M", 500 -> "500".
///
/// The single decimal is rounded half-up on the exact integer, so 1250 -> "1.3K".
pub fn format_compact(value: i128) -> String {
    if value >= 1_000_000 {
        format!("{}M", one_decimal(value, 1_000_000))
    } else if value >= 1_000 {
        format!("{}K", one_decimal(value, 1_000))
    } else {
        value.to_string()
    }
}

/// `value / unit` with one decimal place, for non-negative `value`
fn one_decimal(value: i128, unit: i128) -> String {
    let tenth = unit / 10;
    let mut tenths = value / tenth;
    if value % tenth * 2 >= tenth {
        tenths += 1;
    }
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Whole-dollar USD string: 2594 -> "$2,594", -1200 -> "-$1,200"
pub fn format_usd(value: i128) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(value.unsigned_abs()))
}

/// USD string for a fractional amount, rounded half away from zero
pub fn format_usd_f64(value: f64) -> String {
    format_usd(value.round() as i128)
}

/// Tooltip heading for a year on the x axis
pub fn format_year(year: u32) -> String {
    format!("Year {}", year)
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
