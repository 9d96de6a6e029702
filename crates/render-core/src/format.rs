//! Number formatting for printed quotes: one currency symbol, `,` for
//! thousands and `.` for decimals, always two decimal places.

use cotizador_quote::Term;

/// `1234567.891` → `"1,234,567.89"`. The sign is kept in front of the
/// digits.
pub fn grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}

/// `("Q", 90587.41)` → `"Q 90,587.41"`.
pub fn money(symbol: &str, value: f64) -> String {
    format!("{} {}", symbol, grouped(value))
}

/// `7.0` → `"7.00%"`.
pub fn percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// `5 years` → `"5 años (60 meses)"`.
pub fn term(term: Term) -> String {
    format!("{} años ({} meses)", term.years(), term.months())
}

/// `189.0` → `"189.00 m²"`.
pub fn area(value: f64) -> String {
    format!("{:.2} m²", value)
}
