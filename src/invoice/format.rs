//! Display formatting shared by the PDF and DOCX renderers.

use rust_decimal::Decimal;

use super::types::DocumentKind;

/// Format a USD amount as `$1,234.56`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{frac_part}")
}

/// Format a quantity or weight without trailing zeros (`1`, `2.5`).
pub fn format_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

/// First `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Download name such as `MAKK_Invoice_BTR000001.pdf`.
///
/// A blank invoice number becomes `draft`; characters that are not safe in
/// file names are replaced with `_`.
pub fn download_file_name(prefix: &str, invoice_number: &str, kind: DocumentKind) -> String {
    let number = invoice_number.trim();
    let stem: String = if number.is_empty() {
        "draft".into()
    } else {
        number
            .chars()
            .map(|c| {
                if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
                {
                    '_'
                } else {
                    c
                }
            })
            .collect()
    };
    format!("{prefix}_{stem}.{}", kind.extension())
}
