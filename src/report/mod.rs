pub mod json;
pub mod text;

use crate::input::fields::{CountField, HIGHLIGHTS_KEY};
use crate::model::snapshot::DEFAULT_HIGHLIGHT;

/// Count with comma thousands separators, e.g. `2,143`.
pub fn format_count(v: u64) -> String {
    let digits = v.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Header line plus one sample row that imports cleanly.
pub fn csv_template() -> String {
    let mut header: Vec<&str> = CountField::ALL.iter().map(|f| f.header()).collect();
    header.push(HIGHLIGHTS_KEY);
    format!(
        "{}\n2143,657,13,3245,452,0,\"{}\"\n",
        header.join(","),
        DEFAULT_HIGHLIGHT
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
