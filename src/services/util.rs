use serde::de::IgnoredAny;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NamedEntry {
    Bare(String),
    Named { name: Option<String> },
    #[allow(dead_code)]
    Other(IgnoredAny),
}

impl NamedEntry {
    fn into_name(self) -> Option<String> {
        match self {
            NamedEntry::Bare(name) => Some(name),
            NamedEntry::Named { name } => name,
            NamedEntry::Other(_) => None,
        }
    }
}

/// Decodes a JSON array stored as text (`genres`, `productionCompanies`)
/// into display names.
///
/// Entries may be bare strings or objects with a `name`; empty names and
/// anything else are dropped. Absent, empty or malformed text gives an empty
/// list.
pub fn parse_name_list(text: Option<&str>) -> Vec<String> {
    let text = match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Vec::new(),
    };
    match serde_json::from_str::<Vec<NamedEntry>>(text) {
        Ok(entries) => entries
            .into_iter()
            .filter_map(NamedEntry::into_name)
            .filter(|name| !name.is_empty())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Whole-dollar US currency, e.g. `$100,000,000`.
pub fn format_usd(amount: Option<i64>) -> Option<String> {
    let amount = amount?;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0 { "-" } else { "" };
    Some(format!("{}${}", sign, grouped))
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
