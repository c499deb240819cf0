//! Probability normalization and highest-category scan over bias score sets.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Canonical bias category keys, in scan order.
pub const CATEGORIES: [&str; 11] = [
    "demographic",
    "age",
    "physical_appearance",
    "gender",
    "disability",
    "socioeconomic_status",
    "religion",
    "sexual_orientation",
    "race",
    "nationality",
    "others",
];

/// Keys the highest-category scan never considers.
const RESERVED: [&str; 2] = ["highest_probability_category", "others"];

/// Convert a raw probability value into a one-decimal percentage string.
///
/// Values above 1 are taken as already-percentages, otherwise as 0–1
/// fractions scaled by 100. Both are capped at 100; there is no lower-bound
/// clamp, so negative inputs pass through after scaling. Unparseable input
/// collapses to "0.0".
pub fn normalize_probability(raw: &Value) -> String {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    let Some(v) = parsed else {
        return "0.0".to_string();
    };
    let pct = if v > 1.0 {
        v.min(100.0)
    } else {
        (v * 100.0).min(100.0)
    };
    format!("{pct:.1}")
}

/// Category with the maximum probability in a score set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighestCategory {
    /// `None` when no entry qualified — callers treat this as "no finding".
    pub category: Option<String>,
    pub probability: String,
}

/// Linear scan for the highest-probability category.
///
/// Skips the reserved keys and any entry whose value is not an object with a
/// `"probability"` field. The comparison is strictly-greater, so the first
/// category in canonical order wins ties. Works on both raw (0–1) and
/// normalized (percentage-string) score sets.
pub fn highest_category(scores: &Value) -> HighestCategory {
    let mut best: Option<&str> = None;
    let mut best_p = f64::NEG_INFINITY;

    if let Some(map) = scores.as_object() {
        for key in CATEGORIES {
            if RESERVED.contains(&key) {
                continue;
            }
            let Some(p) = map.get(key).and_then(probability_of) else {
                continue;
            };
            if p > best_p {
                best_p = p;
                best = Some(key);
            }
        }
    }

    HighestCategory {
        category: best.map(str::to_string),
        probability: format!("{best_p:.1}"),
    }
}

fn probability_of(entry: &Value) -> Option<f64> {
    let p = entry.as_object()?.get("probability")?;
    match p {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Highest category of a raw score set, with its probability normalized to a
/// one-decimal percentage. The percentage comes from the raw value itself,
/// not from the one-decimal scan output, so 0.88 yields "88.0" rather than a
/// re-rounded "90.0".
pub fn normalized_highest(raw: &Value) -> HighestCategory {
    let highest = highest_category(raw);
    let probability = match highest.category.as_deref() {
        Some(category) => normalize_probability(&raw[category]["probability"]),
        None => "0.0".to_string(),
    };
    HighestCategory { category: highest.category, probability }
}

/// Rebuild a raw analysis as the canonical response object.
///
/// Every recognized category key is present afterwards, each holding a
/// one-decimal percentage string; missing keys score "0.0". The
/// `highest_probability_category` entry comes from scanning the raw scores
/// (the same scan routing decisions use — a raw set with no qualifying entry
/// reports a null category), and the upstream `Note` is carried through.
pub fn normalize_analysis(raw: &Value) -> Value {
    let mut out = Map::new();

    for key in CATEGORIES {
        let p = raw
            .get(key)
            .and_then(|v| v.get("probability"))
            .map(normalize_probability)
            .unwrap_or_else(|| "0.0".to_string());
        out.insert(key.to_string(), json!({ "probability": p }));
    }

    let highest = normalized_highest(raw);
    out.insert(
        "highest_probability_category".to_string(),
        json!({
            "category": highest.category,
            "probability": highest.probability,
        }),
    );

    let note = raw.get("Note").and_then(Value::as_str).unwrap_or("");
    out.insert("Note".to_string(), Value::String(note.to_string()));

    Value::Object(out)
}
