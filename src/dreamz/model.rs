use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upper bound for every 0..=10 rating. Zero means "not rated".
pub const MAX_RATING: u8 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
            Tone::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Tone::Positive),
            "negative" => Ok(Tone::Negative),
            "neutral" => Ok(Tone::Neutral),
            other => Err(format!(
                "Invalid tone: {} (expected positive, negative or neutral)",
                other
            )),
        }
    }
}

/// One journal record.
///
/// Entries carry no identifier: the only way to address one is its position
/// in the stored list. Field names on the wire match the original mobile app
/// so existing exports stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entry {
    pub title: String,
    #[serde(rename = "dreamText")]
    pub body_text: String,
    /// Already formatted for display; never parsed back into a date.
    pub date: String,
    pub location: String,
    pub tags: Vec<String>,
    pub characters: Vec<String>,
    pub emotion_before: String,
    pub emotion_after: String,
    pub emotion_before_intensity: u8,
    pub emotion_after_intensity: u8,
    pub clarity: u8,
    pub sleep_quality: u8,
    pub meaning: String,
    pub tone: Tone,
}

impl Entry {
    pub fn new(title: impl Into<String>, body_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_text: body_text.into(),
            ..Self::default()
        }
    }

    /// Decodes an entry field by field, defaulting whatever is missing or of
    /// the wrong type. Non-object values decode to an empty entry.
    pub fn from_value_lenient(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            title: string_field(obj, "title"),
            body_text: string_field(obj, "dreamText"),
            date: string_field(obj, "date"),
            location: string_field(obj, "location"),
            tags: list_field(obj, "tags"),
            characters: list_field(obj, "characters"),
            emotion_before: string_field(obj, "emotionBefore"),
            emotion_after: string_field(obj, "emotionAfter"),
            emotion_before_intensity: rating_field(obj, "emotionBeforeIntensity"),
            emotion_after_intensity: rating_field(obj, "emotionAfterIntensity"),
            clarity: rating_field(obj, "clarity"),
            sleep_quality: rating_field(obj, "sleepQuality"),
            meaning: string_field(obj, "meaning"),
            tone: obj
                .get("tone")
                .and_then(Value::as_str)
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}

/// Clamps a rating into 0..=10.
pub fn clamp_rating(value: i64) -> u8 {
    value.clamp(0, MAX_RATING as i64) as u8
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn list_field(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn rating_field(obj: &Map<String, Value>, key: &str) -> u8 {
    obj.get(key)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .map(|n| clamp_rating(n.round() as i64))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_original_field_names() {
        let mut entry = Entry::new("Flying", "Over the sea");
        entry.sleep_quality = 7;
        entry.tone = Tone::Positive;

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["dreamText"], "Over the sea");
        assert_eq!(value["sleepQuality"], 7);
        assert_eq!(value["tone"], "positive");
        assert!(value.get("body_text").is_none());
    }

    #[test]
    fn lenient_decode_defaults_bad_fields() {
        let value = json!({
            "title": "Falling",
            "dreamText": 42,
            "tags": ["lucid", 3, null, "chase"],
            "characters": "not a list",
            "clarity": 14,
            "sleepQuality": -2,
            "emotionBeforeIntensity": 6.6,
            "tone": "ecstatic"
        });

        let entry = Entry::from_value_lenient(&value);
        assert_eq!(entry.title, "Falling");
        assert_eq!(entry.body_text, "");
        assert_eq!(entry.tags, vec!["lucid", "chase"]);
        assert!(entry.characters.is_empty());
        assert_eq!(entry.clarity, 10);
        assert_eq!(entry.sleep_quality, 0);
        assert_eq!(entry.emotion_before_intensity, 7);
        assert_eq!(entry.tone, Tone::Neutral);
    }

    #[test]
    fn lenient_decode_of_non_object_is_empty() {
        assert_eq!(Entry::from_value_lenient(&json!("hello")), Entry::default());
        assert_eq!(Entry::from_value_lenient(&json!(null)), Entry::default());
    }

    #[test]
    fn parses_tone_case_insensitively() {
        assert_eq!("Negative".parse::<Tone>().unwrap(), Tone::Negative);
        assert!("angry".parse::<Tone>().is_err());
    }
}
