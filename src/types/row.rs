use serde::{Deserialize, Deserializer, Serialize};

/// One horizontal band of input data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Display label shown to the right of the band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Samples left to right. `null` in JSON reads as NaN.
    #[serde(deserialize_with = "deserialize_samples")]
    pub values: Vec<f64>,
}

impl Row {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            label: None,
            values,
        }
    }

    pub fn labelled(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: Some(label.into()),
            values,
        }
    }

    /// Label length in characters, 0 when unlabelled.
    pub fn label_chars(&self) -> usize {
        self.label.as_deref().map_or(0, |l| l.chars().count())
    }
}

fn deserialize_samples<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_null_samples_read_as_nan() {
        let row: Row = serde_json::from_str(r#"{"label":"Gene1","values":[1.5,null,-2]}"#).unwrap();
        assert_eq!(row.label.as_deref(), Some("Gene1"));
        assert_eq!(row.values.len(), 3);
        assert!(row.values[1].is_nan());
    }

    #[test]
    fn test_label_chars_counts_chars_not_bytes() {
        let row = Row::labelled("αβγ", vec![]);
        assert_eq!(row.label_chars(), 3);
        assert_eq!(Row::new(vec![1.0]).label_chars(), 0);
    }
}
