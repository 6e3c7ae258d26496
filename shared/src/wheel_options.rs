use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::WheelError;
use crate::validation::{
    coerce_weight, normalize_option_name, parse_weight, validate_option_name, weight_from_f64,
};

fn default_weight() -> u32 {
    1
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredWeight {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

// Stored weights may be hand-edited or written by older versions. Anything
// that is not a usable number becomes 1 instead of failing the whole list.
fn lenient_weight<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let weight = match Option::<StoredWeight>::deserialize(deserializer)? {
        Some(StoredWeight::Integer(value)) => coerce_weight(value),
        Some(StoredWeight::Float(value)) => weight_from_f64(value),
        Some(StoredWeight::Text(raw)) => parse_weight(&raw),
        Some(StoredWeight::Other(_)) | None => default_weight(),
    };
    Ok(weight)
}

/// A labeled entry on the wheel. Identity is its position in the list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelOption {
    pub name: String,
    #[serde(default = "default_weight", deserialize_with = "lenient_weight")]
    pub weight: u32,
}

impl WheelOption {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight: coerce_weight(weight as i64),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct OptionList {
    options: Vec<WheelOption>,
}

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: Vec<WheelOption>) -> Self {
        Self { options }.sanitized()
    }

    /// Drops options with blank names and coerces weights into range.
    pub fn sanitized(self) -> Self {
        let options = self
            .options
            .into_iter()
            .filter_map(|option| {
                let name = normalize_option_name(&option.name);
                if validate_option_name(&name).is_err() {
                    log::warn!("Dropping invalid option name {:?}", option.name);
                    return None;
                }
                Some(WheelOption::new(name, option.weight))
            })
            .collect();
        Self { options }
    }

    pub fn add(&mut self, name: &str) -> Result<usize, WheelError> {
        self.add_weighted(name, 1)
    }

    pub fn add_weighted(&mut self, name: &str, weight: u32) -> Result<usize, WheelError> {
        let name = normalize_option_name(name);
        validate_option_name(&name)?;
        self.options.push(WheelOption::new(name, weight));
        Ok(self.options.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Result<WheelOption, WheelError> {
        self.check_index(index)?;
        Ok(self.options.remove(index))
    }

    pub fn rename(&mut self, index: usize, name: &str) -> Result<(), WheelError> {
        self.check_index(index)?;
        let name = normalize_option_name(name);
        validate_option_name(&name)?;
        self.options[index].name = name;
        Ok(())
    }

    /// Bad weight input is coerced rather than rejected; only the index can fail.
    pub fn set_weight(&mut self, index: usize, raw: &str) -> Result<u32, WheelError> {
        self.check_index(index)?;
        let weight = parse_weight(raw);
        self.options[index].weight = weight;
        Ok(weight)
    }

    pub fn get(&self, index: usize) -> Option<&WheelOption> {
        self.options.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WheelOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.options.iter().map(|o| o.name.clone()).collect()
    }

    pub fn weights(&self) -> Vec<u32> {
        self.options.iter().map(|o| o.weight).collect()
    }

    pub fn total_weight(&self) -> u64 {
        self.options.iter().map(|o| o.weight as u64).sum()
    }

    /// Share of the total weight held by the option at `index`.
    pub fn probability(&self, index: usize) -> Option<f64> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        self.options
            .get(index)
            .map(|o| o.weight as f64 / total as f64)
    }

    fn check_index(&self, index: usize) -> Result<(), WheelError> {
        if index >= self.options.len() {
            return Err(WheelError::IndexOutOfRange {
                index,
                len: self.options.len(),
            });
        }
        Ok(())
    }
}
