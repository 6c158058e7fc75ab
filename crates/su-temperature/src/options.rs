//! Display configuration.
//!
//! Options can be built in code or loaded from YAML/JSON:
//!
//! ```yaml
//! na_repr: "<NA>"
//! precision: 2
//! unit: fahrenheit
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TemperatureResult;
use crate::scalar::TemperatureValue;
use crate::unit::TemperatureUnit;
use su_frame::extension::DEFAULT_NA_REPR;

/// How temperature elements are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Placeholder for missing elements.
    pub na_repr: String,
    /// Fixed number of decimals; shortest representation when `None`.
    pub precision: Option<usize>,
    /// Unit override; the array's own unit tag when `None`.
    pub unit: Option<TemperatureUnit>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            na_repr: DEFAULT_NA_REPR.to_string(),
            precision: None,
            unit: None,
        }
    }
}

impl DisplayOptions {
    pub fn from_yaml_str(text: &str) -> TemperatureResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> TemperatureResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load_yaml(path: &Path) -> TemperatureResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml_string(&self) -> TemperatureResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Render one element, already converted to the display unit.
    pub fn format(&self, value: Option<TemperatureValue>) -> String {
        match (value, self.precision) {
            (None, _) => self.na_repr.clone(),
            (Some(v), Some(p)) => format!("{:.*}", p, v),
            (Some(v), None) => v.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::TemperatureArray;

    #[test]
    fn defaults() {
        let opts = DisplayOptions::default();
        assert_eq!(opts.format(None), "NaN");
        assert_eq!(opts.format(Some(TemperatureValue::celsius(0.0))), "0 °C");
    }

    #[test]
    fn load_from_yaml() {
        let opts = DisplayOptions::from_yaml_str("na_repr: \"<NA>\"\nprecision: 1\nunit: fahrenheit\n")
            .unwrap();
        assert_eq!(opts.na_repr, "<NA>");
        assert_eq!(opts.precision, Some(1));
        assert_eq!(opts.unit, Some(TemperatureUnit::Fahrenheit));

        let arr = TemperatureArray::new(vec![100.0, f64::NAN]).unwrap();
        assert_eq!(arr.format_with(&opts), vec!["212.0 °F", "<NA>"]);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let opts = DisplayOptions::from_yaml_str("precision: 3\n").unwrap();
        assert_eq!(opts.na_repr, "NaN");
        assert_eq!(opts.unit, None);
    }

    #[test]
    fn json_and_yaml_agree() {
        let yaml = DisplayOptions::from_yaml_str("unit: celsius\n").unwrap();
        let json = DisplayOptions::from_json_str(r#"{"unit":"celsius"}"#).unwrap();
        assert_eq!(yaml, json);
    }

    #[test]
    fn load_yaml_file() {
        let path = std::env::temp_dir().join(format!(
            "su_temperature_display_options_{}.yaml",
            std::process::id()
        ));
        let opts = DisplayOptions {
            na_repr: "-".to_string(),
            precision: Some(2),
            unit: None,
        };
        std::fs::write(&path, opts.to_yaml_string().unwrap()).unwrap();
        assert_eq!(DisplayOptions::load_yaml(&path).unwrap(), opts);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(DisplayOptions::from_yaml_str("precision: [").is_err());
    }
}
