use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Garment category, selects the base rate row
///
/// Decoding goes through [`FromStr`], so the HTTP body and the CLI accept the
/// same case-insensitive spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum StyleType {
    #[serde(rename = "T-shirt")]
    TShirt,
    #[serde(rename = "Jeans")]
    Jeans,
}

impl StyleType {
    pub const COUNT: usize = 2;
    pub const ALL: [StyleType; Self::COUNT] = [StyleType::TShirt, StyleType::Jeans];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TShirt => "T-shirt",
            Self::Jeans => "Jeans",
        }
    }

    /// Row index into the base rate table
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Fit {
    Slim,
    Regular,
    Loose,
}

impl Fit {
    pub const COUNT: usize = 3;
    pub const ALL: [Fit; Self::COUNT] = [Fit::Slim, Fit::Regular, Fit::Loose];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slim => "Slim",
            Self::Regular => "Regular",
            Self::Loose => "Loose",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown style type '{}' (expected T-shirt or Jeans)", s))
    }
}

impl FromStr for Fit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fit| fit.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown fit '{}' (expected Slim, Regular or Loose)", s))
    }
}

impl TryFrom<String> for StyleType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Fit {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Validated style description fed to the estimator
#[derive(Debug, Clone, PartialEq)]
pub struct StyleInput {
    pub style_name: String,
    pub style_type: StyleType,
    pub fit: Fit,
    pub fabric_width_cm: f64,
    pub fabric_type: String,
}

/// Calculate request body as it arrives on the wire
///
/// Every field is optional here so that a missing value is reported as
/// invalid input by [`StyleRequest::validate`] rather than as a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRequest {
    #[serde(default)]
    pub style_name: String,
    pub style_type: Option<StyleType>,
    pub fit: Option<Fit>,
    pub fabric_width_cm: Option<f64>,
    pub fabric_type: Option<String>,
}

impl StyleRequest {
    pub fn validate(self) -> Result<StyleInput, AppError> {
        let style_type = self
            .style_type
            .ok_or_else(|| AppError::InvalidInput("styleType is required".to_string()))?;
        let fit = self
            .fit
            .ok_or_else(|| AppError::InvalidInput("fit is required".to_string()))?;
        let fabric_width_cm = self
            .fabric_width_cm
            .ok_or_else(|| AppError::InvalidInput("fabricWidthCm is required".to_string()))?;
        if !fabric_width_cm.is_finite() || fabric_width_cm <= 0.0 {
            return Err(AppError::InvalidInput(format!(
                "fabricWidthCm must be greater than 0 (got {})",
                fabric_width_cm
            )));
        }
        let fabric_type = match self.fabric_type {
            Some(fabric) if !fabric.trim().is_empty() => fabric,
            _ => {
                return Err(AppError::InvalidInput(
                    "fabricType is required".to_string(),
                ))
            }
        };

        Ok(StyleInput {
            style_name: self.style_name,
            style_type,
            fit,
            fabric_width_cm,
            fabric_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> StyleRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_style_type_wire_names() {
        assert_eq!(serde_json::to_string(&StyleType::TShirt).unwrap(), "\"T-shirt\"");
        assert_eq!(serde_json::to_string(&StyleType::Jeans).unwrap(), "\"Jeans\"");
        assert!(serde_json::from_str::<StyleType>("\"Dress\"").is_err());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("t-shirt".parse::<StyleType>().unwrap(), StyleType::TShirt);
        assert_eq!("LOOSE".parse::<Fit>().unwrap(), Fit::Loose);
        assert!("Baggy".parse::<Fit>().is_err());
    }

    #[test]
    fn test_wire_decoding_matches_cli_parsing() {
        assert_eq!(serde_json::from_str::<StyleType>("\"t-shirt\"").unwrap(), StyleType::TShirt);
        assert_eq!(serde_json::from_str::<StyleType>("\"JEANS\"").unwrap(), StyleType::Jeans);
        assert_eq!(serde_json::from_str::<Fit>("\"loose\"").unwrap(), Fit::Loose);

        let err = serde_json::from_str::<Fit>("\"Baggy\"").unwrap_err();
        assert!(err.to_string().contains("expected Slim, Regular or Loose"));
    }

    #[test]
    fn test_validate_full_request() {
        let style = parse(
            r#"{"styleName": "Basic Tee", "styleType": "T-shirt", "fit": "Regular",
                "fabricWidthCm": 150, "fabricType": "Cotton Knit"}"#,
        )
        .validate()
        .unwrap();

        assert_eq!(style.style_name, "Basic Tee");
        assert_eq!(style.style_type, StyleType::TShirt);
        assert_eq!(style.fit, Fit::Regular);
        assert_eq!(style.fabric_width_cm, 150.0);
        assert_eq!(style.fabric_type, "Cotton Knit");
    }

    #[test]
    fn test_style_name_is_optional() {
        let style = parse(
            r#"{"styleType": "Jeans", "fit": "Slim", "fabricWidthCm": 140, "fabricType": "Denim Woven"}"#,
        )
        .validate()
        .unwrap();
        assert!(style.style_name.is_empty());
    }

    #[test]
    fn test_missing_style_type_is_invalid_input() {
        let err = parse(r#"{"fit": "Slim", "fabricWidthCm": 140, "fabricType": "Denim Woven"}"#)
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(ref msg) if msg.contains("styleType")));
    }

    #[test]
    fn test_non_positive_width_is_invalid_input() {
        for width in ["0", "-10"] {
            let body = format!(
                r#"{{"styleType": "Jeans", "fit": "Slim", "fabricWidthCm": {}, "fabricType": "Denim Woven"}}"#,
                width
            );
            let err = parse(&body).validate().unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(ref msg) if msg.contains("fabricWidthCm")));
        }
    }

    #[test]
    fn test_blank_fabric_type_is_invalid_input() {
        let err = parse(r#"{"styleType": "Jeans", "fit": "Slim", "fabricWidthCm": 140, "fabricType": " "}"#)
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
