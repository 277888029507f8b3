//! Weather tool parameters and their reference implementations.

use super::traits::Tool;
use super::parameters_schema;
use crate::error::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Temperature unit accepted by the weather tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[schemars(inline)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    const ALLOWED: &'static str = "must be one of: celsius, fahrenheit";
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => write!(f, "celsius"),
            Self::Fahrenheit => write!(f, "fahrenheit"),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "celsius" => Ok(Self::Celsius),
            "fahrenheit" => Ok(Self::Fahrenheit),
            other => Err(ValidationError::new(
                "format",
                format!("{} (got {:?})", Self::ALLOWED, other),
            )),
        }
    }
}

// No `Deserialize`: values only come from `new` / `from_args`.
/// Arguments for `get_current_weather`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct WeatherParams {
    /// The city and state, e.g. San Francisco, CA
    #[schemars(length(min = 1))]
    pub location: String,
    /// The temperature unit to use. Infer this from the user's location.
    pub format: TemperatureUnit,
}

impl WeatherParams {
    pub fn new(location: impl Into<String>, format: &str) -> Result<Self, ValidationError> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(ValidationError::new("location", "must not be empty"));
        }
        Ok(Self {
            location,
            format: format.parse()?,
        })
    }

    /// Validate a JSON argument object as sent by the remote model.
    pub fn from_args(args: &Value) -> Result<Self, ValidationError> {
        ensure_object(args)?;
        Self::new(required_str(args, "location")?, required_str(args, "format")?)
    }
}

/// Arguments for `get_n_day_weather_forecast`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ForecastParams {
    #[serde(flatten)]
    pub base: WeatherParams,
    /// The number of days to forecast
    #[schemars(range(min = 1))]
    pub num_days: u32,
}

impl ForecastParams {
    pub fn new(
        location: impl Into<String>,
        format: &str,
        num_days: u32,
    ) -> Result<Self, ValidationError> {
        if num_days == 0 {
            return Err(ValidationError::new("num_days", "must be at least 1"));
        }
        Ok(Self {
            base: WeatherParams::new(location, format)?,
            num_days,
        })
    }

    pub fn from_args(args: &Value) -> Result<Self, ValidationError> {
        let base = WeatherParams::from_args(args)?;
        let num_days = match args.get("num_days") {
            None | Some(Value::Null) => {
                return Err(ValidationError::new("num_days", "is required"));
            }
            Some(v) => v
                .as_u64()
                .ok_or_else(|| ValidationError::new("num_days", "must be a non-negative integer"))?,
        };
        let num_days = u32::try_from(num_days)
            .map_err(|_| ValidationError::new("num_days", "is out of range"))?;
        Self::new(base.location, &base.format.to_string(), num_days)
    }
}

pub fn get_current_weather(params: &WeatherParams) -> String {
    format!(
        "The current weather in {} is 20 degrees {}",
        params.location, params.format
    )
}

pub fn get_n_day_weather_forecast(params: &ForecastParams) -> String {
    format!(
        "The weather forecast for the next {} days in {} is 20 degrees {}",
        params.num_days, params.base.location, params.base.format
    )
}

/// `get_current_weather` as a declarable tool.
pub struct CurrentWeather;

impl Tool for CurrentWeather {
    fn name(&self) -> &str {
        "get_current_weather"
    }

    fn description(&self) -> &str {
        "Get the current weather"
    }

    fn parameters_schema(&self) -> Value {
        parameters_schema::<WeatherParams>()
    }

    fn invoke(&self, args: &Value) -> Result<String, ValidationError> {
        WeatherParams::from_args(args).map(|p| get_current_weather(&p))
    }
}

/// `get_n_day_weather_forecast` as a declarable tool.
pub struct WeatherForecast;

impl Tool for WeatherForecast {
    fn name(&self) -> &str {
        "get_n_day_weather_forecast"
    }

    fn description(&self) -> &str {
        "Get an N-day weather forecast"
    }

    fn parameters_schema(&self) -> Value {
        parameters_schema::<ForecastParams>()
    }

    fn invoke(&self, args: &Value) -> Result<String, ValidationError> {
        ForecastParams::from_args(args).map(|p| get_n_day_weather_forecast(&p))
    }
}

fn ensure_object(args: &Value) -> Result<(), ValidationError> {
    if args.is_object() {
        Ok(())
    } else {
        Err(ValidationError::new("arguments", "must be a JSON object"))
    }
}

fn required_str<'a>(args: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    match args.get(field) {
        None | Some(Value::Null) => Err(ValidationError::new(field, "is required")),
        Some(v) => v
            .as_str()
            .ok_or_else(|| ValidationError::new(field, "must be a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kelvin_is_rejected_on_format() {
        let err = WeatherParams::new("Oslo", "kelvin").unwrap_err();
        assert_eq!(err.field, "format");
        assert!(err.constraint.contains("celsius, fahrenheit"));
    }

    #[test]
    fn celsius_with_location_is_accepted() {
        let params = WeatherParams::new("San Francisco, CA", "celsius").unwrap();
        assert_eq!(params.format, TemperatureUnit::Celsius);
        assert_eq!(params.location, "San Francisco, CA");
    }

    #[test]
    fn blank_location_is_rejected() {
        let err = WeatherParams::new("  ", "fahrenheit").unwrap_err();
        assert_eq!(err.field, "location");
    }

    #[test]
    fn from_args_reports_missing_and_mistyped_fields() {
        let err = WeatherParams::from_args(&json!({ "format": "celsius" })).unwrap_err();
        assert_eq!(err, ValidationError::new("location", "is required"));

        let err = WeatherParams::from_args(&json!({ "location": 42, "format": "celsius" }))
            .unwrap_err();
        assert_eq!(err, ValidationError::new("location", "must be a string"));

        let err = WeatherParams::from_args(&json!(["Oslo", "celsius"])).unwrap_err();
        assert_eq!(err.field, "arguments");
    }

    #[test]
    fn forecast_requires_positive_integer_days() {
        let args = json!({ "location": "Paris", "format": "celsius", "num_days": "three" });
        assert_eq!(ForecastParams::from_args(&args).unwrap_err().field, "num_days");

        let args = json!({ "location": "Paris", "format": "celsius", "num_days": 0 });
        assert_eq!(ForecastParams::from_args(&args).unwrap_err().field, "num_days");

        let args = json!({ "location": "Paris", "format": "celsius" });
        assert_eq!(
            ForecastParams::from_args(&args).unwrap_err(),
            ValidationError::new("num_days", "is required")
        );
    }

    #[test]
    fn tools_render_reference_answers() {
        let out = CurrentWeather
            .invoke(&json!({ "location": "Boston, MA", "format": "fahrenheit" }))
            .unwrap();
        assert_eq!(out, "The current weather in Boston, MA is 20 degrees fahrenheit");

        let out = WeatherForecast
            .invoke(&json!({ "location": "Paris", "format": "celsius", "num_days": 3 }))
            .unwrap();
        assert_eq!(
            out,
            "The weather forecast for the next 3 days in Paris is 20 degrees celsius"
        );
    }

    #[test]
    fn from_args_rejects_blank_location_before_zero_days() {
        let args = json!({ "location": "", "format": "celsius", "num_days": 0 });
        assert_eq!(ForecastParams::from_args(&args).unwrap_err().field, "location");

        let args = json!({ "location": "Rome", "format": "celsius", "num_days": 0 });
        assert_eq!(ForecastParams::from_args(&args).unwrap_err().field, "num_days");
    }

    #[test]
    fn params_serialize_flat() {
        let params = ForecastParams::new("Rome", "celsius", 5).unwrap();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "location": "Rome", "format": "celsius", "num_days": 5 })
        );
    }
}
