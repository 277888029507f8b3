pub mod traits;
pub mod weather;

pub use traits::{Tool, ToolDefinition};
pub use weather::{
    get_current_weather, get_n_day_weather_forecast, CurrentWeather, ForecastParams,
    TemperatureUnit, WeatherForecast, WeatherParams,
};

use crate::types::ToolDeclaration;
use schemars::JsonSchema;

// ---------------------------------------------------------------------------
// Schema export
// ---------------------------------------------------------------------------

/// Export the JSON Schema for a typed parameter struct.
///
/// The `$schema` meta key is dropped; the remote service expects a bare
/// object schema in `function.parameters`.
pub fn parameters_schema<T: JsonSchema>() -> serde_json::Value {
    let mut schema = schemars::schema_for!(T).to_value();
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
    }
    schema
}

// ---------------------------------------------------------------------------
// Assistant tool list
// ---------------------------------------------------------------------------

/// Function tools the assistant may call, in declaration order.
pub fn function_tools() -> Vec<Box<dyn Tool>> {
    vec![Box::new(CurrentWeather), Box::new(WeatherForecast)]
}

/// Build the ordered tool list sent with the create request: the built-in
/// code interpreter followed by every function tool.
pub fn tool_declarations() -> Vec<ToolDeclaration> {
    std::iter::once(ToolDeclaration::CodeInterpreter)
        .chain(
            function_tools()
                .iter()
                .map(|t| ToolDeclaration::function(t.definition())),
        )
        .collect()
}
