use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Reads a listing price from its wire representation.
///
/// The listing service sends decimal columns either as JSON numbers or as
/// numeric strings (`"18999.00"`). Anything else, including `null`, is
/// rejected, as are non-finite and negative amounts.
pub fn price_from_json(value: &Value) -> ChartResult<f64> {
    let price = match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| ChartError::InvalidData(format!("price `{number}` is not a float")))?,
        Value::String(text) => {
            let trimmed = text.trim();
            let decimal = Decimal::from_str(trimmed)
                .or_else(|_| Decimal::from_scientific(trimmed))
                .map_err(|_| {
                    ChartError::InvalidData(format!("price `{text}` is not a decimal number"))
                })?;
            decimal_to_f64(decimal, "price")?
        }
        Value::Null => return Err(ChartError::InvalidData("price is null".to_owned())),
        other => {
            return Err(ChartError::InvalidData(format!(
                "price must be a number or numeric string, got `{other}`"
            )));
        }
    };

    validate_price(price)?;
    Ok(price)
}

pub fn validate_price(price: f64) -> ChartResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "price must be finite and >= 0, got {price}"
        )));
    }
    Ok(())
}

/// Formats a price the way value labels show it: the literal amount with no
/// grouping, and no trailing `.0` for whole numbers.
#[must_use]
pub fn format_price_literal(price: f64) -> String {
    if price == 0.0 {
        // Folds -0.0 into "0".
        return "0".to_owned();
    }
    format!("{price}")
}
