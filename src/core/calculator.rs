use crate::utils::error::{DirectoryError, Result};

/// Tsh per watt-hour of daily use.
pub const RATE_TSH: f64 = 5.0;

pub const MISSING_INPUT_MESSAGE: &str = "Please fill all fields.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    MissingInput,
    Cost(f64),
}

impl Estimate {
    /// The line shown under the calculator.
    pub fn message(&self) -> String {
        match self {
            Estimate::MissingInput => MISSING_INPUT_MESSAGE.to_string(),
            Estimate::Cost(cost) => format!(
                "Estimated basic system cost: Tsh {}",
                format_thousands(*cost)
            ),
        }
    }
}

/// `watts * hours * RATE_TSH` from raw form values.
pub fn estimate(watts: &str, hours: &str) -> Result<Estimate> {
    let (watts, hours) = (watts.trim(), hours.trim());
    if watts.is_empty() || hours.is_empty() {
        return Ok(Estimate::MissingInput);
    }

    let watts = parse_amount("watts", watts)?;
    let hours = parse_amount("hours", hours)?;
    let cost = watts * hours * RATE_TSH;
    if !cost.is_finite() {
        return Err(DirectoryError::ValidationError {
            message: "The estimate is too large to compute".to_string(),
        });
    }
    Ok(Estimate::Cost(cost))
}

fn parse_amount(field: &str, raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(DirectoryError::ValidationError {
            message: format!("'{}' is not a valid number of {}", raw, field),
        }),
    }
}

/// Groups the integer part with commas and keeps at most three decimals,
/// e.g. `1234567.5` becomes `1,234,567.5`.
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}
