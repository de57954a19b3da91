//! Product payload validation. Every rule is evaluated; violations are collected, not short-circuited.

use crate::error::ValidationErrors;
use crate::model::{Category, ProductDraft};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Map, Value};
use std::str::FromStr;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 250;
/// Upper bound imposed by the NUMERIC(10,2) price column.
pub const PRICE_UPPER_BOUND: i64 = 100_000_000;

pub struct ProductValidator;

impl ProductValidator {
    /// Validate an untrusted JSON body into a draft. Unknown fields (including `id`) are ignored.
    pub fn validate(body: &Value) -> Result<ProductDraft, ValidationErrors> {
        let obj = body
            .as_object()
            .ok_or_else(|| ValidationErrors::single("Product must be a JSON object"))?;
        let mut errors = ValidationErrors::default();

        let name = text_field(obj, "name", "Product name", NAME_MAX_CHARS, &mut errors);
        let description = text_field(
            obj,
            "description",
            "Product description",
            DESCRIPTION_MAX_CHARS,
            &mut errors,
        );
        let price = price_field(obj, &mut errors);
        let available = available_field(obj, &mut errors);
        let category = category_field(obj, &mut errors);

        match (name, description, price, available, category) {
            (Some(name), Some(description), Some(price), Some(available), Some(category))
                if errors.is_empty() =>
            {
                Ok(ProductDraft {
                    name,
                    description,
                    price,
                    available,
                    category,
                })
            }
            _ => Err(errors),
        }
    }
}

fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn text_field(
    obj: &Map<String, Value>,
    key: &str,
    label: &str,
    max_chars: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match present(obj, key) {
        None => {
            errors.push(format!("{} is required", label));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(format!("{} is required", label));
            None
        }
        Some(Value::String(s)) if s.chars().count() > max_chars => {
            errors.push(format!("{} must be less than {} characters", label, max_chars));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(format!("{} must be a string", label));
            None
        }
    }
}

fn price_field(obj: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<Decimal> {
    let raw = match present(obj, "price") {
        None => {
            errors.push("Product price is required");
            return None;
        }
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(_) => {
            errors.push("Product price must be a number");
            return None;
        }
    };
    let Some(parsed) = parse_decimal(&raw) else {
        // Finite numbers too large for a decimal are out of range, not malformed.
        match raw.parse::<f64>().ok().filter(|f| f.is_finite()) {
            Some(f) if f > 0.0 => errors.push(format!(
                "Product price must be less than {}",
                PRICE_UPPER_BOUND
            )),
            Some(_) => errors.push("Product price must be a positive number"),
            None => errors.push("Product price must be a number"),
        }
        return None;
    };
    let price = parsed.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if price <= Decimal::ZERO {
        errors.push("Product price must be a positive number");
        return None;
    }
    if price >= Decimal::from(PRICE_UPPER_BOUND) {
        errors.push(format!("Product price must be less than {}", PRICE_UPPER_BOUND));
        return None;
    }
    Some(price)
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn available_field(obj: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<bool> {
    match present(obj, "available") {
        None => {
            errors.push("Product availability is required");
            None
        }
        Some(Value::Bool(b)) => Some(*b),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Some(true),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Some(false),
        Some(_) => {
            errors.push("Product availability must be a boolean");
            None
        }
    }
}

fn category_field(obj: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<Category> {
    match present(obj, "category") {
        None => {
            errors.push("Product category is required");
            None
        }
        Some(v) => match v.as_str().map(Category::from_str) {
            Some(Ok(c)) => Some(c),
            _ => {
                errors.push(format!("Category must be one of: {}", Category::names()));
                None
            }
        },
    }
}
