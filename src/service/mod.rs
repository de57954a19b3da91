//! Request validation for product payloads.

mod validation;
pub use validation::{
    ProductValidator, DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS, PRICE_UPPER_BOUND,
};
