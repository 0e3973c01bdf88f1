use std::str::FromStr;

use crate::{
    model::api::UnknownVariantError,
    server::error::{internal::InternalError, AppError},
};

/// Parses an enumerated value read from the database
///
/// # Arguments
/// - `column` - Name of the column the value was stored in, used for diagnostics
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(T)` - Successfully parsed the stored string
/// - `Err(AppError::InternalErr(ParseStoredEnum))` - The stored string is not a known
///   variant of `T`
pub fn parse_stored_enum<T>(column: &'static str, value: String) -> Result<T, AppError>
where
    T: FromStr<Err = UnknownVariantError>,
{
    let result = value
        .parse::<T>()
        .map_err(|e| InternalError::ParseStoredEnum {
            column,
            value,
            source: e,
        })?;

    Ok(result)
}

/// Parses an enumerated value supplied by a client
///
/// # Returns
/// - `Ok(T)` - Successfully parsed the string
/// - `Err(AppError::BadRequest)` - The string is not a known variant of `T`
pub fn parse_request_enum<T>(value: &str) -> Result<T, AppError>
where
    T: FromStr<Err = UnknownVariantError>,
{
    value
        .parse::<T>()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}
