pub mod artist;
pub mod show;
pub mod venue;

use validator::Validate;

use crate::error::AppResult;

/// Run derive-based validation, turning failures into a 400 response.
fn validated<T: Validate>(input: T) -> AppResult<T> {
    input.validate()?;
    Ok(input)
}
