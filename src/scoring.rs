use crate::errors::EcoError;
use crate::models::ActivityType;

pub fn rate(kind: ActivityType) -> u64 {
    match kind {
        ActivityType::PublicTransport => 10,
        ActivityType::VeganMeal => 8,
        ActivityType::Recycling => 5,
        ActivityType::BikeRide => 12,
    }
}

pub fn validate_quantity(quantity: i64) -> Result<u32, EcoError> {
    if quantity <= 0 {
        return Err(EcoError::invalid("quantity must be a positive integer"));
    }
    u32::try_from(quantity).map_err(|_| EcoError::invalid("quantity out of range"))
}

pub fn score(kind: ActivityType, quantity: i64) -> Result<u64, EcoError> {
    let units = validate_quantity(quantity)?;
    rate(kind)
        .checked_mul(u64::from(units))
        .ok_or_else(|| EcoError::invalid("quantity out of range"))
}
