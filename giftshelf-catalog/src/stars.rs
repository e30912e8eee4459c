use crate::KeyValueStore;

/// Durable-storage key holding the displayed star balance.
pub const STARS_KEY: &str = "fragmentStars";

/// Fixed star balance re-asserted on every page load.
pub const STAR_BALANCE: u32 = 2500;

/// Write the star balance to durable storage and return the value to display.
///
/// # Errors
///
/// Returns an error if the store rejects the write.
pub fn persist_star_balance<S: KeyValueStore>(store: &S) -> Result<u32, S::Error> {
    store.set(STARS_KEY, &STAR_BALANCE.to_string())?;
    Ok(STAR_BALANCE)
}
