use crate::KeyValueStore;

/// Session-storage key recording that the market entrance animation already played.
pub const ANIMATION_FLAG_KEY: &str = "marketAnimationsPlayed";
const FLAG_SET: &str = "true";

/// Handle on the session-scoped entrance animation flag
pub struct AnimationFlag<S> {
    store: S,
}

impl<S: KeyValueStore> AnimationFlag<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn is_set(&self) -> Result<bool, S::Error> {
        Ok(self
            .store
            .get(ANIMATION_FLAG_KEY)?
            .is_some_and(|value| value == FLAG_SET))
    }

    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn mark_played(&self) -> Result<(), S::Error> {
        self.store.set(ANIMATION_FLAG_KEY, FLAG_SET)
    }

    /// Clear the flag so the next market load animates again.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be accessed.
    pub fn rearm(&self) -> Result<(), S::Error> {
        self.store.remove(ANIMATION_FLAG_KEY)
    }

    /// Read the flag as it stands for this page load, then set it.
    ///
    /// The returned value decides whether this load animates; every later load in the session
    /// sees the flag set until a navigation intent re-arms it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn snapshot_and_mark(&self) -> Result<bool, S::Error> {
        let played = self.is_set()?;
        self.mark_played()?;
        Ok(played)
    }
}
