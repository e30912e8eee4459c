use crate::KeyValueStore;
use crate::session::AnimationFlag;
use crate::view::View;

/// Result of following a navigation intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Already on the requested page.
    Stay,
    /// Full page load of the target view's page.
    Navigate(View),
}

/// Routing half of an intent: navigate unless already on the target page.
#[must_use]
pub fn resolve_target(target: View, current: View) -> NavOutcome {
    if target == current {
        NavOutcome::Stay
    } else {
        NavOutcome::Navigate(target)
    }
}

/// Follow a navigation intent.
///
/// A market intent clears the entrance animation flag first, whether or not it navigates.
/// Owned intents never touch the flag.
///
/// # Errors
///
/// Returns an error if the flag cannot be cleared; callers may still route with
/// [`resolve_target`].
pub fn follow_intent<S: KeyValueStore>(
    target: View,
    current: View,
    flag: &AnimationFlag<S>,
) -> Result<NavOutcome, S::Error> {
    if target == View::Market {
        flag.rearm()?;
    }
    Ok(resolve_target(target, current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn played_flag() -> (MemoryStore, AnimationFlag<MemoryStore>) {
        let store = MemoryStore::default();
        let flag = AnimationFlag::new(store.clone());
        flag.mark_played().unwrap();
        (store, flag)
    }

    #[test]
    fn market_intent_on_market_page_clears_flag_without_navigating() {
        let (_store, flag) = played_flag();
        let outcome = follow_intent(View::Market, View::Market, &flag).unwrap();
        assert_eq!(outcome, NavOutcome::Stay);
        assert!(!flag.is_set().unwrap());
    }

    #[test]
    fn market_intent_from_owned_page_navigates_and_clears() {
        let (_store, flag) = played_flag();
        let outcome = follow_intent(View::Market, View::Owned, &flag).unwrap();
        assert_eq!(outcome, NavOutcome::Navigate(View::Market));
        assert!(!flag.is_set().unwrap());
    }

    #[test]
    fn owned_intent_leaves_flag_alone() {
        let (_store, flag) = played_flag();
        assert_eq!(
            follow_intent(View::Owned, View::Market, &flag).unwrap(),
            NavOutcome::Navigate(View::Owned)
        );
        assert_eq!(
            follow_intent(View::Owned, View::Owned, &flag).unwrap(),
            NavOutcome::Stay
        );
        assert!(flag.is_set().unwrap());
    }
}
