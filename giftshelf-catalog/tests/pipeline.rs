use futures::executor::block_on;
use giftshelf_catalog::{
    AnimationFlag, CatalogError, CatalogSource, EmptyState, FailureKind, KeyValueStore,
    LOAD_ERROR_PREFIX, MemoryStore, NavOutcome, NoticeSlot, RenderPlan, Timings, View,
    follow_intent, load_catalog,
};

const CATALOG: &str = r#"[
    {"name": "Plush Pepe", "image": "img/pepe.gif", "number": 1},
    {"name": "Durov's Cap", "image": "img/cap.png", "price": 1200},
    {"name": "Homemade Cake", "image": "img/cake.png", "price": null},
    {"name": "Swiss Watch", "img": "img/watch.gif", "price": 350.5},
    {"name": "Signet Ring", "image": "img/ring.png", "price": 0}
]"#;

enum Source {
    Body(&'static str),
    Status(u16),
}

impl CatalogSource for Source {
    fn resource(&self) -> &str {
        "gifts.json"
    }

    async fn fetch_catalog(&self) -> Result<String, CatalogError> {
        match self {
            Self::Body(body) => Ok((*body).to_string()),
            Self::Status(status) => Err(CatalogError::Fetch { status: *status }),
        }
    }
}

fn names(plan: &RenderPlan) -> Vec<&str> {
    plan.cards().iter().map(|card| card.item.name.as_str()).collect()
}

#[test]
fn partitions_are_exact_complements_in_source_order() {
    let timings = Timings::standard();
    let owned = block_on(load_catalog(&Source::Body(CATALOG), View::Owned, false, &timings));
    let market = block_on(load_catalog(&Source::Body(CATALOG), View::Market, false, &timings));

    assert_eq!(names(&owned.plan), vec!["Plush Pepe", "Homemade Cake"]);
    assert_eq!(
        names(&market.plan),
        vec!["Durov's Cap", "Swiss Watch", "Signet Ring"]
    );
    assert!(owned.plan.cards().iter().all(|card| !card.show_price));
    assert!(market.plan.cards().iter().all(|card| card.show_price));
}

#[test]
fn zero_price_still_counts_as_for_sale() {
    let outcome = block_on(load_catalog(
        &Source::Body(r#"[{"name":"Free","price":0}]"#),
        View::Market,
        true,
        &Timings::standard(),
    ));
    assert_eq!(names(&outcome.plan), vec!["Free"]);
}

#[test]
fn session_lifecycle_animates_once_until_rearmed() {
    let store = MemoryStore::default();
    let flag = AnimationFlag::new(&store);
    let timings = Timings::standard();
    let delays = |played: bool| -> Vec<Option<u32>> {
        let outcome = block_on(load_catalog(&Source::Body(CATALOG), View::Market, played, &timings));
        outcome.plan.cards().iter().map(|card| card.entrance_delay_ms).collect()
    };

    assert_eq!(delays(flag.snapshot_and_mark().unwrap()), vec![Some(0), Some(100), Some(200)]);
    assert_eq!(delays(flag.snapshot_and_mark().unwrap()), vec![None, None, None]);

    // Owned intents leave the flag alone.
    assert_eq!(
        follow_intent(View::Owned, View::Market, &flag).unwrap(),
        NavOutcome::Navigate(View::Owned)
    );
    assert_eq!(delays(flag.snapshot_and_mark().unwrap()), vec![None, None, None]);

    assert_eq!(
        follow_intent(View::Market, View::Owned, &flag).unwrap(),
        NavOutcome::Navigate(View::Market)
    );
    assert_eq!(delays(flag.snapshot_and_mark().unwrap()), vec![Some(0), Some(100), Some(200)]);
    assert_eq!(store.get("marketAnimationsPlayed").unwrap().as_deref(), Some("true"));
}

#[test]
fn failures_force_generic_empty_state_and_announce() {
    let mut slot = NoticeSlot::default();
    for (source, kind) in [
        (Source::Status(404), FailureKind::Fetch),
        (Source::Body(r#"{"items": []}"#), FailureKind::Format),
        (Source::Body("not json"), FailureKind::Catalog),
        (Source::Body(r#"[7]"#), FailureKind::Catalog),
    ] {
        let outcome = block_on(load_catalog(&source, View::Market, false, &Timings::standard()));
        assert!(!outcome.is_success());
        assert_eq!(outcome.failure.as_ref().map(CatalogError::kind), Some(kind));
        assert_eq!(outcome.plan, RenderPlan::Empty(EmptyState::NoGifts));

        let message = outcome.notice_message().unwrap();
        assert!(message.starts_with(LOAD_ERROR_PREFIX));
        slot.show(message, false);
    }
    // Only the latest failure stays on screen.
    assert!(slot.current().unwrap().message.contains("malformed record"));
}

#[test]
fn empty_partitions_use_view_specific_placeholders() {
    let timings = Timings::standard();
    let only_owned = r#"[{"name":"Bear"}]"#;
    let market = block_on(load_catalog(&Source::Body(only_owned), View::Market, false, &timings));
    assert_eq!(market.plan.empty_state(), Some(EmptyState::NoneAvailable));
    assert!(market.is_success());

    let owned = block_on(load_catalog(&Source::Body("[]"), View::Owned, false, &timings));
    assert_eq!(owned.plan.empty_state(), Some(EmptyState::NoGifts));
}
