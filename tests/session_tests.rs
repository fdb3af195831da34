use adversaryiq::analysis::{Actor, AgentAnalysis, AgentMap};
use adversaryiq::session::{SessionHandle, SessionRegistry, SessionState};
use std::time::Duration;
use uuid::Uuid;

fn spoken(text: &str) -> AgentAnalysis {
    AgentAnalysis {
        public_response: Some(text.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_get_before_any_submission_is_absent() {
    let state = SessionState::new();
    for actor in Actor::ALL {
        assert!(state.get(actor).is_none());
    }
    assert!(state.is_empty());
}

#[test]
fn test_set_replaces_without_merging() {
    let mut state = SessionState::new();
    let mut first = AgentMap::new();
    first.insert(Actor::Roosevelt, spoken("Speak softly."));
    first.insert(Actor::Gandhi, spoken("Calm."));
    state.set(first);

    let mut second = AgentMap::new();
    second.insert(Actor::Putin, spoken("Nyet."));
    state.set(second);

    assert_eq!(state.len(), 1);
    assert!(state.get(Actor::Roosevelt).is_none());
    assert_eq!(state.get(Actor::Putin), Some(&spoken("Nyet.")));
}

#[test]
fn test_clear_empties_state() {
    let handle = SessionHandle::new();
    let mut agents = AgentMap::new();
    agents.insert(Actor::Gandhi, spoken("Calm."));
    handle.set(agents);
    assert!(!handle.is_empty());

    handle.clear();
    assert!(handle.is_empty());
    assert!(handle.get(Actor::Gandhi).is_none());
}

#[test]
fn test_handles_share_one_state() {
    let handle = SessionHandle::new();
    let reader = handle.clone();

    let mut agents = AgentMap::new();
    agents.insert(Actor::Putin, spoken("Observe."));
    handle.set(agents);

    assert_eq!(reader.get(Actor::Putin), Some(spoken("Observe.")));
}

#[test]
fn test_registry_isolates_sessions() {
    let registry = SessionRegistry::new();
    let (first_id, first) = registry.open();
    let (second_id, second) = registry.open();
    assert_ne!(first_id, second_id);
    assert_eq!(registry.len(), 2);

    let mut agents = AgentMap::new();
    agents.insert(Actor::Roosevelt, spoken("Big stick."));
    first.set(agents);

    assert!(second.is_empty(), "Sessions must not share state");
    assert!(registry.resolve(first_id).get(Actor::Roosevelt).is_some());
    assert!(registry.resolve(second_id).is_empty());
}

#[test]
fn test_registry_resolves_unknown_id_to_fresh_session() {
    let registry = SessionRegistry::new();
    let id = Uuid::new_v4();

    let handle = registry.resolve(id);
    assert!(handle.is_empty());

    // A client-chosen id is never registered, so it does not persist
    let mut agents = AgentMap::new();
    agents.insert(Actor::Gandhi, spoken("Calm."));
    handle.set(agents);
    assert!(registry.resolve(id).is_empty());
    assert!(!registry.contains(id));
    assert!(registry.is_empty());
}

#[test]
fn test_unknown_ids_do_not_grow_registry() {
    let registry = SessionRegistry::new();
    let (minted, _) = registry.open();

    for _ in 0..10_000 {
        registry.resolve(Uuid::new_v4());
    }

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(minted));
}

#[test]
fn test_registry_cap_drops_least_recently_used() {
    let registry = SessionRegistry::with_limits(Duration::from_secs(3600), 3);
    let (first, _) = registry.open();
    std::thread::sleep(Duration::from_millis(5));
    let (second, _) = registry.open();
    std::thread::sleep(Duration::from_millis(5));
    let (third, _) = registry.open();
    std::thread::sleep(Duration::from_millis(5));

    // Touching the first tab makes the second one the oldest
    registry.resolve(first);
    std::thread::sleep(Duration::from_millis(5));
    let (fourth, _) = registry.open();

    assert_eq!(registry.len(), 3);
    assert!(registry.contains(first));
    assert!(!registry.contains(second));
    assert!(registry.contains(third));
    assert!(registry.contains(fourth));

    for _ in 0..100 {
        registry.open();
    }
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_idle_sessions_are_evicted_on_open() {
    let registry = SessionRegistry::with_limits(Duration::from_millis(20), 100);
    let (stale, handle) = registry.open();
    let mut agents = AgentMap::new();
    agents.insert(Actor::Putin, spoken("Observe."));
    handle.set(agents);

    std::thread::sleep(Duration::from_millis(50));
    let (fresh, _) = registry.open();

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(fresh));
    assert!(!registry.contains(stale));
    // The evicted tab's id now resolves to an empty, detached session
    assert!(registry.resolve(stale).is_empty());
}
