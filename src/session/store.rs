use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

use crate::analysis::{Actor, AgentAnalysis, AgentMap};

/// Last crisis analysis per actor, for one interactive session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    agents: AgentMap,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole mapping. Actors missing from `agents` are dropped, not kept.
    pub fn set(&mut self, agents: AgentMap) {
        self.agents = agents;
    }

    pub fn get(&self, actor: Actor) -> Option<&AgentAnalysis> {
        self.agents.get(&actor)
    }

    pub fn clear(&mut self) {
        self.agents.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }
}

/// Shared handle to one session's state.
///
/// Locks are taken for a single read or write and never held across an await,
/// so overlapping workflows see last-write-wins semantics.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<SessionState>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, agents: AgentMap) {
        self.inner.write().unwrap_or_else(PoisonError::into_inner).set(agents);
    }

    /// Cloned out so the caller never holds the lock.
    pub fn get(&self, actor: Actor) -> Option<AgentAnalysis> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(actor)
            .cloned()
    }

    pub fn clear(&self) {
        self.inner.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).is_empty()
    }

    pub fn snapshot(&self) -> SessionState {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Tabs idle this long are dropped on the next page load.
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);
/// Upper bound on live tabs; the least recently used one goes first.
pub const MAX_SESSIONS: usize = 1024;

#[derive(Debug)]
struct Entry {
    handle: SessionHandle,
    last_touched: Instant,
}

/// Session handles keyed by the id each browser tab is given on page load.
///
/// Only ids minted by [`SessionRegistry::open`] are ever stored. The map is
/// pruned on every `open`, so it holds at most `capacity` entries.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
    capacity: usize,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_limits(SESSION_IDLE_TTL, MAX_SESSIONS)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(idle_ttl: Duration, capacity: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
            capacity: capacity.max(1),
        }
    }

    /// Mints an id and registers an empty session under it.
    pub fn open(&self) -> (Uuid, SessionHandle) {
        let id = Uuid::new_v4();
        let handle = SessionHandle::new();
        let now = Instant::now();

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_touched) < self.idle_ttl);

        while sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_touched)
                .map(|(id, _)| *id);
            match oldest {
                Some(oldest) => {
                    sessions.remove(&oldest);
                }
                None => break,
            }
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {} idle session(s), {} remain", evicted, sessions.len());
        }

        sessions.insert(
            id,
            Entry {
                handle: handle.clone(),
                last_touched: now,
            },
        );
        (id, handle)
    }

    /// Session registered under `id`, refreshed as recently used.
    ///
    /// An id this registry never minted (or has since evicted) gets a fresh,
    /// unregistered session, so callers cannot grow the map.
    pub fn resolve(&self, id: Uuid) -> SessionHandle {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        match sessions.get_mut(&id) {
            Some(entry) => {
                entry.last_touched = Instant::now();
                entry.handle.clone()
            }
            None => {
                debug!("Unknown session {}, using a detached session", id);
                SessionHandle::new()
            }
        }
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
