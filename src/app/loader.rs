//! Loader - the load/refresh lifecycle shared by every screen.
//!
//! Each loader owns one data slot and at most one in-flight fetch, tracked
//! by request id. Responses carrying a stale id are discarded, so overlapping
//! fetches cannot clobber each other. On failure the previous data stays
//! visible; the flags are cleared either way.

/// Per-screen fetch state: a data slot plus loading/refreshing flags.
#[derive(Clone, Debug)]
pub struct Loader<T> {
    data: Option<T>,
    is_loading: bool,
    is_refreshing: bool,
    pending_id: Option<u64>,
    loaded_once: bool,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Loader {
            data: None,
            is_loading: false,
            is_refreshing: false,
            pending_id: None,
            loaded_once: false,
        }
    }
}

impl<T> Loader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    /// True while either flag is raised
    pub fn busy(&self) -> bool {
        self.is_loading || self.is_refreshing
    }

    pub fn in_flight(&self) -> bool {
        self.pending_id.is_some()
    }

    /// True once a fetch has succeeded in this app lifetime
    pub fn loaded_once(&self) -> bool {
        self.loaded_once
    }

    /// Whether a response id belongs to this loader's pending fetch
    pub fn matches(&self, id: u64) -> bool {
        self.pending_id == Some(id)
    }

    /// Start a first load (spinner replaces content). Refused while a fetch
    /// is already in flight.
    pub fn begin_load(&mut self, id: u64) -> bool {
        if self.in_flight() {
            return false;
        }
        self.pending_id = Some(id);
        self.is_loading = true;
        true
    }

    /// Start a refresh (stale data stays visible). Refused while a fetch is
    /// already in flight.
    pub fn begin_refresh(&mut self, id: u64) -> bool {
        if self.in_flight() {
            return false;
        }
        self.pending_id = Some(id);
        self.is_refreshing = true;
        true
    }

    /// Apply a successful fetch. Returns false and changes nothing when the
    /// id does not match the pending fetch.
    pub fn succeed(&mut self, id: u64, value: T) -> bool {
        if !self.matches(id) {
            return false;
        }
        self.data = Some(value);
        self.loaded_once = true;
        self.clear_flags();
        true
    }

    /// Apply a failed fetch: the data slot keeps its previous value, the
    /// flags are cleared. Returns false when the id does not match.
    pub fn fail(&mut self, id: u64) -> bool {
        if !self.matches(id) {
            return false;
        }
        self.clear_flags();
        true
    }

    fn clear_flags(&mut self) {
        self.is_loading = false;
        self.is_refreshing = false;
        self.pending_id = None;
    }
}
