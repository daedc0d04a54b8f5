use crate::view_model::AppViewModel;
use crate::AddressSet;

pub type CheckId = u64;

/// Lifecycle of a membership check. `LoadFailed` is terminal: it is entered
/// only when both allowlists fail to load, and no submission leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckStatus {
    #[default]
    Idle,
    Checking,
    Whitelisted,
    NotWhitelisted,
    LoadFailed,
}

/// Which allowlist produced a positive match. Meaningful only while the
/// status is `Whitelisted`; list A wins when an address is on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitelistSource {
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingCheck {
    check_id: CheckId,
    address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    loading: bool,
    load_requested: bool,
    allowlist_a: AddressSet,
    allowlist_b: AddressSet,
    input: String,
    status: CheckStatus,
    source: Option<WhitelistSource>,
    next_check_id: CheckId,
    pending: Option<PendingCheck>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            loading: true,
            load_requested: false,
            allowlist_a: AddressSet::default(),
            allowlist_b: AddressSet::default(),
            input: String::new(),
            status: CheckStatus::Idle,
            source: None,
            next_check_id: 0,
            pending: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            loading: self.loading,
            status: self.status,
            source: self.source,
            can_submit: !self.loading && self.status != CheckStatus::LoadFailed,
            list_sizes: (self.allowlist_a.len(), self.allowlist_b.len()),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    pub fn source(&self) -> Option<WhitelistSource> {
        self.source
    }

    /// Marks the one-shot load as requested. Returns false if already done.
    pub(crate) fn request_load(&mut self) -> bool {
        !std::mem::replace(&mut self.load_requested, true)
    }

    pub(crate) fn finish_loading(&mut self, a: AddressSet, b: AddressSet) {
        self.allowlist_a = a;
        self.allowlist_b = b;
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn fail_loading(&mut self) {
        self.loading = false;
        self.status = CheckStatus::LoadFailed;
        self.source = None;
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
    }

    /// Starts a check for the trimmed input. Returns the id of the new
    /// pending check, or None when the trimmed input is empty.
    ///
    /// The address is captured here, not at resolution, so edits made while
    /// a check is in flight cannot change its verdict.
    pub(crate) fn begin_check(&mut self) -> Option<CheckId> {
        let address = self.input.trim();
        if address.is_empty() {
            return None;
        }
        self.next_check_id += 1;
        let check_id = self.next_check_id;
        self.pending = Some(PendingCheck {
            check_id,
            address: address.to_owned(),
        });
        self.status = CheckStatus::Checking;
        self.source = None;
        self.dirty = true;
        Some(check_id)
    }

    /// Applies the verdict for a completed check. Resolutions that do not
    /// carry the id of the current pending check are stale and discarded,
    /// so overlapping submissions settle on the latest one.
    pub(crate) fn resolve_check(&mut self, check_id: CheckId) {
        if self.status != CheckStatus::Checking {
            return;
        }
        let pending = match &self.pending {
            Some(pending) if pending.check_id == check_id => pending,
            _ => return,
        };

        // List A is consulted first: an address on both lists reports A.
        if self.allowlist_a.contains(&pending.address) {
            self.status = CheckStatus::Whitelisted;
            self.source = Some(WhitelistSource::A);
        } else if self.allowlist_b.contains(&pending.address) {
            self.status = CheckStatus::Whitelisted;
            self.source = Some(WhitelistSource::B);
        } else {
            self.status = CheckStatus::NotWhitelisted;
            self.source = None;
        }
        self.pending = None;
        self.dirty = true;
    }
}
