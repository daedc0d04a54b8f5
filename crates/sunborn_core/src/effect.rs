use crate::CheckId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch both allowlist resources. Emitted at most once per session.
    LoadAllowlists,
    /// Wait the reveal delay, then echo the id back as `Msg::CheckResolved`.
    ScheduleResolve { check_id: CheckId },
}
