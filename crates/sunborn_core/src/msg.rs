use crate::{AddressSet, CheckId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App started; kicks off the one-shot allowlist load.
    Started,
    /// Both allowlist resources finished loading (a failed side arrives empty).
    ListsLoaded { a: AddressSet, b: AddressSet },
    /// Neither allowlist resource could be loaded.
    ListsFailed,
    /// User edited the wallet address input box.
    InputChanged(String),
    /// User submitted the current input for a membership check.
    CheckSubmitted,
    /// The reveal delay for a pending check elapsed.
    CheckResolved { check_id: CheckId },
    /// Fallback for placeholder wiring.
    NoOp,
}
