use crate::{CheckStatus, WhitelistSource};

pub const MSG_WHITELISTED_A: &str = "Welcome Priest, You're in a High House";
pub const MSG_WHITELISTED_B: &str =
    "Welcome my Disciple. You're worthy enough to rise in the ranks.";
pub const MSG_NOT_WHITELISTED: &str = "Sorry, you are not worthy yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub loading: bool,
    pub status: CheckStatus,
    pub source: Option<WhitelistSource>,
    pub can_submit: bool,
    pub list_sizes: (usize, usize),
    pub dirty: bool,
}

impl AppViewModel {
    /// The themed verdict line for a resolved check; None while unresolved.
    pub fn verdict_message(&self) -> Option<&'static str> {
        match (self.status, self.source) {
            (CheckStatus::Whitelisted, Some(WhitelistSource::A)) => Some(MSG_WHITELISTED_A),
            (CheckStatus::Whitelisted, Some(WhitelistSource::B)) => Some(MSG_WHITELISTED_B),
            (CheckStatus::NotWhitelisted, _) => Some(MSG_NOT_WHITELISTED),
            _ => None,
        }
    }
}
