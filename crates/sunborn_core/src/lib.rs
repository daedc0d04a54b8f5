//! Sunborn core: pure state machine and view-model helpers.
mod address_set;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use address_set::AddressSet;
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, CheckId, CheckStatus, WhitelistSource};
pub use update::update;
pub use view_model::{
    AppViewModel, MSG_NOT_WHITELISTED, MSG_WHITELISTED_A, MSG_WHITELISTED_B,
};
