//! Folio core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod share;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use share::{share_intent_url, SHARE_CAPTION};
pub use state::{AppState, Generation};
pub use update::update;
pub use view_model::AppViewModel;
