//! Execute message handlers, split by concern.

mod admin;
mod allowlist;
mod incoming;
mod outgoing;

pub use admin::{
    execute_accept_admin, execute_cancel_admin_proposal, execute_pause, execute_propose_admin,
    execute_recover_asset, execute_unpause, execute_update_config,
};
pub use allowlist::{execute_set_chain_allowed, execute_set_sender_allowed};
pub use incoming::{execute_receive, handle_convert_reply, CONVERT_REPLY_ID};
pub use outgoing::execute_transfer;
