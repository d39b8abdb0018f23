mod commit_msg;
mod pre_commit;

pub use commit_msg::{CommitMsgHook, msg_to_patch};
pub use pre_commit::PreCommitHook;
