mod command;
mod runner;

pub use command::{
    BASE_ARGS, COMMIT_MSG_IGNORES, CheckerRequest, DEFAULT_PROGRAM, commit_msg_request,
    file_check_request,
};
pub use runner::{CheckerInvoker, CheckerOutput, SystemChecker};
