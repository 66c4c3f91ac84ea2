//! Branch names and HEAD states

pub mod branch_name;
pub mod head;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch HEAD points at in a freshly initialised repository
pub const DEFAULT_BRANCH: &str = "main";
