use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::Error;

const REF_PREFIX: &str = "refs/heads/";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> crate::Result<Self> {
        let name = name.into();
        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)?;

        if name.is_empty() || re.is_match(&name) {
            Err(Error::InvalidBranchName(name))
        } else {
            Ok(Self(name))
        }
    }

    /// Parse the target of a symbolic ref such as `refs/heads/main`
    pub fn try_parse_ref_path(ref_path: &str) -> crate::Result<Self> {
        let name = ref_path
            .strip_prefix(REF_PREFIX)
            .ok_or_else(|| Error::InvalidRef(format!("'{ref_path}' is not under {REF_PREFIX}")))?;

        Self::try_parse(name)
    }

    /// `refs/heads/<name>`, the value a symbolic HEAD stores
    pub fn to_ref_path(&self) -> String {
        format!("{REF_PREFIX}{}", self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
