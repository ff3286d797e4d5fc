use crate::as_paths::ASPath;
use crate::prefix_universe::Prefix;

/// One change to push to the peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChurnDecision {
    Announce { prefix: Prefix, as_path: ASPath },
    Withdraw { prefix: Prefix },
}

impl ChurnDecision {
    pub fn prefix(&self) -> &str {
        match self {
            ChurnDecision::Announce { prefix, .. } => prefix,
            ChurnDecision::Withdraw { prefix } => prefix,
        }
    }

    pub fn is_announce(&self) -> bool {
        matches!(self, ChurnDecision::Announce { .. })
    }

    pub fn is_withdraw(&self) -> bool {
        matches!(self, ChurnDecision::Withdraw { .. })
    }
}
