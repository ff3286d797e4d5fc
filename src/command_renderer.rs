use crate::as_paths::ASPath;
use crate::churn_engine::ChurnDecision;
use crate::shared::PeerIdentity;

/// Formats decisions as ExaBGP-style API commands. Downstream processes
/// parse these lines, so spacing (including inside the brackets) is fixed.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    pub identity: PeerIdentity,
    pub next_hop: String,
}

impl CommandRenderer {
    pub fn new(identity: PeerIdentity, next_hop: impl Into<String>) -> Self {
        CommandRenderer {
            identity,
            next_hop: next_hop.into(),
        }
    }

    pub fn render(&self, decision: &ChurnDecision) -> String {
        match decision {
            ChurnDecision::Announce { prefix, as_path } => self.render_announce(prefix, as_path),
            ChurnDecision::Withdraw { prefix } => self.render_withdraw(prefix),
        }
    }

    pub fn render_announce(&self, prefix: &str, as_path: &ASPath) -> String {
        format!(
            "neighbor {} announce route {} next-hop {} as-path [ {} {} ]",
            self.identity.peer,
            prefix,
            self.next_hop,
            self.identity.local_as,
            join_hops(as_path)
        )
    }

    pub fn render_withdraw(&self, prefix: &str) -> String {
        format!(
            "neighbor {} withdraw route {} next-hop self",
            self.identity.peer, prefix
        )
    }
}

// The local AS is followed by a separator even when the path is empty, so an
// empty path leaves two spaces before the closing bracket.
fn join_hops(as_path: &ASPath) -> String {
    as_path
        .hops()
        .iter()
        .map(|asn| asn.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
