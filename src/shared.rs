use std::fmt;
use std::io;
use std::path::PathBuf;

pub type ASN = u32;

/// The session this process speaks for: our own AS and the peer the
/// commands are addressed to. Both are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerIdentity {
    pub peer: String,
    pub local_as: String,
}

impl PeerIdentity {
    pub fn new(peer: impl Into<String>, local_as: impl Into<String>) -> Self {
        PeerIdentity {
            peer: peer.into(),
            local_as: local_as.into(),
        }
    }
}

impl fmt::Display for PeerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (local AS {})", self.peer, self.local_as)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Warmup,
    Steady,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Warmup => "WARMUP",
            Phase::Steady => "STEADY",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not parse configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: PathBuf },
    #[error("{what}: minimum {min} is larger than maximum {max}")]
    InvertedBounds {
        what: &'static str,
        min: usize,
        max: usize,
    },
    #[error("{key} is out of range: {value}")]
    OutOfRange { key: &'static str, value: f64 },
    #[error("At least one AS path is required")]
    EmptyPathPool,
}

#[derive(Debug, thiserror::Error)]
pub enum ChurnError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not emit command: {0}")]
    Emit(#[from] io::Error),
}
