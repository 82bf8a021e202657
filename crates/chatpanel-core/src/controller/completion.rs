//! Results of spawned work, tagged with the epoch they started under.

use chatpanel_common::HostError;
use chatpanel_session::{SessionCredential, SessionError};

use crate::epoch::Epoch;

#[derive(Debug)]
pub enum Completion {
    /// A credential fetch finished.
    Credential {
        epoch: Epoch,
        result: Result<SessionCredential, SessionError>,
    },
    /// A fact forwarded to the host's action sink finished.
    FactForwarded {
        epoch: Epoch,
        fact_id: String,
        result: Result<(), HostError>,
    },
}

impl Completion {
    pub fn epoch(&self) -> Epoch {
        match self {
            Completion::Credential { epoch, .. } | Completion::FactForwarded { epoch, .. } => {
                *epoch
            }
        }
    }
}
