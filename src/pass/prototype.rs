//! Prototype cloning of passes

use tracing::{trace, warn};

use crate::pass::Pass;
use crate::types::{IdSource, PassId};

/// Ids drawn from the caller's source before falling back to a random id
const MAX_ID_ATTEMPTS: usize = 8;

/// Duplicate `source` into an independent pass with a fresh id
///
/// Event info, holder, email, role, access level and permissions are copied;
/// the permission set is a separate copy. The QR payload is recomputed for the
/// new id before returning. Holder and email are not reset here.
///
/// If `ids` keeps returning the source's id, a random v4 id is used instead
/// after a bounded number of draws.
pub fn clone_pass(source: &Pass, ids: &mut dyn IdSource) -> Pass {
    let id = fresh_id(source.id, ids);

    let mut copy = Pass {
        id,
        event_name: source.event_name.clone(),
        event_date: source.event_date.clone(),
        venue: source.venue.clone(),
        holder_name: source.holder_name.clone(),
        email: source.email.clone(),
        role: source.role,
        access_level: source.access_level,
        permissions: source.permissions.clone(),
        qr_payload: String::new(),
    };
    copy.regenerate_qr_payload();

    trace!(source = %source.id, clone = %copy.id, "Cloned pass");
    copy
}

/// Draw an id different from `taken`
fn fresh_id(taken: PassId, ids: &mut dyn IdSource) -> PassId {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = ids.next_id();
        if id != taken {
            return id;
        }
    }

    warn!(%taken, "Id source keeps repeating the source id; using a random id");
    loop {
        let id = PassId::new();
        if id != taken {
            return id;
        }
    }
}
