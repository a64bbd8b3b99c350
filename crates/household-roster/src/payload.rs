//! Submit Payload
//!
//! A member serializes as a JSON object keyed by field name, in field order.
//! The row id stays out of the payload.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::RosterResult;
use crate::roster::Member;

impl Serialize for Member {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells().len()))?;
        for cell in self.cells() {
            map.serialize_entry(&cell.header, &cell.value)?;
        }
        map.end()
    }
}

/// Compact JSON array of member records
pub fn serialize_members(members: &[Member]) -> RosterResult<String> {
    let json = serde_json::to_string(members)?;
    log::debug!("[SUBMIT] Serialized {} members ({} bytes)", members.len(), json.len());
    Ok(json)
}
