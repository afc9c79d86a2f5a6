//! Record identifiers.
//!
//! Websites and keywords are identified by strings on the wire. Ids minted
//! by this server are UUID v7 so they sort by creation time.

use uuid::Uuid;

/// Mint a new time-ordered record id.
pub fn new_record_id() -> String {
    Uuid::now_v7().to_string()
}
