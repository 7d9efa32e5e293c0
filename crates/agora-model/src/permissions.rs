//! Capability bits embedded in a Space response.
//!
//! The server flattens the viewer's team/group capabilities into a single
//! bitfield; the client only inspects it, never writes it.

pub const SPACE_READ: i64 = 1 << 0;
pub const SPACE_WRITE: i64 = 1 << 1;
pub const SPACE_DELETE: i64 = 1 << 2;
pub const SPACE_ADMIN: i64 = 1 << 3;
