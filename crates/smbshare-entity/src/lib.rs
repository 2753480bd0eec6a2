//! # smbshare-entity
//!
//! Domain model for SmbShare. A [`share::Share`] is the persisted record
//! describing one SMB share; the enums next to it classify its security
//! mode and the per-principal access levels.

pub mod share;
