//! Users
//!
//! Accounts live in an external identity service; this crate only needs a typed
//! handle to attribute product views.

use crate::uuids::TypedUuid;

/// User marker
#[derive(Debug)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;
