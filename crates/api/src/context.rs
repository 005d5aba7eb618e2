use mesto_core::UserId;

/// Authenticated identity for a request.
///
/// Inserted as a request extension by the auth middleware after token
/// verification. This is immutable, lives only for the request, and is the
/// only identity the self-referential (`/me`) handlers ever operate on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    user_id: UserId,
}

impl CurrentUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
