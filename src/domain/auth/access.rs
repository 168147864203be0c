use super::entities::SessionData;
use super::errors::AccessError;
use super::value_objects::Role;

/// The single role gate in front of every admin- or borrower-only
/// operation. No use case or handler performs its own ad hoc role check.
///
/// Authorized only when a session is present and carries exactly the
/// required role; a missing session and a wrong role are indistinguishable
/// to the caller.
pub fn require_role(
  session: Option<&SessionData>,
  role: Role,
) -> Result<&SessionData, AccessError> {
  match session {
    Some(data) if data.role == role => Ok(data),
    _ => Err(AccessError::Unauthorized),
  }
}
