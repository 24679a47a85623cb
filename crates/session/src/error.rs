use client::BackendError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingZoningType,
    EmptySelection,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingZoningType => write!(f, "no zoning type chosen"),
            ValidationError::EmptySelection => write!(f, "no parcels selected"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BusyReason {
    SubmitInFlight,
}

/// Everything that can go wrong while handling an event.
///
/// None of these are fatal; each becomes a notification and the session
/// stays interactive.
#[derive(Debug)]
pub enum SessionError {
    /// Loading the parcel listing failed; the store is left empty.
    Fetch(BackendError),
    /// Submit was attempted without a zoning type or a selection.
    Validation(ValidationError),
    /// The backend rejected the update or could not be reached.
    Submit(BackendError),
    /// The action is disabled while other work is outstanding.
    Busy(BusyReason),
}

impl SessionError {
    /// Text shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::Fetch(_) => "Failed to load parcels. Please try again later.",
            SessionError::Validation(_) => "Please select parcels and zoning type!",
            SessionError::Submit(_) => "Failed to update zoning.",
            SessionError::Busy(BusyReason::SubmitInFlight) => "A zoning update is already in progress.",
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Fetch(e) => write!(f, "parcel fetch failed: {e}"),
            SessionError::Validation(e) => write!(f, "cannot submit: {e}"),
            SessionError::Submit(e) => write!(f, "zoning update failed: {e}"),
            SessionError::Busy(BusyReason::SubmitInFlight) => {
                write!(f, "zoning update already in flight")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Fetch(e) | SessionError::Submit(e) => Some(e),
            SessionError::Validation(e) => Some(e),
            SessionError::Busy(_) => None,
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(e: ValidationError) -> Self {
        SessionError::Validation(e)
    }
}
