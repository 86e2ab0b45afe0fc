use thiserror::Error;

/// Unified error type for collaborator interactions.
///
/// Every failure a controller operation can observe maps to one of these
/// variants. None of them escape to the controller's caller; they are
/// converted at the operation boundary into a feedback report.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ManagerError {
    /// No cookie bridge collaborator was registered for a query, removal,
    /// or update request.
    #[error("Cookie bridge is not available")]
    BridgeUnavailable,
    /// No export collaborator was registered for an export request.
    #[error("Export module is not available")]
    ExportUnavailable,
    /// A registered collaborator accepted the request but its result failed.
    /// Carries the collaborator's own message.
    #[error("{message}")]
    Rejected { message: String },
}

impl ManagerError {
    /// Create a [`ManagerError::Rejected`] from any displayable cause.
    pub fn rejected(message: impl Into<String>) -> Self {
        ManagerError::Rejected {
            message: message.into(),
        }
    }

    /// Short classifier used in analytics reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ManagerError::BridgeUnavailable => "bridge-unavailable",
            ManagerError::ExportUnavailable => "export-unavailable",
            ManagerError::Rejected { .. } => "collaborator-rejected",
        }
    }
}
