use crate::mavenization::domain::{OptionSet, TargetType};
use crate::mavenization::services::CoordinatePolicy;

/// MavenizeRequest - Internal request DTO for the mavenize use case
#[derive(Debug, Clone, Default)]
pub struct MavenizeRequest {
    /// Ordered pattern options consulted by every conversion step
    pub options: OptionSet,
    /// Naming rules for groupIds and versions
    pub coordinate_policy: CoordinatePolicy,
    /// Build target deciding whether embedded libraries are unwrapped
    pub target: TargetType,
}

impl MavenizeRequest {
    pub fn new(options: OptionSet, coordinate_policy: CoordinatePolicy, target: TargetType) -> Self {
        Self {
            options,
            coordinate_policy,
            target,
        }
    }
}
