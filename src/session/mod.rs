use std::fmt;

pub const PATIENTS: [&str; 4] = [
    "Emma Johnson (Pediatric)",
    "Michael Smith (Cardiology)",
    "Sarah Williams (Orthopedic)",
    "James Brown (General)",
];

pub const DEFAULT_PATIENT: &str = PATIENTS[0];

pub const DEFAULT_REPLY: &str = "I'm your Hospital AI Assistant. How can I help you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Counters shown in the sidebar. Nothing increments them yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentStats {
    pub total_queries: u32,
    pub triage_requests: u32,
    pub bookings: u32,
}

pub fn mode_label(is_local_mode: bool) -> &'static str {
    if is_local_mode {
        "Local Testing"
    } else {
        "Production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_label_flips_and_returns_after_double_toggle() {
        let mut mode = true;
        let original = mode_label(mode);
        assert_eq!(original, "Local Testing");

        mode = !mode;
        assert_eq!(mode_label(mode), "Production");

        mode = !mode;
        assert_eq!(mode_label(mode), original);
    }

    #[test]
    fn agent_stats_start_at_zero() {
        let stats = AgentStats::default();
        assert_eq!(stats.total_queries, 0);
        assert_eq!(stats.triage_requests, 0);
        assert_eq!(stats.bookings, 0);
    }

    #[test]
    fn message_constructors_set_role() {
        assert_eq!(Message::user("fever").role, Role::User);
        assert_eq!(Message::assistant("hi").role.to_string(), "assistant");
    }

    #[test]
    fn default_patient_is_first_in_roster() {
        assert_eq!(DEFAULT_PATIENT, "Emma Johnson (Pediatric)");
        assert_eq!(PATIENTS.len(), 4);
    }
}
