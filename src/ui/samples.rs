use crate::theme::Accent;

#[derive(Debug, Clone, Copy)]
pub struct QueryGroup {
    pub category: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub queries: [&'static str; 3],
}

#[derive(Debug, Clone, Copy)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

pub const QUERY_GROUPS: [QueryGroup; 3] = [
    QueryGroup {
        category: "Medical Triage",
        icon: "⚕",
        accent: Accent::Rose,
        queries: [
            "My child has fever and cough",
            "I have chest pain and difficulty breathing",
            "Minor cut, should I come in?",
        ],
    },
    QueryGroup {
        category: "Appointments",
        icon: "📅",
        accent: Accent::Blue,
        queries: [
            "Book appointment for next Tuesday",
            "Check availability for pediatrics",
            "Cancel my appointment",
        ],
    },
    QueryGroup {
        category: "Information",
        icon: "🔔",
        accent: Accent::Amber,
        queries: [
            "Show my upcoming appointments",
            "Set a medication reminder",
            "When is my next checkup?",
        ],
    },
];

pub const QUICK_ACTIONS: [QuickAction; 2] = [
    QuickAction {
        title: "Medication Management",
        description: "Set reminders and track prescriptions",
        icon: "💊",
        accent: Accent::Blue,
    },
    QuickAction {
        title: "Appointment Scheduling",
        description: "Book, reschedule, or cancel appointments",
        icon: "📅",
        accent: Accent::Purple,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn groups_are_in_display_order() {
        let categories: Vec<&str> = QUERY_GROUPS.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec!["Medical Triage", "Appointments", "Information"]
        );
    }

    #[test]
    fn sample_queries_are_unique() {
        let all: Vec<&str> = QUERY_GROUPS.iter().flat_map(|g| g.queries).collect();
        let unique: BTreeSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(unique.len(), all.len());
    }
}
