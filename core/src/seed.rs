use crate::model::{Incident, Severity};

/// Default records shown before any incident is reported. A real deployment
/// would replace this provider with an actual data source; the store only
/// depends on receiving an ordered `Vec<Incident>`.
pub fn seed_incidents() -> Vec<Incident> {
    vec![
        Incident::new(
            1,
            "Biased Recommendation Algorithm",
            "Algorithm consistently favored certain demographics in job recommendations, \
             leading to potential discrimination in hiring processes.",
            Severity::Medium,
            "2025-03-15T10:00:00Z",
        ),
        Incident::new(
            2,
            "LLM Hallucination in Critical Info",
            "LLM provided incorrect safety procedure information in a medical context, \
             potentially endangering patient care.",
            Severity::High,
            "2025-04-01T14:30:00Z",
        ),
        Incident::new(
            3,
            "Minor Data Leak via Chatbot",
            "Chatbot inadvertently exposed non-sensitive user metadata through \
             conversation history.",
            Severity::Low,
            "2025-03-20T09:15:00Z",
        ),
    ]
}
