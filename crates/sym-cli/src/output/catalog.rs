//! Text rendering for the `conditions` and `sessions` listings.

use std::fmt::Write;

use sym_core::entities::{Condition, SymptomSession};
use sym_core::responses::{ConditionProfile, SessionDetail};

use super::TextRender;

impl TextRender for Vec<Condition> {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return "No conditions loaded".to_string();
        }
        let mut out = String::new();
        for condition in self {
            let _ = write!(out, "{} [{}]", condition.name, condition.emergency_level);
            if let Some(category) = &condition.category {
                let _ = write!(out, " {category}");
            }
            out.push('\n');
        }
        out.truncate(out.trim_end().len());
        out
    }
}

impl TextRender for ConditionProfile {
    fn render_text(&self) -> String {
        let c = &self.condition;
        let mut out = format!("{} (emergency level: {})", c.name, c.emergency_level);
        if let Some(description) = &c.description {
            let _ = write!(out, "\n  {description}");
        }
        out.push_str("\nSymptoms:");
        if self.symptoms.is_empty() {
            out.push_str(" none");
        }
        for symptom in &self.symptoms {
            let _ = write!(out, "\n  {} ({:.2})", symptom.name, symptom.strength);
        }
        out.push_str("\nRules:");
        if self.rules.is_empty() {
            out.push_str(" none");
        }
        for rule in &self.rules {
            let _ = write!(
                out,
                "\n  {} [{}] confidence {:.2}",
                rule.rule_name, rule.rule_type, rule.confidence
            );
        }
        out
    }
}

fn session_line(out: &mut String, session: &SymptomSession) {
    let state = if session.is_completed() { "completed" } else { "open" };
    let _ = write!(
        out,
        "#{} {} {} [{}] confidence {:.2}",
        session.id,
        session.created_at.format("%Y-%m-%d %H:%M:%S"),
        state,
        session.symptoms_input.join(", "),
        session.confidence
    );
}

impl TextRender for Vec<SymptomSession> {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return "No sessions recorded".to_string();
        }
        let mut out = String::new();
        for (i, session) in self.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            session_line(&mut out, session);
        }
        out
    }
}

impl TextRender for SessionDetail {
    fn render_text(&self) -> String {
        let mut out = String::new();
        session_line(&mut out, &self.session);
        if let Some(urgency) = self.session.urgency {
            let _ = write!(out, "\n  urgency: {urgency}");
        }
        let _ = write!(out, "\n  predictions: {}", self.session.predictions);
        for call in &self.calls {
            let _ = write!(out, "\n  call {} {}", call.provider, call.endpoint);
            if let Some(ms) = call.response_time_ms {
                let _ = write!(out, " {ms}ms");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sym_core::enums::EmergencyLevel;
    use sym_core::responses::MappedSymptom;

    fn condition(name: &str) -> Condition {
        Condition {
            id: 1,
            name: name.to_string(),
            category: Some("respiratory".to_string()),
            emergency_level: EmergencyLevel::Medium,
            description: None,
            external_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn condition_list_shows_level_and_category() {
        let text = vec![condition("Influenza")].render_text();
        assert_eq!(text, "Influenza [medium] respiratory");
    }

    #[test]
    fn profile_lists_symptoms_and_empty_rules() {
        let profile = ConditionProfile {
            condition: condition("Influenza"),
            symptoms: vec![MappedSymptom {
                name: "fever".to_string(),
                strength: 0.9,
            }],
            rules: Vec::new(),
        };
        let text = profile.render_text();
        assert!(text.contains("fever (0.90)"), "{text}");
        assert!(text.ends_with("Rules: none"), "{text}");
    }

    #[test]
    fn empty_session_list_says_so() {
        assert_eq!(Vec::<SymptomSession>::new().render_text(), "No sessions recorded");
    }
}
