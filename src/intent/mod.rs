mod responses;

use crate::models::profile::Profile;
use log::debug;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Contact,
    Venture,
    Specialty,
    References,
    Help,
}

impl Intent {
    /// Evaluation order of the rule set. The first matching rule wins.
    pub const ORDER: [Intent; 11] = [
        Intent::Greeting,
        Intent::About,
        Intent::Experience,
        Intent::Skills,
        Intent::Projects,
        Intent::Education,
        Intent::Contact,
        Intent::Venture,
        Intent::Specialty,
        Intent::References,
        Intent::Help,
    ];
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Greeting => "greeting",
            Intent::About => "about",
            Intent::Experience => "experience",
            Intent::Skills => "skills",
            Intent::Projects => "projects",
            Intent::Education => "education",
            Intent::Contact => "contact",
            Intent::Venture => "venture",
            Intent::Specialty => "specialty",
            Intent::References => "references",
            Intent::Help => "help",
        };
        f.write_str(name)
    }
}

const GREETING_TRIGGERS: &[&str] = &["hello", "hey", "greetings"];
const EXPERIENCE_TRIGGERS: &[&str] = &["experience", "work", "jobs", "career", "employment"];
const SKILLS_TRIGGERS: &[&str] = &[
    "skills",
    "technologies",
    "expertise",
    "languages",
    "frameworks",
];
const PROJECTS_TRIGGERS: &[&str] = &["projects", "built", "portfolio", "applications", "work"];
const EDUCATION_TRIGGERS: &[&str] = &["education", "degree", "university", "school", "studies"];
const CONTACT_TRIGGERS: &[&str] = &[
    "contact",
    "email",
    "phone",
    "reach",
    "get in touch",
    "hire",
];
const REFERENCES_TRIGGERS: &[&str] = &["references", "recommendations", "referees"];
const HELP_TRIGGERS: &[&str] = &["help", "what can you do", "capabilities", "assist"];

/// A trigger set paired with the intent whose response it selects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntentRule {
    pub intent: Intent,
    pub triggers: Vec<String>,
}

impl IntentRule {
    pub fn new<I, S>(intent: Intent, triggers: I) -> Self where I: IntoIterator<Item = S>, S: AsRef<str> {
        let triggers = triggers
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { intent, triggers }
    }

    /// Plain substring containment, so a short trigger such as "ai" also
    /// fires inside longer words ("email", "explain").
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|trigger| normalized.contains(trigger.as_str()))
    }
}

pub fn build_rules(profile: &Profile) -> Vec<IntentRule> {
    let first = profile.first_name().to_lowercase();
    Intent::ORDER.iter()
        .map(|intent| {
            match intent {
                Intent::Greeting => IntentRule::new(*intent, GREETING_TRIGGERS),
                Intent::About =>
                    IntentRule::new(
                        *intent,
                        [
                            format!("tell me about {}", first),
                            format!("who is {}", first),
                            format!("about {}", first),
                            format!("{} background", first),
                            "profile".to_string(),
                        ]
                    ),
                Intent::Experience => IntentRule::new(*intent, EXPERIENCE_TRIGGERS),
                Intent::Skills => IntentRule::new(*intent, SKILLS_TRIGGERS),
                Intent::Projects => IntentRule::new(*intent, PROJECTS_TRIGGERS),
                Intent::Education => IntentRule::new(*intent, EDUCATION_TRIGGERS),
                Intent::Contact => IntentRule::new(*intent, CONTACT_TRIGGERS),
                Intent::Venture =>
                    IntentRule::new(
                        *intent,
                        profile.venture
                            .as_ref()
                            .map(|v| v.triggers.clone())
                            .unwrap_or_default()
                    ),
                Intent::Specialty =>
                    IntentRule::new(
                        *intent,
                        profile.specialty
                            .as_ref()
                            .map(|s| s.triggers.clone())
                            .unwrap_or_default()
                    ),
                Intent::References => IntentRule::new(*intent, REFERENCES_TRIGGERS),
                Intent::Help => IntentRule::new(*intent, HELP_TRIGGERS),
            }
        })
        .collect()
}

/// Produces the assistant's reply for one user utterance.
pub trait Responder: Send + Sync {
    fn respond(&self, input: &str) -> String;
}

/// Maps one utterance to exactly one canned response built from the profile.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    profile: Arc<Profile>,
    rules: Vec<IntentRule>,
    fallback: String,
}

impl IntentClassifier {
    pub fn new(profile: Arc<Profile>) -> Self {
        let rules = build_rules(&profile);
        let fallback = responses::fallback(&profile);
        Self { profile, rules, fallback }
    }

    pub fn profile(&self) -> &Arc<Profile> {
        &self.profile
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn classify(&self, input: &str) -> Option<Intent> {
        let normalized = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.intent)
    }

    pub fn respond(&self, input: &str) -> String {
        match self.classify(input) {
            Some(intent) => {
                debug!("Matched intent '{}'", intent);
                responses::render(intent, &self.profile)
            }
            None => {
                debug!("No intent matched, using fallback");
                self.fallback.clone()
            }
        }
    }

    pub fn quick_questions(&self) -> Vec<String> {
        let first = self.profile.first_name();
        let mut questions = vec![
            format!("Tell me about {}", first),
            format!("What's {}'s experience?", first),
            format!("What are {}'s skills?", first)
        ];
        if let Some(venture) = &self.profile.venture {
            questions.push(format!("Tell me about {}", venture.name));
        }
        questions.push(format!("What projects has {} built?", first));
        questions.push(format!("How can I contact {}?", first));
        questions
    }
}

impl Responder for IntentClassifier {
    fn respond(&self, input: &str) -> String {
        IntentClassifier::respond(self, input)
    }
}
