use super::Intent;
use crate::models::profile::Profile;

pub(crate) fn render(intent: Intent, profile: &Profile) -> String {
    match intent {
        Intent::Greeting => greeting(profile),
        Intent::About => about(profile),
        Intent::Experience => experience(profile),
        Intent::Skills => skills(profile),
        Intent::Projects => projects(profile),
        Intent::Education => education(profile),
        Intent::Contact => contact(profile),
        Intent::Venture => venture(profile),
        Intent::Specialty => specialty(profile),
        Intent::References => references(profile),
        Intent::Help => help(profile),
    }
}

pub(crate) fn fallback(profile: &Profile) -> String {
    let first = profile.first_name();
    let mut text = format!(
        "I'm here to help you learn about {}! Try asking about {}'s background, experience, skills, projects, or how to get in touch.",
        profile.personal.name,
        first
    );
    let mut extras = Vec::new();
    if let Some(venture) = &profile.venture {
        extras.push(format!("the current work at {}", venture.name));
    }
    if let Some(specialty) = &profile.specialty {
        extras.push(format!("{} experience", specialty.topic));
    }
    if !extras.is_empty() {
        text.push_str(&format!(" You can also ask about {}.", join_with_and(&extras)));
    }
    text
}

fn greeting(profile: &Profile) -> String {
    format!(
        "Hello! I'm your AI assistant for {}. I can help you learn about {}'s background, experience, and projects. What would you like to know?",
        profile.personal.name,
        profile.first_name()
    )
}

fn about(profile: &Profile) -> String {
    let mut text = format!(
        "Here's an overview of {}, {}:\n\n{}",
        profile.personal.name,
        profile.personal.title,
        profile.personal.bio
    );
    if let Some(venture) = &profile.venture {
        text.push_str(
            &format!(
                "\n\n{} is currently {} at {}.",
                profile.first_name(),
                venture.role,
                venture.name
            )
        );
    }
    text
}

fn experience(profile: &Profile) -> String {
    let first = profile.first_name();
    let Some(latest) = profile.experience.first() else {
        return format!("{} hasn't listed any professional experience yet.", first);
    };
    let list = bullets(
        profile.experience
            .iter()
            .map(|exp| format!("{} at {} ({})", exp.role, exp.organization, exp.period))
    );
    format!(
        "{}'s professional experience includes:\n\n{}\n\n{}'s most recent role is {} at {}.",
        first,
        list,
        first,
        latest.role,
        latest.organization
    )
}

fn skills(profile: &Profile) -> String {
    let first = profile.first_name();
    let groups = profile.skills_by_category();
    if groups.is_empty() {
        return format!("{} hasn't listed any skills yet.", first);
    }
    let sections = groups
        .iter()
        .map(|(category, members)| {
            let entries = members
                .iter()
                .map(|skill| format!("{} ({})", skill.name, skill.level))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}", category, entries)
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{}'s technical skills include:\n\n{}", first, sections)
}

fn projects(profile: &Profile) -> String {
    let first = profile.first_name();
    if profile.projects.is_empty() {
        return format!("{} hasn't published any projects yet.", first);
    }
    let list = bullets(
        profile.projects
            .iter()
            .map(|p| format!("{} ({}): {}", p.name, p.category, p.description))
    );
    format!("{} has worked on several projects:\n\n{}", first, list)
}

fn education(profile: &Profile) -> String {
    let first = profile.first_name();
    if profile.education.is_empty() {
        return format!("{} hasn't listed any education yet.", first);
    }
    let list = bullets(
        profile.education
            .iter()
            .map(|edu| format!("{}: {} ({})", edu.institution, edu.program, edu.period))
    );
    format!("{}'s education includes:\n\n{}", first, list)
}

fn contact(profile: &Profile) -> String {
    let first = profile.first_name();
    let personal = &profile.personal;
    let mut text = format!("You can reach {} at:\n\n📧 Email: {}", first, personal.email);
    if let Some(phone) = &personal.phone {
        text.push_str(&format!("\n📱 Phone: {}", phone));
    }
    for link in profile.social.iter().filter(|l| !l.url.starts_with("tel:")) {
        text.push_str(&format!("\n🔗 {}: {}", link.label, link.url));
    }
    if !profile.availability.is_empty() {
        text.push_str(
            &format!(
                "\n\n{} is available for:\n{}",
                first,
                bullets(profile.availability.iter().cloned())
            )
        );
    }
    text
}

fn venture(profile: &Profile) -> String {
    match &profile.venture {
        Some(venture) =>
            format!(
                "{} is currently the {} of {}, {}",
                profile.first_name(),
                venture.role,
                venture.name,
                venture.summary
            ),
        None => fallback(profile),
    }
}

fn specialty(profile: &Profile) -> String {
    let Some(specialty) = &profile.specialty else {
        return fallback(profile);
    };
    let first = profile.first_name();
    let mut text = format!("{} has extensive {} experience", first, specialty.topic);
    if specialty.highlights.is_empty() {
        text.push('.');
    } else {
        text.push_str(
            &format!(", including:\n\n{}", bullets(specialty.highlights.iter().cloned()))
        );
    }
    if !specialty.related_projects.is_empty() {
        text.push_str(
            &format!(
                "\n\n{} has worked on projects like {}.",
                first,
                join_with_and(&specialty.related_projects)
            )
        );
    }
    text
}

fn references(profile: &Profile) -> String {
    let first = profile.first_name();
    if profile.references.is_empty() {
        return format!("References for {} are available on request.", first);
    }
    let list = bullets(
        profile.references
            .iter()
            .map(|r| format!("{} - {} ({})", r.name, r.title, r.phone))
    );
    format!("{}'s references include:\n\n{}", first, list)
}

fn help(profile: &Profile) -> String {
    let first = profile.first_name();
    let mut topics = vec![
        format!("{}'s background and education", first),
        "Work experience and current role".to_string(),
        "Technical skills and technologies".to_string(),
        "Projects and portfolio".to_string(),
        "Contact information and availability".to_string(),
        "References and recommendations".to_string()
    ];
    if let Some(venture) = &profile.venture {
        topics[1] = format!("Work experience and the current role at {}", venture.name);
    }
    format!(
        "I can help you learn about {}! Here's what I can tell you about:\n\n{}\n\nJust ask me anything about {}!",
        profile.personal.name,
        bullets(topics.into_iter()),
        first
    )
}

fn bullets(items: impl Iterator<Item = String>) -> String {
    items
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_with_and(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
