//! System instruction rendering from the portfolio profile.

use crate::schema::{FolioConfig, PortfolioConfig};

/// First whitespace-separated word of the owner's name.
pub fn first_name(owner: &str) -> &str {
    owner.split_whitespace().next().unwrap_or(owner)
}

/// Render the instruction that scopes the assistant to the owner's profile.
pub fn system_instruction(portfolio: &PortfolioConfig) -> String {
    let name = first_name(&portfolio.owner);
    let mut out = String::new();

    out.push_str(&format!(
        "You are an AI assistant for {name}'s portfolio website.\n\
         Your goal is to answer questions about {name}'s professional experience, projects, and skills.\n\
         Be professional, concise, and accurate.\n\n\
         **NOTE:** If asked anything not related to {name} and their profile, reply gracefully that \
         the assistant is only designed to answer questions on {name} and their profile.\n\n"
    ));

    out.push_str("Context:\n");
    push_line(&mut out, "Name", &portfolio.owner);
    push_line(&mut out, "Title", &portfolio.job_title);
    push_line(&mut out, "Tagline", &portfolio.tagline);
    push_line(&mut out, "Bio", &portfolio.bio.join(" "));
    push_line(&mut out, "Education", &portfolio.education);

    let skills: Vec<&str> = portfolio.skills.iter().map(|s| s.name.as_str()).collect();
    push_line(&mut out, "Skills", &skills.join(", "));

    push_line(&mut out, "Experience", &portfolio.experience);
    push_line(&mut out, "Previous Experience", &portfolio.previous_experience);

    let projects: Vec<String> = portfolio
        .projects
        .iter()
        .map(|p| {
            format!(
                "{}: {} (Tech: {})",
                p.title,
                p.description,
                p.technologies.join(", ")
            )
        })
        .collect();
    push_line(&mut out, "Projects", &projects.join("; "));

    push_line(&mut out, "Research Areas", &portfolio.research_areas.join(", "));
    push_line(&mut out, "Contact", &portfolio.contact_email);

    out
}

/// The instruction actually sent: the configured override, or the one
/// rendered from `[portfolio]`.
pub fn effective_instruction(config: &FolioConfig) -> String {
    match config.assistant.system_instruction.as_deref() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => system_instruction(&config.portfolio),
    }
}

fn push_line(out: &mut String, label: &str, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    out.push_str(label);
    out.push_str(": ");
    out.push_str(value);
    out.push('\n');
}
