//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Folio Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[assistant]
# model = "gemini-3-flash-preview"
# temperature = 0.7            # 0.0-2.0
# max_output_tokens = 2048     # 1-65536, unset = service default
# api_key_env = "API_KEY"      # environment variable holding the key
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# connect_timeout_secs = 10    # 1-600
# request_timeout_secs = 120   # 1-600
# system_instruction = "..."   # replaces the prompt built from [portfolio]

[portfolio]
# owner = "Jordan Avery"
# job_title = "Software Engineer"
# tagline = "Building dependable systems, one well-tested module at a time."
# bio = ["First paragraph.", "Second paragraph."]
# education = ""
# experience = ""
# previous_experience = ""
# research_areas = []
# contact_email = ""

# [[portfolio.skills]]
# name = "Rust"
# level = 90                   # 0-100
# category = "backend"         # frontend, backend, tools, design

# [[portfolio.projects]]
# title = "Portfolio Assistant"
# description = "A chat assistant that answers questions about my work."
# technologies = ["Rust", "Gemini"]
# github_url = ""
# live_url = ""

# [[portfolio.socials]]
# platform = "GitHub"
# url = "https://github.com/you"
# icon = "github"

[logging]
# level = "INFO"               # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
