//! Value checks run after the config is parsed.
//!
//! Every problem is collected, so a single error names all bad keys.

mod assistant;
mod helpers;
mod portfolio;


use crate::schema::FolioConfig;
use folio_common::ConfigError;

pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
    let mut problems = Vec::new();
    assistant::validate_assistant(&mut problems, config);
    portfolio::validate_portfolio(&mut problems, config);

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(problems.join("; ")))
    }
}
