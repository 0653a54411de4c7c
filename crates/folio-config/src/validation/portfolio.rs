use crate::schema::FolioConfig;

use super::helpers::{check_non_empty, check_range};

/// The owner must be named and skill levels are percentages.
pub(crate) fn validate_portfolio(errors: &mut Vec<String>, config: &FolioConfig) {
    check_non_empty(errors, "portfolio.owner", &config.portfolio.owner);

    for (i, skill) in config.portfolio.skills.iter().enumerate() {
        check_range(errors, &format!("portfolio.skills[{i}].level"), skill.level, 0..=100);
    }
}
