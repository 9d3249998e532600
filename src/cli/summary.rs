use std::path::Path;

use crate::display::display_summary;
use crate::models::{PlanSummary, Variant};

use super::{build_parser, fail, read_plan, ConfigArg};

pub fn show_summary(plan: &Path, variant: Option<Variant>, config: &ConfigArg) {
    let user_config = config.load();
    let variant = variant.unwrap_or(user_config.variant);

    let markdown = match read_plan(plan) {
        Ok(m) => m,
        Err(e) => fail(e),
    };

    let weeks = build_parser(variant, &user_config).parse(&markdown);
    display_summary(&PlanSummary::from_weeks(&weeks));
}
