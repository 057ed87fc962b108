//! Categories CLI command

use crate::display::format_category_tree;
use crate::error::ApportionResult;
use crate::models::preset_categories;

/// Print the preset category tree grouped by spending group
pub fn handle_categories_command() -> ApportionResult<()> {
    print!("{}", format_category_tree(&preset_categories()));
    Ok(())
}
