//! Rule listing command.

use anyhow::Result;
use urlrisk_core::Scanner;

use crate::output;

pub fn execute() -> Result<()> {
    output::print_rules_table(Scanner::default().rules());
    Ok(())
}
