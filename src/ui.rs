use console::style;

use crate::workflow::BumpOutcome;

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print the end-of-run summary.
pub fn display_outcome(outcome: &BumpOutcome, dry_run: bool) {
    let short_ref = if outcome.tag_ref.len() > 7 {
        &outcome.tag_ref[..7]
    } else {
        outcome.tag_ref.as_str()
    };

    if dry_run {
        display_status(&format!(
            "Dry run: would update {} file(s) and tag {} (HEAD is {})",
            outcome.files_updated, outcome.version, short_ref
        ));
        return;
    }

    if outcome.committed {
        display_success(&format!(
            "Committed {} file(s) at version {}",
            outcome.files_updated, outcome.version
        ));
    }
    display_success(&format!("Created tag {} ({})", outcome.version, short_ref));
}
