use crate::aggregate::session_detail;
use crate::cli::{load_table, print_json};
use crate::conf::load_config;
use crate::present::render_session;
use std::path::PathBuf;

/// Replay one session in chronological order.
pub fn session(session_id: &str, path: PathBuf, json: bool) -> anyhow::Result<()> {
    let cfg = load_config(&path)?;
    let (table, _) = load_table(&cfg)?;

    let records = session_detail(&table, session_id);
    tracing::debug!(session_id, events = records.len(), "session loaded");

    if json {
        print_json(&records)?;
    } else {
        print!("{}", render_session(session_id, &records));
    }

    Ok(())
}
