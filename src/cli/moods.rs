use tabled::Table;

use crate::{config, info, management::MoodSelectorManager, types::MoodTableRow};

/// Lists the configured mood selectors and their current states. The
/// table is a pure projection of the control set; it never mutates it.
pub async fn moods() {
    let selector = MoodSelectorManager::new(config::moods());

    info!("{} moods configured", selector.count());

    let rows: Vec<MoodTableRow> = selector
        .controls()
        .iter()
        .map(|control| MoodTableRow {
            mood: control.mood_id.clone(),
            state: control.state.to_string(),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
