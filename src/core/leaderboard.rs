use crate::core::{BoxerRecord, LeaderboardEntry, SortBy};
use crate::utils::error::Result;
use std::cmp::Ordering;
use std::io::Write;

/// Ranks every record with at least one fight. Sorting is stable, so ties
/// keep the order the records were supplied in.
pub fn rank<'a>(
    records: impl IntoIterator<Item = &'a BoxerRecord>,
    sort_by: SortBy,
) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<(&BoxerRecord, f64)> = records
        .into_iter()
        .filter_map(|record| record.win_ratio().map(|ratio| (record, ratio)))
        .collect();

    match sort_by {
        SortBy::Wins => ranked.sort_by(|(a, _), (b, _)| b.wins.cmp(&a.wins)),
        SortBy::WinPct => ranked.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal)),
    }

    ranked
        .into_iter()
        .map(|(record, ratio)| to_entry(record, ratio))
        .collect()
}

fn to_entry(record: &BoxerRecord, ratio: f64) -> LeaderboardEntry {
    let boxer = &record.boxer;
    LeaderboardEntry {
        id: boxer.id(),
        name: boxer.name().to_string(),
        weight: boxer.weight(),
        height: boxer.height(),
        reach: boxer.reach(),
        age: boxer.age(),
        weight_class: boxer.weight_class(),
        fights: record.fights,
        wins: record.wins,
        win_pct: (ratio * 1000.0).round() / 10.0,
    }
}

pub fn format_table(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No boxers have fought yet.".to_string();
    }

    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut lines = vec![format!(
        "{:>4}  {:<name_width$}  {:<13}  {:>6}  {:>4}  {:>6}",
        "Rank", "Name", "Class", "Fights", "Wins", "Win %"
    )];
    for (rank, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{:>4}  {:<name_width$}  {:<13}  {:>6}  {:>4}  {:>6.1}",
            rank + 1,
            entry.name,
            entry.weight_class.as_str(),
            entry.fights,
            entry.wins,
            entry.win_pct
        ));
    }
    lines.join("\n")
}

pub fn write_csv<W: Write>(entries: &[LeaderboardEntry], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in entries {
        csv_writer.serialize(entry)?;
    }
    csv_writer.flush()?;
    Ok(())
}
