//! Plain-text rendering of parsed cards.

use std::fmt::Write;

use stcard_foundation::{Attribute, CardRecord, CardType, NamedEntry};

/// One-line summary: number, type, code, class and level.
#[must_use]
pub fn summary_line(number: usize, card: &CardRecord) -> String {
    format!(
        "#{number} [{}] {} ({}) Lv{}",
        card.card_type, card.code, card.class_name, card.total_stats.level
    )
}

/// Multi-line rendering of a whole card.
///
/// Servant cards show total, base and correction columns; master cards show
/// the total column only.
#[must_use]
pub fn render_card(card: &CardRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} / {}",
        card.card_type.label(),
        card.code,
        card.class_name
    );

    match card.card_type {
        CardType::Servant => {
            let _ = writeln!(out, "  {:<14}{:>6}{:>6}{:>6}", "", "total", "base", "corr");
            for attribute in Attribute::ALL {
                let _ = writeln!(
                    out,
                    "  {:<14}{:>6}{:>6}{:>6}",
                    attribute.name(),
                    card.total_stats.get(attribute),
                    card.base().get(attribute),
                    card.correction_stats.get(attribute),
                );
            }
        }
        CardType::Master => {
            for attribute in Attribute::ALL {
                let _ = writeln!(
                    out,
                    "  {:<14}{:>6}",
                    attribute.name(),
                    card.total_stats.get(attribute)
                );
            }
        }
    }

    write_entries(&mut out, "class skills", &card.class_skills);
    write_entries(&mut out, "personal skills", &card.personal_skills);
    write_entries(&mut out, "noble phantasms", &card.noble_phantasms);
    if let Some(workshops) = &card.workshops {
        write_entries(&mut out, "workshops", workshops);
    }
    if let Some(craft_essences) = &card.craft_essences {
        write_entries(&mut out, "craft essences", craft_essences);
    }

    out
}

fn write_entries(out: &mut String, title: &str, entries: &[NamedEntry]) {
    if entries.is_empty() {
        return;
    }
    let _ = writeln!(out, "  {title}:");
    for entry in entries {
        if entry.rank.is_empty() {
            let _ = writeln!(out, "    - {}", entry.name);
        } else {
            let _ = writeln!(out, "    - {} [{}]", entry.name, entry.rank);
        }
    }
}
