//! Fixed symbol and location catalogs.
//!
//! DESIGN
//! ======
//! The catalogs are code-defined and served in a stable order so the picker
//! widgets render deterministically. Entries are identified by short stable
//! ids; labels are display copy and may change without breaking stored
//! reports (reports embed the full selection, not a reference).

use reports::{Location, Symbol, SymbolCategory};

const SYMBOLS: &[(&str, &str, SymbolCategory)] = &[
    ("hit", "Hitting", SymbolCategory::Physical),
    ("push", "Pushing", SymbolCategory::Physical),
    ("kick", "Kicking", SymbolCategory::Physical),
    ("take", "Taking my things", SymbolCategory::Physical),
    ("names", "Name-calling", SymbolCategory::Verbal),
    ("threat", "Threats", SymbolCategory::Verbal),
    ("mock", "Mocking", SymbolCategory::Verbal),
    ("yell", "Yelling at me", SymbolCategory::Verbal),
    ("exclude", "Leaving me out", SymbolCategory::Social),
    ("rumors", "Spreading rumors", SymbolCategory::Social),
    ("ignore", "Ignoring me", SymbolCategory::Social),
    ("stare", "Intimidating looks", SymbolCategory::Social),
    ("messages", "Mean messages", SymbolCategory::Cyber),
    ("photos", "Sharing my photos", SymbolCategory::Cyber),
    ("online-rumors", "Rumors online", SymbolCategory::Cyber),
    ("group-chat", "Kicked from group chat", SymbolCategory::Cyber),
];

const LOCATIONS: &[(&str, &str, &str)] = &[
    ("playground", "Playground", "🛝"),
    ("classroom", "Classroom", "📚"),
    ("hallway", "Hallway", "🚪"),
    ("cafeteria", "Cafeteria", "🍽️"),
    ("toilets", "Toilets", "🚻"),
    ("gym", "Gym", "⚽"),
    ("bus", "School bus", "🚌"),
    ("online", "Online", "💻"),
    ("other", "Somewhere else", "📍"),
];

/// The ordered symbol catalog.
#[must_use]
pub fn symbol_catalog() -> Vec<Symbol> {
    SYMBOLS
        .iter()
        .map(|&(id, label, category)| Symbol { id: id.to_owned(), label: label.to_owned(), category })
        .collect()
}

/// The ordered location catalog.
#[must_use]
pub fn location_catalog() -> Vec<Location> {
    LOCATIONS
        .iter()
        .map(|&(id, name, icon)| Location { id: id.to_owned(), name: name.to_owned(), icon: icon.to_owned() })
        .collect()
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
