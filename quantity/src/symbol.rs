/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Base-symbol aliases. Each group ends in its canonical symbol;
//! lookup is exact and case-sensitive. Symbols outside these groups
//! are legal and flow through the algebra unchanged.

static SYMBOL_ALIASES: [&[&str]; 9] = [
    &["metres", "meters", "metre", "meter", "m"],
    &["grams", "gram", "g"],
    &["seconds", "second", "sec", "s"],
    &["amperes", "ampere", "amps", "amp", "A"],
    &["kelvins", "kelvin", "K"],
    &["candelas", "candela", "cd"],
    &["moles", "mole", "mol"],
    &["bytes", "byte", "B"],
    &["bits", "bit", "b"],
];

fn alias_group(label: &str) -> Option<&'static [&'static str]> {
    SYMBOL_ALIASES
        .iter()
        .find(|group| group.contains(&label))
        .copied()
}

/// The canonical symbol for a label, or the label itself if unknown.
pub fn canonical_symbol(label: &str) -> &str {
    match alias_group(label) {
        Some(group) => group[group.len() - 1],
        None => label,
    }
}

/// All aliases of the group containing `label`, or a singleton.
pub fn aliases<'a>(label: &'a str) -> Vec<&'a str> {
    match alias_group(label) {
        Some(group) => group.to_vec(),
        None => vec![label],
    }
}

pub(crate) fn is_known_alias(label: &str) -> bool {
    alias_group(label).is_some()
}
