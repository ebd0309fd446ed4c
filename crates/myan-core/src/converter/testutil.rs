use crate::dict::{Dictionary, MappingEntry};

/// `{"ABC"→"१", "AB"→"२", "A"→"३"}`, deliberately listed shortest first.
pub(crate) fn abc_dict() -> Dictionary {
    Dictionary::from_entries(vec![
        MappingEntry::new("A", "३").with_label("a"),
        MappingEntry::new("AB", "२").with_label("ab"),
        MappingEntry::new("ABC", "१").with_label("abc"),
    ])
}

/// Reference scan over the full entry list, without the first-char index.
pub(crate) fn linear_match<'a>(dict: &'a Dictionary, rest: &str) -> Option<&'a MappingEntry> {
    dict.entries()
        .iter()
        .filter(|e| !e.source.is_empty())
        .find(|e| rest.starts_with(e.source.as_str()))
}
