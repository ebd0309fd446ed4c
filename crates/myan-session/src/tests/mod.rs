mod proptest_invariants;

use myan_core::dict::MappingEntry;
use myan_core::table::{Sample, StaticTable, TABLE_VERSION};

/// `{"ABC"→"१", "AB"→"२", "A"→"३", "B"→"४"}` plus one sample.
pub(super) fn make_test_table() -> StaticTable {
    StaticTable {
        version: TABLE_VERSION,
        entries: vec![
            MappingEntry::new("A", "३").with_label("a"),
            MappingEntry::new("AB", "२").with_label("ab"),
            MappingEntry::new("ABC", "१").with_label("abc"),
            MappingEntry::new("B", "४").with_label("b"),
        ],
        samples: vec![Sample {
            name: "abc".to_string(),
            text: "ABCA".to_string(),
        }],
    }
}
