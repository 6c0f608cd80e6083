use super::*;

use std::path::PathBuf;

use timeliner_fs::TimeTriple;

fn epoch(path: &str, created: f64, modified: f64, accessed: f64) -> FileRecord {
    FileRecord {
        path: PathBuf::from(path),
        size: 1,
        times: Timestamps::Epoch(TimeTriple {
            created,
            modified,
            accessed,
        }),
    }
}

fn formatted(path: &str, modified: &str) -> FileRecord {
    FileRecord {
        path: PathBuf::from(path),
        size: 1,
        times: Timestamps::Formatted(TimeTriple {
            created: "2020-01-01 00:00:00".to_owned(),
            modified: modified.to_owned(),
            accessed: "2020-01-01 00:00:00".to_owned(),
        }),
    }
}

fn paths(records: &[FileRecord]) -> Vec<&str> {
    records.iter().map(|r| r.path.to_str().unwrap()).collect()
}

#[test]
fn sorts_each_field_independently() {
    let records = vec![
        epoch("a", 3.0, 1.0, 2.0),
        epoch("b", 1.0, 2.0, 3.0),
        epoch("c", 2.0, 3.0, 1.0),
    ];

    let cases: &[(TimeField, [&str; 3])] = &[
        (TimeField::Created, ["b", "c", "a"]),
        (TimeField::Modified, ["a", "b", "c"]),
        (TimeField::Accessed, ["c", "a", "b"]),
    ];

    for (field, expected) in cases {
        let sorted = sort_records(records.clone(), *field);
        assert_eq!(paths(&sorted), expected, "field {field}");
    }
}

#[test]
fn epoch_values_compare_numerically_not_textually() {
    // "9.5" > "10.25" as text.
    let sorted = sort_records(
        vec![epoch("late", 0.0, 10.25, 0.0), epoch("early", 0.0, 9.5, 0.0)],
        TimeField::Modified,
    );
    assert_eq!(paths(&sorted), ["early", "late"]);
}

#[test]
fn sub_second_epoch_precision_is_kept() {
    let sorted = sort_records(
        vec![
            epoch("second", 0.0, 100.75, 0.0),
            epoch("first", 0.0, 100.25, 0.0),
        ],
        TimeField::Modified,
    );
    assert_eq!(paths(&sorted), ["first", "second"]);
}

#[test]
fn negative_epoch_sorts_before_epoch() {
    let sorted = sort_records(
        vec![epoch("zero", 0.0, 0.0, 0.0), epoch("before", 0.0, -5.0, 0.0)],
        TimeField::Modified,
    );
    assert_eq!(paths(&sorted), ["before", "zero"]);
}

#[test]
fn formatted_values_sort_chronologically() {
    let sorted = sort_records(
        vec![
            formatted("dec", "2023-12-01 00:00:00"),
            formatted("feb", "2023-02-01 00:00:00"),
            formatted("next-year", "2024-01-01 00:00:00"),
            formatted("feb-later", "2023-02-01 08:00:00"),
        ],
        TimeField::Modified,
    );
    assert_eq!(paths(&sorted), ["feb", "feb-later", "dec", "next-year"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let records = vec![
        epoch("z", 0.0, 5.0, 0.0),
        epoch("tie-1", 0.0, 1.0, 0.0),
        epoch("tie-2", 0.0, 1.0, 0.0),
        epoch("a", 0.0, 0.5, 0.0),
        epoch("tie-3", 0.0, 1.0, 0.0),
    ];

    let sorted = sort_records(records, TimeField::Modified);
    assert_eq!(paths(&sorted), ["a", "tie-1", "tie-2", "tie-3", "z"]);

    let same_second = vec![
        formatted("x", "2023-01-01 00:00:00"),
        formatted("y", "2023-01-01 00:00:00"),
        formatted("w", "2023-01-01 00:00:00"),
    ];
    let sorted = sort_records(same_second, TimeField::Modified);
    assert_eq!(paths(&sorted), ["x", "y", "w"]);
}

#[test]
fn sort_keeps_every_record() {
    let records: Vec<_> = (0..50)
        .map(|i| epoch(&format!("f{i}"), 0.0, f64::from((i * 7) % 13), 0.0))
        .collect();

    let sorted = sort_records(records, TimeField::Modified);
    assert_eq!(sorted.len(), 50);

    let cmp = compare_by(TimeField::Modified);
    assert!(sorted.windows(2).all(|w| cmp(&w[0], &w[1]) != Ordering::Greater));
}

#[test]
fn empty_input_is_fine() {
    assert!(sort_records(Vec::new(), TimeField::Accessed).is_empty());
}
