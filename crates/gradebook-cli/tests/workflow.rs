//! Gradebook workflow integration tests.
//!
//! Drives the record store and the recalculation workflow together the way
//! the CLI does, through the public library API.

use gradebook_core::statistics::{compute, summary_line, NO_DATA_MESSAGE};
use gradebook_core::{classify, Grade, Gradebook, Record, RecordStore};

fn temp_gradebook() -> (tempfile::TempDir, Gradebook) {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::open(dir.path().join("students.csv")).unwrap();
    (dir, Gradebook::new(store))
}

#[test]
fn invalid_rows_are_dropped_on_calculate() {
    let (_dir, book) = temp_gradebook();
    let rows = vec![Record::new("Amy", "95", ""), Record::new("Bo", "bad", "")];

    let calc = book.calculate(&rows).unwrap();

    assert_eq!(book.store().load().unwrap(), vec![Record::new("Amy", "95", "A")]);
    assert_eq!(calc.scores, vec![95.0]);
    assert_eq!(calc.rejected.len(), 1);
    assert_eq!(calc.rejected[0].record.name, "Bo");
    assert_eq!(
        calc.summary(),
        "Count: 1, Avg: 95.00, Med: 95.00, High: 95.00, Low: 95.00"
    );
}

#[test]
fn calculate_is_idempotent() {
    let (_dir, book) = temp_gradebook();
    book.store()
        .save(&[
            Record::ungraded("Amy", "95"),
            Record::ungraded("Cy", "72.5"),
            Record::ungraded("Bo", "101"),
        ])
        .unwrap();

    let first = book.calculate_stored().unwrap();
    let after_first = book.store().load().unwrap();
    let second = book.calculate_stored().unwrap();

    assert_eq!(book.store().load().unwrap(), after_first);
    assert_eq!(first.accepted, second.accepted);
    assert!(second.rejected.is_empty());
    assert_eq!(first.distribution, second.distribution);
}

#[test]
fn add_calculate_clear_cycle() {
    let (_dir, book) = temp_gradebook();
    let store = book.store();

    store.append(Record::ungraded("Amy", "88")).unwrap();
    store.append(Record::ungraded("Bo", "59.999")).unwrap();
    store.append(Record::ungraded("Cy", "60")).unwrap();

    let calc = book.calculate_stored().unwrap();
    assert_eq!(calc.grades, vec![Grade::B, Grade::F, Grade::D]);
    assert_eq!(calc.distribution.count(Grade::B), 1);
    assert_eq!(calc.distribution.count(Grade::A), 0);

    store.clear().unwrap();
    assert!(store.load().unwrap().is_empty());
    assert!(book.preview().unwrap().stats.is_none());
}

#[test]
fn stored_grades_survive_reload() {
    let (dir, book) = temp_gradebook();
    book.calculate(&[Record::ungraded("Jane Doe", "90")]).unwrap();

    let reopened = RecordStore::open(dir.path().join("students.csv")).unwrap();
    assert_eq!(reopened.load().unwrap(), vec![Record::new("Jane Doe", "90", "A")]);
}

#[test]
fn boundary_scores() {
    let expected = [(60.0, Grade::D), (70.0, Grade::C), (80.0, Grade::B), (90.0, Grade::A)];
    for (score, grade) in expected {
        assert_eq!(classify(score), grade, "score {score}");
    }
}

#[test]
fn no_data_sentinel() {
    assert_eq!(summary_line(&compute(&[])), NO_DATA_MESSAGE);
}
