//! Data file format tests
mod common;

use common::*;
use daybook::{Priority, Storage, Task, TaskList};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_every_kind_survives_save_and_load() {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join(DATA_FILE));

    let mut tasks = TaskList::new();
    tasks.add(Task::todo("read", Priority::medium));
    let deadline = tasks.add(Task::deadline("essay", Priority::high, date(1, 10, 2019), time("1230")));
    let event = add_event(&mut tasks, "sync", date(2, 10, 2019), "0900", "0930");
    tasks.get_mut(deadline).unwrap().mark_as_done();
    tasks.get_mut(event).unwrap().has_reminder = true;
    storage.save(&tasks).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join(DATA_FILE)).unwrap(),
        "T_read_false_medium_-_-_-_false\n\
         D_essay_true_high_01/10/2019_-_1230_false\n\
         E_sync_false_low_02/10/2019_0900_0930_true\n"
    );

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.all(), tasks.all());
}

#[test]
fn test_ids_are_reassigned_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DATA_FILE);
    fs::write(
        &path,
        "D_b_false_low_01/01/2019_-_1000_false\r\nT_a_false_low_-_-_-_false\r\n",
    )
    .unwrap();

    let loaded = Storage::new(&path).load().unwrap();
    let ids: Vec<u32> = loaded.all().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(loaded.all()[0].description, "b");
}

#[test]
fn test_deadline_without_end_time_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DATA_FILE);
    fs::write(&path, "D_b_false_low_01/01/2019_-_-_false\n").unwrap();

    let err = Storage::new(&path).load().unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains(":1: malformed task record"));
    assert!(message.contains("missing its end time"));
}

#[test]
fn test_deadline_with_start_time_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DATA_FILE);
    fs::write(&path, "D_trip_false_low_01/01/2019_0900_1000_false\n").unwrap();

    let err = Storage::new(&path).load().unwrap_err();
    assert!(format!("{:#}", err).contains("invalid start time '0900'"));
}
