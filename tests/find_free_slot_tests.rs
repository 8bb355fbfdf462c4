//! Free slot search tests
mod common;

use common::*;
use daybook::TaskList;
use daybook::commands::FindFreeSlotCommand;
use daybook::formatting::MESSAGE_FREE_ALL_DAY;

#[test]
fn test_free_slots_on_past_date() {
    let mut tasks = TaskList::new();
    add_event(&mut tasks, "lecture", date(1, 1, 2019), "1000", "1200");
    add_event(&mut tasks, "lab", date(1, 1, 2019), "1400", "1500");

    let result = FindFreeSlotCommand::new(date(1, 1, 2019), 1, 0)
        .execute(&tasks)
        .unwrap();
    assert_eq!(
        result.message(),
        "Here are the available time slots for 01/01/2019:\n\
         1. 0000 to 1000\n\
         2. 1200 to 1400\n\
         3. 1500 to 2400"
    );
    assert!(!result.mutated());
}

#[test]
fn test_empty_list_is_free_all_day() {
    let tasks = TaskList::new();
    for day in [date(1, 1, 2019), date(29, 2, 2020), date(31, 12, 2099)] {
        let result = FindFreeSlotCommand::new(day, 0, 30)
            .execute(&tasks)
            .unwrap();
        assert_eq!(result.message(), MESSAGE_FREE_ALL_DAY);
    }
}

#[test]
fn test_longer_duration_filters_gaps() {
    let mut tasks = TaskList::new();
    add_event(&mut tasks, "lecture", date(1, 1, 2019), "1000", "1200");
    add_event(&mut tasks, "lab", date(1, 1, 2019), "1400", "1500");

    let result = FindFreeSlotCommand::new(date(1, 1, 2019), 3, 0)
        .execute(&tasks)
        .unwrap();
    assert!(!result.message().contains("1200 to 1400"));
    assert!(result.message().contains("1. 0000 to 1000"));
    assert!(result.message().contains("2. 1500 to 2400"));
}

#[test]
fn test_findfreeslot_through_session() {
    let (mut daybook, _dir) = get_test_daybook();
    daybook
        .handle_line("event standup /date 01/01/2019 /start 0900 /end 0930")
        .unwrap();

    let reply = daybook
        .handle_line("findfreeslot /date 01/01/2019 /min 45")
        .unwrap();
    assert_eq!(
        reply,
        "Here are the available time slots for 01/01/2019:\n\
         1. 0000 to 0900\n\
         2. 0930 to 2400"
    );
}
