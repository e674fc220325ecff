use crate::NoteDto;

use nb_core::Note;

use chrono::{TimeZone, Utc};

#[test]
fn test_note_dto_formats_date_added() {
    let note = Note {
        id: 3,
        user_id: 1,
        title: "groceries".to_string(),
        text: "milk and bread".to_string(),
        date_added: Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 5).unwrap(),
    };

    let dto = NoteDto::from(note);

    assert_eq!(dto.id, 3);
    assert_eq!(dto.date_added, "2024-03-09 18:30:05");
}

#[test]
fn test_note_dto_pads_single_digit_fields() {
    let note = Note {
        id: 1,
        user_id: 1,
        title: String::new(),
        text: String::new(),
        date_added: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    };

    assert_eq!(NoteDto::from(note).date_added, "2024-01-02 03:04:05");
}
