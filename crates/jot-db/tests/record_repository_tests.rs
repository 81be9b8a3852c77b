mod common;

use common::{create_test_pool, create_test_user};

use jot_core::{
    Event, EventDraft, Issue, IssueDraft, IssueStatus, Note, NoteDraft, Task, TaskDraft,
};
use jot_db::{EventRepository, IssueRepository, NoteRepository, TaskRepository};

use chrono::{NaiveDate, TimeZone, Utc};
use googletest::prelude::*;

#[tokio::test]
async fn given_task_batch_when_created_then_all_rows_listed() {
    // Given: Two task drafts for one user
    let pool = create_test_pool().await;
    let user = create_test_user(&pool).await;
    let repo = TaskRepository::new(pool);

    let tasks: Vec<Task> = [
        TaskDraft {
            content: "Submit the report".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 8, 25),
            is_important: true,
        },
        TaskDraft {
            content: "Buy groceries".to_string(),
            due_date: None,
            is_important: false,
        },
    ]
    .into_iter()
    .map(|d| Task::from_draft(user.id, d))
    .collect();

    // When: Inserting the batch
    repo.create_many(&tasks).await.unwrap();

    // Then: Both rows come back, completion defaulted to false
    let listed = repo.list_by_user(user.id, 100).await.unwrap();
    assert_that!(listed.len(), eq(2));
    assert_that!(listed.iter().any(|t| t.is_completed), eq(false));
    let important = listed.iter().find(|t| t.is_important).unwrap();
    assert_that!(
        important.due_date,
        some(eq(NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()))
    );
}

#[tokio::test]
async fn given_event_batch_when_created_then_optional_end_roundtrips() {
    let pool = create_test_pool().await;
    let user = create_test_user(&pool).await;
    let repo = EventRepository::new(pool);

    let start = Utc.with_ymd_and_hms(2026, 8, 24, 15, 0, 0).unwrap();
    let events = vec![
        Event::from_draft(
            user.id,
            EventDraft {
                content: "Team meeting".to_string(),
                start_at: start,
                end_at: Some(start + chrono::Duration::hours(1)),
                is_all_day: false,
            },
        ),
        Event::from_draft(
            user.id,
            EventDraft {
                content: "Company holiday".to_string(),
                start_at: start,
                end_at: None,
                is_all_day: true,
            },
        ),
    ];

    repo.create_many(&events).await.unwrap();

    let listed = repo.list_by_user(user.id, 100).await.unwrap();
    assert_that!(listed.len(), eq(2));
    let meeting = listed.iter().find(|e| !e.is_all_day).unwrap();
    assert_that!(meeting.start_at, eq(start));
    assert_that!(meeting.end_at, some(anything()));
    let holiday = listed.iter().find(|e| e.is_all_day).unwrap();
    assert_that!(holiday.end_at, none());
}

#[tokio::test]
async fn given_issue_batch_when_created_then_status_roundtrips() {
    let pool = create_test_pool().await;
    let user = create_test_user(&pool).await;
    let repo = IssueRepository::new(pool);

    let issues = vec![Issue::from_draft(
        user.id,
        IssueDraft {
            content: "Login button broken".to_string(),
            status: IssueStatus::Open,
        },
    )];

    repo.create_many(&issues).await.unwrap();

    let listed = repo.list_by_user(user.id, 100).await.unwrap();
    assert_that!(listed.len(), eq(1));
    assert_that!(listed[0].status, eq(IssueStatus::Open));
}

#[tokio::test]
async fn given_note_batch_when_created_then_optional_title_roundtrips() {
    let pool = create_test_pool().await;
    let user = create_test_user(&pool).await;
    let repo = NoteRepository::new(pool);

    let notes = vec![
        Note::from_draft(
            user.id,
            NoteDraft {
                title: Some("Ideas".to_string()),
                content: "Try the new planning flow".to_string(),
            },
        ),
        Note::from_draft(
            user.id,
            NoteDraft {
                title: None,
                content: "Untitled thought".to_string(),
            },
        ),
    ];

    repo.create_many(&notes).await.unwrap();

    let listed = repo.list_by_user(user.id, 100).await.unwrap();
    assert_that!(listed.len(), eq(2));
    assert_that!(listed.iter().filter(|n| n.title.is_some()).count(), eq(1));
}

#[tokio::test]
async fn given_records_for_two_users_when_listing_then_scoped_by_owner() {
    // Every read/write is scoped by user_id; no cross-user visibility.
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool).await;
    let other = create_test_user(&pool).await;
    let repo = TaskRepository::new(pool);

    let task = Task::from_draft(
        owner.id,
        TaskDraft {
            content: "Owner-only task".to_string(),
            due_date: None,
            is_important: false,
        },
    );
    repo.create_many(std::slice::from_ref(&task)).await.unwrap();

    assert_that!(repo.list_by_user(owner.id, 100).await.unwrap().len(), eq(1));
    assert_that!(repo.list_by_user(other.id, 100).await.unwrap().len(), eq(0));
}
