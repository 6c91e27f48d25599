//! Insert, lookup, update, and delete tests for the `PostgreSQL` store.

use crate::postgres::helpers::{FixedClock, january, transactional_repository};
use mockable::DefaultClock;
use todo_app::todo::{
    adapters::postgres::PostgresTodoRepository,
    domain::{Description, NewTodoItem, TodoItem, TodoItemId},
    ports::{TodoRepository, TodoRepositoryError},
};

async fn insert(repository: &PostgresTodoRepository, description: &str) -> TodoItem {
    let new_item = NewTodoItem::new(
        Description::new(description).expect("valid description"),
        &DefaultClock,
    );
    repository.insert(&new_item).await.expect("insert task")
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TODO_TEST_DATABASE_URL"]
async fn insert_assigns_increasing_ids_and_lists_as_active() {
    let repository = transactional_repository();

    let first = insert(&repository, "first").await;
    let second = insert(&repository, "second").await;

    assert!(second.id() > first.id());
    assert!(!first.is_completed());
    let active = repository.list_active().await.expect("list active");
    let ids: Vec<TodoItemId> = active.iter().map(TodoItem::id).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
    assert!(
        repository
            .list_completed()
            .await
            .expect("list completed")
            .is_empty()
    );
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TODO_TEST_DATABASE_URL"]
async fn update_persists_description_and_flag_only() {
    let repository = transactional_repository();
    let mut item = insert(&repository, "draft").await;

    item.rename(Description::new("final").expect("valid description"));
    item.toggle_completion();
    repository.update(&item).await.expect("update task");

    let stored = repository
        .find_by_id(item.id())
        .await
        .expect("lookup")
        .expect("task exists");
    assert_eq!(stored.description().as_str(), "final");
    assert!(stored.is_completed());
    assert_eq!(stored.created_at(), item.created_at());
    let completed = repository.list_completed().await.expect("list completed");
    assert_eq!(completed, vec![stored]);
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TODO_TEST_DATABASE_URL"]
async fn missing_rows_are_reported() {
    let repository = transactional_repository();
    let item = insert(&repository, "short-lived").await;
    repository.delete(item.id()).await.expect("delete task");

    assert!(
        repository
            .find_by_id(item.id())
            .await
            .expect("lookup")
            .is_none()
    );
    assert!(matches!(
        repository.update(&item).await,
        Err(TodoRepositoryError::NotFound(id)) if id == item.id()
    ));
    assert!(matches!(
        repository.delete(item.id()).await,
        Err(TodoRepositoryError::NotFound(id)) if id == item.id()
    ));
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TODO_TEST_DATABASE_URL"]
async fn lists_follow_creation_time_not_identifier() {
    let repository = transactional_repository();
    let mut inserted = Vec::new();
    for (description, day) in [("late", 3), ("early", 1), ("done late", 4), ("done early", 2)] {
        let new_item = NewTodoItem::new(
            Description::new(description).expect("valid description"),
            &FixedClock(january(day)),
        );
        inserted.push(repository.insert(&new_item).await.expect("insert task"));
    }
    for item in inserted
        .iter()
        .filter(|item| item.description().as_str().starts_with("done"))
    {
        let mut completed = item.clone();
        completed.toggle_completion();
        repository.update(&completed).await.expect("complete task");
    }

    let active = repository.list_active().await.expect("list active");
    let completed = repository.list_completed().await.expect("list completed");

    let names = |items: &[TodoItem]| -> Vec<String> {
        items
            .iter()
            .map(|item| item.description().as_str().to_owned())
            .collect()
    };
    assert_eq!(names(&active), vec!["early", "late"]);
    assert_eq!(names(&completed), vec!["done early", "done late"]);
}
