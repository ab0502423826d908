//! End-to-end runs of the screen flows against an in-memory store

use corkboard::screens::{AddScreen, DetailScreen, EditScreen, ListScreen, Route};
use corkboard::{
    Error, MemoryStore, SortKey, Task, TaskDraft, TaskId, TaskRepository, TaskStatus,
    ValidationError,
};

fn empty_repository() -> TaskRepository<MemoryStore> {
    TaskRepository::new(MemoryStore::new())
}

fn fill_form(form: &mut TaskDraft, title: &str, date: &str) {
    form.set_title(title.to_string());
    form.set_description("some details".to_string());
    form.set_date(date.to_string());
    form.set_time("09:00".to_string());
    form.set_location("somewhere".to_string());
}

#[tokio::test]
async fn a_saved_task_is_listed_exactly_as_saved() {
    let mut repository = empty_repository();

    let task = Task::new_with_fields(
        TaskId::from("1".to_string()),
        "Buy milk".to_string(),
        "2%".to_string(),
        "2024-01-01".to_string(),
        "09:00".to_string(),
        "Store".to_string(),
        TaskStatus::InProgress,
    );
    repository.save(&task).await.unwrap();

    let mut list = ListScreen::new();
    list.refresh(&repository).await.unwrap();
    assert_eq!(list.sorted_tasks(), vec![task]);
}

#[tokio::test]
async fn the_list_screen_orders_by_the_chosen_key() {
    let mut repository = empty_repository();

    let mut add = AddScreen::new();
    fill_form(add.form_mut(), "March errand", "2024-03-01");
    add.submit(&mut repository).await.unwrap();

    // The Add screen resets its form after a successful submission,
    // so the same screen can record a second task
    fill_form(add.form_mut(), "January errand", "2024-01-15");
    add.submit(&mut repository).await.unwrap();

    let mut list = ListScreen::new();
    assert_eq!(list.sort_option(), SortKey::Date);
    list.refresh(&repository).await.unwrap();

    let sorted = list.sorted_tasks();
    assert_eq!(sorted.len(), 2);
    assert_eq!(sorted[0].date(), "2024-01-15");
    assert_eq!(sorted[1].date(), "2024-03-01");
}

#[tokio::test]
async fn a_status_update_overwrites_instead_of_duplicating() {
    let mut repository = empty_repository();

    let mut add = AddScreen::new();
    fill_form(add.form_mut(), "Buy milk", "2024-01-01");
    add.submit(&mut repository).await.unwrap();

    let task = repository.list_all().await.unwrap().pop().unwrap();
    assert_eq!(task.status(), TaskStatus::InProgress);

    // The detail screen persists status changes immediately
    let mut detail = DetailScreen::new(task.clone());
    detail
        .set_status(TaskStatus::Completed, &mut repository)
        .await
        .unwrap();

    let listed = repository.list_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), task.id());
    assert_eq!(listed[0].status(), TaskStatus::Completed);
}

#[tokio::test]
async fn submission_with_an_empty_field_writes_nothing() {
    let mut repository = empty_repository();

    let mut add = AddScreen::new();
    fill_form(add.form_mut(), "Buy milk", "2024-01-01");
    add.form_mut().set_location(String::new());

    match add.submit(&mut repository).await {
        Err(Error::Validation(ValidationError { field: "location" })) => (),
        other => panic!("expected a validation failure, got {:?}", other),
    }

    // The store is untouched
    assert!(repository.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn editing_keeps_the_id_and_replaces_the_record() {
    let mut repository = empty_repository();

    let mut add = AddScreen::new();
    fill_form(add.form_mut(), "Buy milk", "2024-01-01");
    add.submit(&mut repository).await.unwrap();
    let task = repository.list_all().await.unwrap().pop().unwrap();

    // Detail hands the task over to Edit by value
    let detail = DetailScreen::new(task.clone());
    let route = detail.edit();
    let mut edit = match route {
        Route::EditTask(task) => EditScreen::new(&task),
        other => panic!("expected the edit route, got {:?}", other),
    };

    edit.form_mut().set_title("Buy oat milk".to_string());
    edit.form_mut().set_date("2024-02-01".to_string());
    match edit.submit(&mut repository).await.unwrap() {
        Route::TaskList => (),
        other => panic!("expected to go back to the list, got {:?}", other),
    }

    let listed = repository.list_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), task.id());
    assert_eq!(listed[0].title(), "Buy oat milk");
    assert_eq!(listed[0].date(), "2024-02-01");
    assert_eq!(listed[0].time(), "09:00");
}

#[tokio::test]
async fn a_removed_task_never_comes_back() {
    let mut repository = empty_repository();

    let mut add = AddScreen::new();
    fill_form(add.form_mut(), "Buy milk", "2024-01-01");
    add.submit(&mut repository).await.unwrap();
    let task = repository.list_all().await.unwrap().pop().unwrap();

    let detail = DetailScreen::new(task.clone());
    match detail.remove(&mut repository).await.unwrap() {
        Route::TaskList => (),
        other => panic!("expected to go back to the list, got {:?}", other),
    }

    let mut list = ListScreen::new();
    list.refresh(&repository).await.unwrap();
    assert!(list.sorted_tasks().iter().all(|t| t.id() != task.id()));

    // Removing the same task again is a no-op, not an error
    detail.remove(&mut repository).await.unwrap();
}
