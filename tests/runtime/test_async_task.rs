//! Tests for the async task handle.

use github_reinvite::runtime::AsyncTask;

#[tokio::test]
async fn test_async_task_spawn_async() {
    let task = AsyncTask::spawn_async(async { 42 });
    let result = task.await.unwrap();
    assert_eq!(result, 42);
}

#[tokio::test]
async fn test_async_task_ready() {
    let task = AsyncTask::ready("done");
    assert_eq!(task.await.unwrap(), "done");
}

#[tokio::test]
async fn test_async_task_dropped_sender() {
    let (tx, rx) = tokio::sync::oneshot::channel::<u8>();
    drop(tx);
    assert!(AsyncTask::new(rx).await.is_err());
}
