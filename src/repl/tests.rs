use super::*;

use std::sync::Arc;

use reedline::Prompt;

use crate::executor::ExecutionContext;
use crate::gateway::MemoryFsGateway;
use crate::parser::Command;

fn session() -> (SharedState, ExecutionContext) {
    let gateway = MemoryFsGateway::new()
        .with_dir("/srv/data/alpha")
        .with_file("/srv/data/alpha/inner.txt")
        .with_file("/srv/data/beta.txt");
    let shared_state = SharedState::new("/srv/data".to_string());
    let context = ExecutionContext::new(Arc::new(gateway), shared_state.clone());
    (shared_state, context)
}

#[tokio::test]
async fn test_cd_updates_prompt() {
    let (shared_state, context) = session();
    let prompt = NavPrompt::new(shared_state);

    context
        .execute(Command::Cd(Some("alpha".to_string())))
        .await
        .expect("cd failed");

    assert_eq!(prompt.render_prompt_left(), "/srv/data/alpha> ");
}

#[tokio::test]
async fn test_cd_moves_completion_base() {
    let (_, context) = session();

    // Before the cd, completion sees the session root
    let candidates = context.complete_path("be").await.unwrap();
    assert_eq!(candidates.get("ta.txt"), Some(&true));

    context
        .execute(Command::Cd(Some("alpha".to_string())))
        .await
        .expect("cd failed");

    // After it, fragments resolve against the new directory
    let candidates = context.complete_path("inn").await.unwrap();
    assert_eq!(candidates.get("er.txt"), Some(&true));
}

#[tokio::test]
async fn test_failed_cd_leaves_session_untouched() {
    let (shared_state, context) = session();

    let result = context
        .execute(Command::Cd(Some("missing".to_string())))
        .await
        .unwrap();
    assert!(!result.success);

    assert_eq!(shared_state.get_working_dir(), "/srv/data");
    let candidates = context.complete_path("be").await.unwrap();
    assert_eq!(candidates.get("ta.txt"), Some(&true));
}

#[tokio::test]
async fn test_ls_reflects_session_directory() {
    let (_, context) = session();

    context
        .execute(Command::Cd(Some("alpha".to_string())))
        .await
        .expect("cd failed");

    let result = context.execute(Command::Ls(None)).await.unwrap();
    assert_eq!(result.stats.entries_returned, 1);
}
