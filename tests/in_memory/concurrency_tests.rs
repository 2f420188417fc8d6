//! Many chats sharing one engine.

use crate::in_memory::helpers::{Relay, only_svg, relay};
use rstest::rstest;
use std::sync::Arc;
use trackbot::conversation::{
    domain::{ChatId, OutboundAction, SessionState},
    ports::SessionStore,
};

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

const CHATS: i64 = 16;

/// Concurrent sign-ins under one name register it once and authorize every chat.
#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sign_ins_share_one_registry_entry(relay: Relay) -> TestResult {
    let relay_handle = Arc::new(relay);
    let mut handles = Vec::new();
    for id in 0..CHATS {
        let shared = Arc::clone(&relay_handle);
        handles.push(tokio::spawn(async move {
            let chat_id = ChatId::new(id);
            shared.dispatcher.dispatch(chat_id, "/start").await?;
            shared.dispatcher.dispatch(chat_id, "Ivan Petrov").await?;
            Ok::<_, trackbot::conversation::ports::SinkError>(chat_id)
        }));
    }

    for handle in handles {
        let chat_id = handle.await??;
        let session = relay_handle.sessions.load(chat_id).await?;
        assert_eq!(session.state(), SessionState::Authorized);
    }
    assert_eq!(relay_handle.registry.names(), ["Ivan Petrov"]);
    assert_eq!(relay_handle.sessions.len(), usize::try_from(CHATS)?);

    let images = relay_handle
        .sink
        .delivered()
        .into_iter()
        .filter(|action| matches!(action, OutboundAction::SendImage { .. }))
        .count();
    assert_eq!(images, usize::try_from(CHATS)?);
    Ok(())
}

/// Concurrent status requests from one chat each get a report.
#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_status_requests_from_one_chat(relay: Relay) -> TestResult {
    let chat_id = ChatId::new(7);
    relay.send(chat_id, "/start").await?;
    only_svg(&relay.send(chat_id, "Anna Smirnova").await?)?;
    let before = relay.sessions.load(chat_id).await?;

    let relay_handle = Arc::new(relay);
    let mut handles = Vec::new();
    for _ in 0..8 {
        let shared = Arc::clone(&relay_handle);
        handles.push(tokio::spawn(async move {
            shared.dispatcher.dispatch(chat_id, "/status").await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await??, 1);
    }

    assert_eq!(relay_handle.sessions.load(chat_id).await?, before);
    Ok(())
}
