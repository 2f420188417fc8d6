//! Then steps for conversation BDD scenarios.

use super::world::{ConversationWorld, run_async};
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::then;
use trackbot::conversation::{
    domain::{ChatId, OutboundAction, Replies, Session},
    ports::SessionStore,
};
use trackbot::tracker::domain::StatusLabel;

fn only_reply_text(world: &ConversationWorld) -> Result<&str, eyre::Report> {
    match world.last_replies.as_slice() {
        [OutboundAction::SendText { text, .. }] => Ok(text),
        other => Err(eyre!("expected one text reply, got {other:?}")),
    }
}

fn expect_reply(world: &ConversationWorld, expected: &str) -> Result<(), eyre::Report> {
    let reply = only_reply_text(world)?;
    if reply != expected {
        return Err(eyre!("expected reply {expected:?}, got {reply:?}"));
    }
    Ok(())
}

fn load_session(world: &ConversationWorld, chat: i64) -> Result<Session, eyre::Report> {
    run_async(world.sessions.load(ChatId::new(chat))).wrap_err("load session")
}

#[then("chat {chat:i64} receives one status chart with {open:usize} open and {resolved:usize} resolved")]
fn receives_status_chart(
    world: &ConversationWorld,
    chat: i64,
    open: usize,
    resolved: usize,
) -> Result<(), eyre::Report> {
    let [OutboundAction::SendImage { chat_id, image }] = world.last_replies.as_slice() else {
        return Err(eyre!("expected one image, got {:?}", world.last_replies));
    };
    if *chat_id != ChatId::new(chat) || image.media_type() != "image/svg+xml" {
        return Err(eyre!("unexpected image reply for chat {chat_id}"));
    }

    let requests = world.renderer.requests();
    let summary = &requests
        .last()
        .ok_or_else(|| eyre!("renderer was not called"))?
        .summary;
    let actual = [
        summary.count(StatusLabel::Open),
        summary.count(StatusLabel::InProgress),
        summary.count(StatusLabel::Resolved),
        summary.count(StatusLabel::Closed),
    ];
    if actual != [open, 0, resolved, 0] {
        return Err(eyre!("unexpected summary counts {actual:?}"));
    }
    Ok(())
}

#[then(r#"chat {chat:i64} is authorized as "{name}""#)]
fn chat_is_authorized(
    world: &ConversationWorld,
    chat: i64,
    name: String,
) -> Result<(), eyre::Report> {
    let session = load_session(world, chat)?;
    if session.authorized_name() != Some(name.as_str()) {
        return Err(eyre!("expected chat {chat} authorized as {name}, got {session:?}"));
    }
    Ok(())
}

#[then("chat {chat:i64} is still waiting for a name")]
fn chat_still_waiting(world: &ConversationWorld, chat: i64) -> Result<(), eyre::Report> {
    let session = load_session(world, chat)?;
    if session != Session::awaiting_name() {
        return Err(eyre!("expected chat {chat} to await a name, got {session:?}"));
    }
    Ok(())
}

#[then(r#"the registry contains only "{name}""#)]
fn registry_contains_only(world: &ConversationWorld, name: String) -> Result<(), eyre::Report> {
    let names = world.registry.names();
    if names != [name.clone()] {
        return Err(eyre!("expected registry [{name}], got {names:?}"));
    }
    Ok(())
}

#[then("the registry is empty")]
fn registry_is_empty(world: &ConversationWorld) -> Result<(), eyre::Report> {
    let names = world.registry.names();
    if !names.is_empty() {
        return Err(eyre!("expected empty registry, got {names:?}"));
    }
    Ok(())
}

#[then("the reply asks for the full name again")]
fn reply_asks_again(world: &ConversationWorld) -> Result<(), eyre::Report> {
    let reply = only_reply_text(world)?;
    if !reply.contains("not found") || !reply.contains("full name again") {
        return Err(eyre!("expected a re-prompt, got {reply:?}"));
    }
    Ok(())
}

#[then("the reply says the chat is not authorized")]
fn reply_not_authorized(world: &ConversationWorld) -> Result<(), eyre::Report> {
    expect_reply(world, &Replies::default().not_authorized())
}

#[then("the reply is the generic failure message")]
fn reply_generic_failure(world: &ConversationWorld) -> Result<(), eyre::Report> {
    expect_reply(world, &Replies::default().generic_failure())
}

#[then(r#"the reply explains that "{raw}" is not a task number"#)]
fn reply_invalid_task(world: &ConversationWorld, raw: String) -> Result<(), eyre::Report> {
    expect_reply(world, &Replies::default().invalid_task_id(&raw))
}

#[then("the reply confirms task {task:i64} was accepted")]
fn reply_confirms_accept(world: &ConversationWorld, task: i64) -> Result<(), eyre::Report> {
    expect_reply(world, &format!("Task {task} has been accepted."))
}

#[then("no status chart was rendered")]
fn no_chart_rendered(world: &ConversationWorld) -> Result<(), eyre::Report> {
    if !world.renderer.requests().is_empty() {
        return Err(eyre!("renderer was called"));
    }
    Ok(())
}

#[then("the session of chat {chat:i64} is unchanged")]
fn session_unchanged(world: &ConversationWorld, chat: i64) -> Result<(), eyre::Report> {
    let before = world
        .session_before
        .as_ref()
        .ok_or_else(|| eyre!("no session captured before the message"))?;
    let after = load_session(world, chat)?;
    if after != *before {
        return Err(eyre!("session changed from {before:?} to {after:?}"));
    }
    Ok(())
}

#[then("the tracker received no decisions")]
fn tracker_no_decisions(world: &ConversationWorld) -> Result<(), eyre::Report> {
    let submissions = world.tracker.submissions();
    if !submissions.is_empty() {
        return Err(eyre!("unexpected submissions {submissions:?}"));
    }
    Ok(())
}

#[then(r#"the tracker shows task {task:i64} of "{name}" in progress"#)]
fn tracker_task_in_progress(
    world: &ConversationWorld,
    task: i64,
    name: String,
) -> Result<(), eyre::Report> {
    let issues = world
        .tracker
        .issues_for(&name)
        .ok_or_else(|| eyre!("unknown user {name}"))?;
    let found = issues
        .iter()
        .find(|issue| issue.id().value() == task)
        .ok_or_else(|| eyre!("task {task} not assigned to {name}"))?;
    if found.status().label() != Some(StatusLabel::InProgress) {
        return Err(eyre!("task {task} is {}", found.status()));
    }
    Ok(())
}
