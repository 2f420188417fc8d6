//! Given steps for conversation BDD scenarios.

use super::world::{ConversationWorld, run_async};
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::given;
use trackbot::conversation::{
    domain::{ChatId, SessionState},
    ports::SessionStore,
};
use trackbot::tracker::domain::{Issue, IssueId, IssueStatus, StatusLabel};

fn next_issue(world: &mut ConversationWorld, label: StatusLabel) -> Issue {
    let id = IssueId::new(world.next_issue_id);
    world.next_issue_id = world.next_issue_id.saturating_add(1);
    Issue::new(id, IssueStatus::Known(label))
}

#[given(r#"the tracker knows "{name}" with {open:usize} open and {resolved:usize} resolved tasks"#)]
fn tracker_knows_user(
    world: &mut ConversationWorld,
    name: String,
    open: usize,
    resolved: usize,
) {
    let mut issues = Vec::with_capacity(open.saturating_add(resolved));
    for _ in 0..open {
        issues.push(next_issue(world, StatusLabel::Open));
    }
    for _ in 0..resolved {
        issues.push(next_issue(world, StatusLabel::Resolved));
    }
    world.tracker.add_user(name, issues);
}

#[given("chat {chat:i64} has started signing in")]
fn chat_started_signing_in(world: &mut ConversationWorld, chat: i64) -> Result<(), eyre::Report> {
    run_async(world.dispatcher.dispatch(ChatId::new(chat), "/start")).wrap_err("send /start")?;
    Ok(())
}

#[given(r#"chat {chat:i64} is signed in as "{name}""#)]
fn chat_signed_in(
    world: &mut ConversationWorld,
    chat: i64,
    name: String,
) -> Result<(), eyre::Report> {
    let chat_id = ChatId::new(chat);
    run_async(world.dispatcher.dispatch(chat_id, "/start")).wrap_err("send /start")?;
    run_async(world.dispatcher.dispatch(chat_id, &name)).wrap_err("send full name")?;

    let session = run_async(world.sessions.load(chat_id)).wrap_err("load session")?;
    if session.state() != SessionState::Authorized {
        return Err(eyre!("chat {chat} did not sign in as {name}"));
    }
    Ok(())
}

#[given("the tracker is unavailable")]
fn tracker_unavailable(world: &mut ConversationWorld) {
    world.tracker.set_offline(true);
}
