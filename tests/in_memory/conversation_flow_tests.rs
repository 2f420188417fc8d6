//! Conversation flow tests through the dispatcher.
//!
//! Each test drives a relay built from in-memory adapters and the SVG
//! renderer, the way a chat transport would.

use crate::in_memory::helpers::{Relay, only_svg, only_text, relay, runtime};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;
use trackbot::conversation::{
    domain::{ChatId, Replies, Session, SessionState},
    ports::{AuthorizedRegistry, SessionStore},
};
use trackbot::tracker::{
    adapters::memory::TaskSubmission,
    domain::{IssueId, StatusLabel, TaskDecision},
};

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

const IVAN: ChatId = ChatId::new(1001);
const ANNA: ChatId = ChatId::new(1002);

/// Signing in with a known name yields the status chart and authorizes the chat.
#[rstest]
fn sign_in_sends_status_chart(runtime: io::Result<Runtime>, relay: Relay) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        let prompt = relay.send(IVAN, "/start").await?;
        assert_eq!(only_text(&prompt)?, Replies::default().name_prompt());

        let report = relay.send(IVAN, "  Ivan Petrov  ").await?;
        let svg = only_svg(&report)?;
        assert!(svg.contains("Task status for Ivan Petrov at "));
        assert!(svg.contains("3 (75%)"));
        assert!(svg.contains("1 (25%)"));
        assert!(!svg.contains("on_hold"));

        let session = relay.sessions.load(IVAN).await?;
        assert_eq!(session.state(), SessionState::Authorized);
        assert!(relay.registry.contains("Ivan Petrov").await?);
        Ok(())
    })
}

/// An unknown name is re-prompted and leaves the chat waiting.
#[rstest]
fn unknown_name_is_reprompted(runtime: io::Result<Runtime>, relay: Relay) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        relay.send(IVAN, "/start").await?;
        let reply = relay.send(IVAN, "Unknown Name").await?;

        assert_eq!(
            only_text(&reply)?,
            Replies::default().name_not_found("Unknown Name")
        );
        assert_eq!(relay.sessions.load(IVAN).await?, Session::awaiting_name());
        assert!(relay.registry.names().is_empty());

        let retry = relay.send(IVAN, "Ivan Petrov").await?;
        only_svg(&retry)?;
        Ok(())
    })
}

/// Accept and reject reach the tracker on behalf of the signed-in user.
#[rstest]
fn decisions_reach_tracker(runtime: io::Result<Runtime>, relay: Relay) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        relay.send(IVAN, "/start").await?;
        relay.send(IVAN, "Ivan Petrov").await?;

        let accepted = relay.send(IVAN, "/accept 42").await?;
        assert_eq!(only_text(&accepted)?, "Task 42 has been accepted.");
        let rejected = relay.send(IVAN, "/REJECT@trackbot 43").await?;
        assert_eq!(only_text(&rejected)?, "Task 43 has been rejected.");

        assert_eq!(
            relay.tracker.submissions(),
            [
                TaskSubmission {
                    name: "Ivan Petrov".to_owned(),
                    task_id: IssueId::new(42),
                    decision: TaskDecision::Accept,
                },
                TaskSubmission {
                    name: "Ivan Petrov".to_owned(),
                    task_id: IssueId::new(43),
                    decision: TaskDecision::Reject,
                },
            ]
        );

        let report = relay.send(IVAN, "/status").await?;
        let svg = only_svg(&report)?;
        assert!(svg.contains(StatusLabel::InProgress.as_str()));
        assert!(svg.contains(StatusLabel::Closed.as_str()));
        Ok(())
    })
}

/// A tracker outage during a decision is answered and changes nothing.
#[rstest]
fn tracker_outage_keeps_session(runtime: io::Result<Runtime>, relay: Relay) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        relay.send(IVAN, "/start").await?;
        relay.send(IVAN, "Ivan Petrov").await?;
        let before = relay.sessions.load(IVAN).await?;

        relay.tracker.set_offline(true);
        let reply = relay.send(IVAN, "/accept 42").await?;
        assert_eq!(only_text(&reply)?, Replies::default().generic_failure());
        assert_eq!(relay.sessions.load(IVAN).await?, before);
        assert!(relay.tracker.submissions().is_empty());

        relay.tracker.set_offline(false);
        let retried = relay.send(IVAN, "/accept 42").await?;
        assert_eq!(only_text(&retried)?, "Task 42 has been accepted.");
        Ok(())
    })
}

/// Chats are independent: one chat's sign-in does not authorize another.
#[rstest]
fn chats_are_isolated(runtime: io::Result<Runtime>, relay: Relay) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        relay.send(IVAN, "/start").await?;
        relay.send(IVAN, "Ivan Petrov").await?;

        let reply = relay.send(ANNA, "/status").await?;
        assert_eq!(only_text(&reply)?, Replies::default().not_authorized());

        let greeting = relay.send(ANNA, "hello").await?;
        assert_eq!(only_text(&greeting)?, Replies::default().use_start());
        assert_eq!(relay.sessions.load(ANNA).await?, Session::fresh());
        Ok(())
    })
}

/// Blank messages produce no replies.
#[rstest]
fn blank_messages_are_silent(runtime: io::Result<Runtime>, relay: Relay) -> TestResult {
    let rt = runtime?;
    rt.block_on(async {
        let replies = relay.send(IVAN, "   ").await?;
        assert!(replies.is_empty());
        assert!(relay.sessions.is_empty());
        Ok(())
    })
}
