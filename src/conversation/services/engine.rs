//! Conversation engine: the per-chat state machine.
//!
//! An event is processed in two phases. The transition phase reads the
//! session, talks to the tracker and the renderer, and produces the next
//! session plus the replies. The commit phase registers a newly authorized
//! name and writes the session back. Any failure before the commit leaves
//! the stored session untouched and is answered with a reply.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use mockable::Clock;
use tokio::sync::Mutex;

use super::{ConversationError, ConversationResult};
use crate::conversation::{
    domain::{ChatId, InboundEvent, OutboundAction, Replies, Session, SessionState},
    ports::{AuthorizedRegistry, ConversationHandler, SessionStore},
};
use crate::report::{ports::ReportRenderer, services::ReportService};
use crate::tracker::{
    domain::{IssueId, TaskDecision},
    ports::{IssueTrackerClient, TrackerError},
};

/// Outcome of the transition phase.
struct Transition {
    next: Session,
    register: Option<String>,
    actions: Vec<OutboundAction>,
}

impl Transition {
    fn stay(session: &Session, action: OutboundAction) -> Self {
        Self {
            next: session.clone(),
            register: None,
            actions: vec![action],
        }
    }

    fn to(next: Session, action: OutboundAction) -> Self {
        Self {
            next,
            register: None,
            actions: vec![action],
        }
    }
}

/// Drives chat sessions from inbound events.
///
/// Events for the same chat are processed one at a time; events for
/// different chats run concurrently. A chat's lock entry is dropped once
/// no event for it is in flight.
pub struct ConversationEngine<T, S, A, R, C>
where
    T: IssueTrackerClient,
    S: SessionStore,
    A: AuthorizedRegistry,
    R: ReportRenderer,
    C: Clock + Send + Sync,
{
    tracker: Arc<T>,
    sessions: Arc<S>,
    registry: Arc<A>,
    reports: ReportService<R, C>,
    replies: Replies,
    chat_locks: DashMap<ChatId, Arc<Mutex<()>>>,
}

impl<T, S, A, R, C> ConversationEngine<T, S, A, R, C>
where
    T: IssueTrackerClient,
    S: SessionStore,
    A: AuthorizedRegistry,
    R: ReportRenderer,
    C: Clock + Send + Sync,
{
    /// Creates an engine with the default reply templates.
    #[must_use]
    pub fn new(
        tracker: Arc<T>,
        sessions: Arc<S>,
        registry: Arc<A>,
        reports: ReportService<R, C>,
    ) -> Self {
        Self {
            tracker,
            sessions,
            registry,
            reports,
            replies: Replies::default(),
            chat_locks: DashMap::new(),
        }
    }

    /// Replaces the reply templates.
    #[must_use]
    pub fn with_replies(mut self, replies: Replies) -> Self {
        self.replies = replies;
        self
    }

    /// Processes one event to completion and returns the replies.
    ///
    /// Never fails: errors are logged and answered with a reply, and the
    /// chat's session is left unchanged.
    pub async fn handle_event(&self, event: InboundEvent) -> Vec<OutboundAction> {
        let chat_id = event.chat_id();
        let lock = self.chat_lock(chat_id);
        let actions = {
            let _serialized = lock.lock().await;
            self.process_logged(&event).await
        };
        drop(lock);
        self.release_chat_lock(chat_id);
        actions
    }

    async fn process_logged(&self, event: &InboundEvent) -> Vec<OutboundAction> {
        let chat_id = event.chat_id();
        tracing::debug!(%chat_id, event = event.kind(), "processing event");
        match self.process(event).await {
            Ok(actions) => actions,
            Err(error) => {
                if error.is_user_error() {
                    tracing::info!(%chat_id, event = event.kind(), %error, "request rejected");
                } else {
                    tracing::error!(%chat_id, event = event.kind(), %error, "request failed");
                }
                vec![OutboundAction::text(chat_id, self.reply_for(&error))]
            }
        }
    }

    fn chat_lock(&self, chat_id: ChatId) -> Arc<Mutex<()>> {
        Arc::clone(self.chat_locks.entry(chat_id).or_default().value())
    }

    /// Drops the chat's lock entry once no other event holds or awaits it.
    fn release_chat_lock(&self, chat_id: ChatId) {
        self.chat_locks
            .remove_if(&chat_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    /// Number of chats with an event in flight.
    #[cfg(test)]
    pub(crate) fn locked_chats(&self) -> usize {
        self.chat_locks.len()
    }

    async fn process(&self, event: &InboundEvent) -> ConversationResult<Vec<OutboundAction>> {
        let chat_id = event.chat_id();
        let session = self.sessions.load(chat_id).await?;
        let transition = self.transition(&session, event).await?;
        self.commit(chat_id, &session, transition).await
    }

    async fn commit(
        &self,
        chat_id: ChatId,
        previous: &Session,
        transition: Transition,
    ) -> ConversationResult<Vec<OutboundAction>> {
        if let Some(name) = &transition.register {
            if self.registry.register(name).await? {
                tracing::info!(%chat_id, user = %name, "name added to authorized registry");
            }
        }
        if transition.next != *previous {
            self.sessions.save(chat_id, &transition.next).await?;
        }
        Ok(transition.actions)
    }

    async fn transition(
        &self,
        session: &Session,
        event: &InboundEvent,
    ) -> ConversationResult<Transition> {
        match event {
            InboundEvent::Start { chat_id } => {
                tracing::info!(%chat_id, "sign-in requested");
                Ok(Transition::to(
                    Session::awaiting_name(),
                    OutboundAction::text(*chat_id, self.replies.name_prompt()),
                ))
            }
            InboundEvent::Text { chat_id, text } => match session.state() {
                SessionState::AwaitingName => self.resolve_name(*chat_id, text).await,
                SessionState::Authorized => Ok(Transition::stay(
                    session,
                    OutboundAction::text(*chat_id, self.replies.not_understood()),
                )),
                SessionState::Fresh => Ok(Transition::stay(
                    session,
                    OutboundAction::text(*chat_id, self.replies.use_start()),
                )),
            },
            InboundEvent::Status { chat_id } => {
                let name = self.authorized_name(session).await?;
                let action = self.report(*chat_id, name).await?;
                Ok(Transition::stay(session, action))
            }
            InboundEvent::Accept { chat_id, args } => {
                self.decide(session, *chat_id, TaskDecision::Accept, args)
                    .await
            }
            InboundEvent::Reject { chat_id, args } => {
                self.decide(session, *chat_id, TaskDecision::Reject, args)
                    .await
            }
            InboundEvent::Unknown { chat_id, command } => {
                if session.state() == SessionState::Fresh {
                    return Ok(Transition::stay(
                        session,
                        OutboundAction::text(*chat_id, self.replies.use_start()),
                    ));
                }
                Err(ConversationError::UnhandledEvent {
                    description: format!("unknown command /{command}"),
                })
            }
        }
    }

    async fn resolve_name(&self, chat_id: ChatId, text: &str) -> ConversationResult<Transition> {
        let name = text.trim();
        if name.is_empty() {
            return Err(ConversationError::NameNotFound {
                name: String::new(),
            });
        }

        let known = self.tracker.list_known_users().await?;
        if !known.contains(name) {
            return Err(ConversationError::NameNotFound {
                name: name.to_owned(),
            });
        }

        let next = Session::authorized(name)?;
        let action = self.report(chat_id, name).await?;
        tracing::info!(%chat_id, user = name, "name resolved, chat authorized");
        Ok(Transition {
            next,
            register: Some(name.to_owned()),
            actions: vec![action],
        })
    }

    async fn report(&self, chat_id: ChatId, name: &str) -> ConversationResult<OutboundAction> {
        let issues = self.tracker.list_user_tasks(name).await?;
        let image = self.reports.produce(name, &issues)?;
        tracing::info!(%chat_id, user = name, issues = issues.len(), "status report ready");
        Ok(OutboundAction::image(chat_id, image))
    }

    async fn decide(
        &self,
        session: &Session,
        chat_id: ChatId,
        decision: TaskDecision,
        args: &[String],
    ) -> ConversationResult<Transition> {
        let name = self.authorized_name(session).await?;
        let raw = args.first().map(String::as_str).unwrap_or_default();
        let task_id: IssueId = raw
            .parse()
            .map_err(|_| ConversationError::InvalidTaskId {
                raw: raw.to_owned(),
            })?;

        let submitted = match decision {
            TaskDecision::Accept => self.tracker.accept_task(name, task_id).await,
            TaskDecision::Reject => self.tracker.reject_task(name, task_id).await,
        };
        submitted.map_err(|source| ConversationError::DecisionFailed {
            decision,
            task_id,
            source,
        })?;

        tracing::info!(%chat_id, user = name, %task_id, %decision, "decision forwarded");
        Ok(Transition::stay(
            session,
            OutboundAction::text(chat_id, self.replies.decision_succeeded(decision, task_id)),
        ))
    }

    /// Returns the session's name when both the session flag and the shared
    /// registry agree that it is authorized.
    async fn authorized_name<'s>(&self, session: &'s Session) -> ConversationResult<&'s str> {
        let name = session
            .authorized_name()
            .ok_or(ConversationError::NotAuthorized)?;
        if !self.registry.contains(name).await? {
            return Err(ConversationError::NotAuthorized);
        }
        Ok(name)
    }

    fn reply_for(&self, error: &ConversationError) -> String {
        match error {
            ConversationError::NotAuthorized => self.replies.not_authorized(),
            ConversationError::NameNotFound { name } => self.replies.name_not_found(name),
            ConversationError::InvalidTaskId { raw } => self.replies.invalid_task_id(raw),
            ConversationError::UnhandledEvent { .. } => self.replies.not_understood(),
            ConversationError::DecisionFailed {
                decision,
                task_id,
                source: TrackerError::TaskNotFound(_),
            } => self.replies.decision_failed(*decision, *task_id),
            ConversationError::DecisionFailed { .. }
            | ConversationError::Tracker(_)
            | ConversationError::Render(_)
            | ConversationError::SessionStore(_)
            | ConversationError::Registry(_)
            | ConversationError::Session(_) => self.replies.generic_failure(),
        }
    }
}

#[async_trait]
impl<T, S, A, R, C> ConversationHandler for ConversationEngine<T, S, A, R, C>
where
    T: IssueTrackerClient,
    S: SessionStore,
    A: AuthorizedRegistry,
    R: ReportRenderer,
    C: Clock + Send + Sync,
{
    async fn handle(&self, event: InboundEvent) -> Vec<OutboundAction> {
        self.handle_event(event).await
    }
}
