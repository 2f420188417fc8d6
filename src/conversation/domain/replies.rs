//! User-facing reply templates.
//!
//! Every reply is a `minijinja` template so deployments can reword or
//! translate them from configuration. Templates are checked with
//! [`Replies::validate`] when configuration is loaded; a template that still
//! fails at render time is sent verbatim.

use minijinja::{Environment, Value, context};
use serde::Deserialize;

use super::ReplyTemplateError;
use crate::tracker::domain::{IssueId, TaskDecision};

/// Reply templates for every conversation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Replies {
    /// Asks for the user's full name.
    pub name_prompt: String,
    /// The submitted name is unknown to the tracker. Receives `name`.
    pub name_not_found: String,
    /// The chat may not use the command.
    pub not_authorized: String,
    /// Sent to chats that have not started signing in.
    pub use_start: String,
    /// Free text or an unknown command from a signed-in chat.
    pub not_understood: String,
    /// The task was accepted. Receives `task_id`.
    pub accept_succeeded: String,
    /// The task was rejected. Receives `task_id`.
    pub reject_succeeded: String,
    /// The task to accept is not the user's. Receives `task_id`.
    pub accept_failed: String,
    /// The task to reject is not the user's. Receives `task_id`.
    pub reject_failed: String,
    /// The task argument is not a task number. Receives `raw`.
    pub invalid_task_id: String,
    /// Any other failure.
    pub generic_failure: String,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            name_prompt: "Please enter your full name to check the status of your tasks:"
                .to_owned(),
            name_not_found: "Sorry, {% if name %}{{ name }}, {% endif %}you were not found \
                             in the issue tracker. Please try entering your full name again."
                .to_owned(),
            not_authorized: "You are not authorized to access this data.".to_owned(),
            use_start: "Sorry, I don't understand this command. Please use the /start command."
                .to_owned(),
            not_understood: "Sorry, I don't understand this command. \
                             Please use the /status command or enter your full name."
                .to_owned(),
            accept_succeeded: "Task {{ task_id }} has been accepted.".to_owned(),
            reject_succeeded: "Task {{ task_id }} has been rejected.".to_owned(),
            accept_failed: "Task {{ task_id }} could not be accepted: \
                            it is not among your tasks."
                .to_owned(),
            reject_failed: "Task {{ task_id }} could not be rejected: \
                            it is not among your tasks."
                .to_owned(),
            invalid_task_id: "{% if raw %}'{{ raw }}' is not a valid task number. {% endif %}\
                              Usage: /accept <task number> or /reject <task number>."
                .to_owned(),
            generic_failure: "An unexpected error occurred. Please try again later.".to_owned(),
        }
    }
}

impl Replies {
    /// Checks that every template parses.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyTemplateError`] naming the first broken template.
    pub fn validate(&self) -> Result<(), ReplyTemplateError> {
        let environment = Environment::new();
        for (name, source) in self.templates() {
            environment
                .template_from_str(source)
                .map_err(|error| ReplyTemplateError {
                    name,
                    reason: error.to_string(),
                })?;
        }
        Ok(())
    }

    /// Reply asking for the full name.
    #[must_use]
    pub fn name_prompt(&self) -> String {
        render(&self.name_prompt, context! {})
    }

    /// Reply for a name the tracker does not know.
    #[must_use]
    pub fn name_not_found(&self, name: &str) -> String {
        render(&self.name_not_found, context! { name })
    }

    /// Reply for commands the chat may not use.
    #[must_use]
    pub fn not_authorized(&self) -> String {
        render(&self.not_authorized, context! {})
    }

    /// Reply for chats that have not started signing in.
    #[must_use]
    pub fn use_start(&self) -> String {
        render(&self.use_start, context! {})
    }

    /// Reply for input the relay cannot act on.
    #[must_use]
    pub fn not_understood(&self) -> String {
        render(&self.not_understood, context! {})
    }

    /// Reply confirming a forwarded decision.
    #[must_use]
    pub fn decision_succeeded(&self, decision: TaskDecision, task_id: IssueId) -> String {
        let template = match decision {
            TaskDecision::Accept => &self.accept_succeeded,
            TaskDecision::Reject => &self.reject_succeeded,
        };
        render(template, context! { task_id => task_id.value() })
    }

    /// Reply for a decision on a task the user does not hold.
    #[must_use]
    pub fn decision_failed(&self, decision: TaskDecision, task_id: IssueId) -> String {
        let template = match decision {
            TaskDecision::Accept => &self.accept_failed,
            TaskDecision::Reject => &self.reject_failed,
        };
        render(template, context! { task_id => task_id.value() })
    }

    /// Reply for a task argument that is not a task number.
    #[must_use]
    pub fn invalid_task_id(&self, raw: &str) -> String {
        render(&self.invalid_task_id, context! { raw })
    }

    /// Reply for any other failure.
    #[must_use]
    pub fn generic_failure(&self) -> String {
        render(&self.generic_failure, context! {})
    }

    fn templates(&self) -> [(&'static str, &str); 11] {
        [
            ("name_prompt", self.name_prompt.as_str()),
            ("name_not_found", self.name_not_found.as_str()),
            ("not_authorized", self.not_authorized.as_str()),
            ("use_start", self.use_start.as_str()),
            ("not_understood", self.not_understood.as_str()),
            ("accept_succeeded", self.accept_succeeded.as_str()),
            ("reject_succeeded", self.reject_succeeded.as_str()),
            ("accept_failed", self.accept_failed.as_str()),
            ("reject_failed", self.reject_failed.as_str()),
            ("invalid_task_id", self.invalid_task_id.as_str()),
            ("generic_failure", self.generic_failure.as_str()),
        ]
    }
}

fn render(template: &str, values: Value) -> String {
    Environment::new()
        .render_str(template, values)
        .unwrap_or_else(|error| {
            tracing::warn!(%error, template, "reply template failed to render");
            template.to_owned()
        })
}
