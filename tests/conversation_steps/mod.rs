//! BDD scenarios for the conversation relay.

mod given;
mod then;

use rstest_bdd_macros::scenario;
use world::ConversationWorld;

#[scenario(
    path = "tests/features/conversation.feature",
    name = "Known user signs in and receives a status chart"
)]
#[tokio::test(flavor = "multi_thread")]
async fn known_user_signs_in(#[from(world::world)] world: ConversationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/conversation.feature",
    name = "Unknown name is asked for again"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_name_is_asked_again(#[from(world::world)] world: ConversationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/conversation.feature",
    name = "Chat that never signed in cannot request a report"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unsigned_chat_cannot_request_report(#[from(world::world)] world: ConversationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/conversation.feature",
    name = "Tracker outage while accepting a task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn tracker_outage_while_accepting(#[from(world::world)] world: ConversationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/conversation.feature",
    name = "Task number that is not a number"
)]
#[tokio::test(flavor = "multi_thread")]
async fn task_number_not_a_number(#[from(world::world)] world: ConversationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/conversation.feature",
    name = "Accepting an assigned task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn accepting_assigned_task(#[from(world::world)] world: ConversationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/conversation.feature",
    name = "Two chats sign in under the same name"
)]
#[tokio::test(flavor = "multi_thread")]
async fn two_chats_same_name(#[from(world::world)] world: ConversationWorld) {
    let _ = world;
}
