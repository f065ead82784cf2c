//! Behavioural tests for the inbound admin command flow.

use std::sync::Arc;

use eyre::{Result, eyre};
use maitre::app::{Stores, build_state};
use maitre::audit::{adapters::memory::InMemoryCommandLog, domain::CommandLogEntry};
use maitre::catalog::domain::ProductFilter;
use maitre::config::AppConfig;
use maitre::server::AppState;
use maitre::whatsapp::{adapters::memory::RecordingNotifier, domain::WebhookEvent};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;

#[derive(Default)]
struct AdminCommandWorld {
    state: Option<Arc<AppState>>,
    stores: Option<Stores>,
    notifier: RecordingNotifier,
    command_log: InMemoryCommandLog,
}

impl AdminCommandWorld {
    fn last_reply(&self) -> Result<String> {
        self.notifier
            .sent()
            .pop()
            .map(|message| message.text)
            .ok_or_else(|| eyre!("no reply was sent"))
    }

    fn logged(&self) -> Result<Vec<CommandLogEntry>> {
        Ok(self.command_log.entries()?)
    }

    fn last_logged(&self) -> Result<CommandLogEntry> {
        self.logged()?
            .pop()
            .ok_or_else(|| eyre!("no command attempt was logged"))
    }
}

#[fixture]
fn world() -> AdminCommandWorld {
    AdminCommandWorld::default()
}

fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

#[given(r#"a store with admin phone "{phone}""#)]
fn store_with_admin(world: &mut AdminCommandWorld, phone: String) -> Result<()> {
    let config = AppConfig::from_lookup(|key| {
        (key == "WHATSAPP_ADMIN_PHONES").then(|| phone.clone())
    })?;
    let stores = Stores {
        command_log: Arc::new(world.command_log.clone()),
        ..Stores::in_memory()
    };
    world.state = Some(build_state(
        &config,
        stores.clone(),
        Arc::new(world.notifier.clone()),
    ));
    world.stores = Some(stores);
    Ok(())
}

#[when(r#""{from}" sends "{text}""#)]
fn phone_sends(world: &mut AdminCommandWorld, from: String, text: String) -> Result<()> {
    let state = world
        .state
        .as_ref()
        .ok_or_else(|| eyre!("store not set up"))?;
    let event = WebhookEvent::from_json(json!({
        "object": "whatsapp_business_account",
        "entry": [{
            "changes": [{
                "value": {
                    "metadata": { "display_phone_number": "15550783881" },
                    "contacts": [{ "profile": { "name": "Ines" } }],
                    "messages": [{
                        "from": from,
                        "id": "wamid.HBgLNDQ3NzAw",
                        "timestamp": "1718000000",
                        "type": "text",
                        "text": { "body": text }
                    }]
                }
            }]
        }]
    }));

    let outcomes = run_async(state.inbound.handle_event(&event));
    if outcomes.len() != 1 {
        return Err(eyre!("expected one outcome, got {}", outcomes.len()));
    }
    Ok(())
}

#[then(r#"the reply contains "{fragment}""#)]
fn reply_contains(world: &AdminCommandWorld, fragment: String) -> Result<()> {
    let reply = world.last_reply()?;
    assert!(reply.contains(&fragment), "reply was {reply}");
    Ok(())
}

#[then(r#"the reply is "{expected}""#)]
fn reply_is(world: &AdminCommandWorld, expected: String) -> Result<()> {
    assert_eq!(world.last_reply()?, expected);
    Ok(())
}

#[then("{count} command attempt is logged")]
fn one_attempt_logged(world: &AdminCommandWorld, count: usize) -> Result<()> {
    assert_eq!(world.logged()?.len(), count);
    Ok(())
}

#[then("{count} command attempts are logged")]
fn attempts_logged(world: &AdminCommandWorld, count: usize) -> Result<()> {
    assert_eq!(world.logged()?.len(), count);
    Ok(())
}

#[then("the last logged attempt succeeded")]
fn last_attempt_succeeded(world: &AdminCommandWorld) -> Result<()> {
    assert!(world.last_logged()?.succeeded);
    Ok(())
}

#[then("the last logged attempt failed")]
fn last_attempt_failed(world: &AdminCommandWorld) -> Result<()> {
    assert!(!world.last_logged()?.succeeded);
    Ok(())
}

#[then(r#"the last logged command is "{command}""#)]
fn last_logged_command(world: &AdminCommandWorld, command: String) -> Result<()> {
    assert_eq!(world.last_logged()?.command, command);
    Ok(())
}

#[then("the catalogue holds {count} products")]
fn catalogue_size(world: &AdminCommandWorld, count: usize) -> Result<()> {
    let stores = world
        .stores
        .as_ref()
        .ok_or_else(|| eyre!("store not set up"))?;
    let products = run_async(stores.products.list(ProductFilter::All, 100))?;
    assert_eq!(products.len(), count);
    Ok(())
}

#[scenario(path = "tests/features/admin_command.feature", name = "Admin adds a product")]
#[tokio::test(flavor = "multi_thread")]
async fn admin_adds_product(world: AdminCommandWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/admin_command.feature",
    name = "Negative price is refused without a store write"
)]
#[tokio::test(flavor = "multi_thread")]
async fn negative_price_refused(world: AdminCommandWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/admin_command.feature",
    name = "Availability change for a missing product"
)]
#[tokio::test(flavor = "multi_thread")]
async fn availability_for_missing_product(world: AdminCommandWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/admin_command.feature",
    name = "Unknown command is still logged"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_command_logged(world: AdminCommandWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/admin_command.feature",
    name = "Command from an unlisted phone is refused"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unlisted_phone_refused(world: AdminCommandWorld) {
    let _ = world;
}
