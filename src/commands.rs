//! Subcommand handlers.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use inkling_config::Config;
use inkling_core::{
    ActionMode, ControllerSettings, InteractionController, InteractionState, MemoryHost,
    PolicyAnalyzer,
};
use inkling_protocols::{
    Analyzer, AsyncTextService, HostBindings, HostTextSource, KeyPress, NodeId, NodeRef,
};
use inkling_provider_gemini::{model_id, GeminiTextService, GENERATE_CONTENT};

fn gemini_service(config: &Config) -> Result<GeminiTextService> {
    GeminiTextService::from_config(&config.gemini).context("Failed to create Gemini service")
}

/// Print the analysis of `text` under the configured policy.
pub(crate) fn analyze(config: &Config, text: &str) -> Result<()> {
    let result = PolicyAnalyzer.analyze(text, &config.policy, NodeRef::new(NodeId(0), 0));
    let json = serde_json::to_string_pretty(&result)?;
    println!("{}", json);
    Ok(())
}

/// List the models the key can see and mark the selected one.
pub(crate) async fn models(config: &Config) -> Result<()> {
    let service = gemini_service(config)?;
    let models = service.models().await?;
    let selected = service.select_model().await.ok();

    println!("{:<3} {:<40} {}", "", "MODEL", "GENERATES");
    println!("{}", "-".repeat(56));
    for model in &models {
        let id = model_id(&model.name);
        let marker = if selected.as_deref() == Some(id) { "*" } else { "" };
        let generates = if model.supports(GENERATE_CONTENT) { "yes" } else { "no" };
        println!("{:<3} {:<40} {}", marker, id, generates);
    }

    match selected {
        Some(id) => println!("\nSelected: {}", id),
        None => println!("\nNo model supports {}", GENERATE_CONTENT),
    }
    Ok(())
}

/// Rewrite `text` once.
pub(crate) async fn refine(config: &Config, text: &str) -> Result<()> {
    let service = gemini_service(config)?;
    let refined = service.transform(text).await?;
    println!("{}", refined);
    Ok(())
}

/// Type `text` into an in-memory field and walk the first highlighted span
/// through the whole flow.
pub(crate) async fn demo(config: Config, text: &str, debounce_ms: Option<u64>) -> Result<()> {
    let mut settings = ControllerSettings::from_config(&config);
    if let Some(ms) = debounce_ms {
        settings.debounce = Duration::from_millis(ms);
    }
    let trigger = KeyPress::new(settings.trigger_key.clone());

    let service: Arc<dyn AsyncTextService> = Arc::new(gemini_service(&config)?);
    let action = ActionMode::from_config(&config.action, service);
    info!("Demo with {:?} and {:?}", settings.policy, action);

    let host = Arc::new(MemoryHost::new(NodeId(1), ""));
    let bindings = HostBindings::from_host(host.clone());
    let mut controller = InteractionController::new(settings, bindings, action);

    controller.on_text_changed(host.set_text(text));
    controller.tick().await;
    if controller.state() != InteractionState::Ready {
        println!("Text does not qualify; nothing to do.");
        return Ok(());
    }
    println!("Highlighted {} span(s)", controller.spans().len());

    let Some(point) = controller.spans().first().and_then(|span| host.point_in(span)) else {
        bail!("Highlighted span has no layout");
    };
    controller.on_pointer_move(point);

    controller.on_key_down(&trigger);
    while controller.state() == InteractionState::Loading {
        debug!("Waiting for transform");
        controller.tick().await;
    }
    if controller.state() != InteractionState::Result {
        bail!("Flow ended in {:?}", controller.state());
    }

    let label = if controller.derived_failed() { "Failed" } else { "Result" };
    println!("{}: {}", label, controller.derived_text().unwrap_or_default());

    controller.on_key_down(&trigger);
    println!("Final text: {}", host.text());
    Ok(())
}
