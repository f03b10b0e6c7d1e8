use serde_json::json;

use super::command::ProbeArgs;
use super::output;
use crate::domain::{ChatMessage, ConversationRequest, GenerationRequest};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Run one generate and one chat request in the selected mode.
pub async fn execute(mut config: Config, args: ProbeArgs) -> Result<()> {
    if let Some(mode) = args.mode {
        config.gateway.mode = mode;
    }
    let gateway = bootstrap::build_gateway(&config).await;

    output::section("Probe");
    output::field("Mode", gateway.mode());

    let mut generate = GenerationRequest::new(args.prompt);
    if let Some(n) = args.max_tokens {
        generate = generate.with_max_tokens(Some(n));
    }
    let generated = gateway.generate_text(generate).await?;

    output::section("Generate");
    output::field("Model", &generated.model_id);
    output::field("Input tokens", generated.usage.input_tokens);
    output::field("Output tokens", generated.usage.output_tokens);
    output::lines(&generated.text);
    output::record("generate", json!(generated));

    let mut chat = ConversationRequest::new(vec![ChatMessage::user(args.message)]);
    if let Some(n) = args.max_tokens {
        chat = chat.with_max_tokens(Some(n));
    }
    let replied = gateway.chat(chat).await?;

    output::section("Chat");
    output::field("Model", &replied.model_id);
    output::field("Role", replied.message.role);
    output::lines(&replied.message.content);
    output::record("chat", json!(replied));

    output::success("Probe complete");
    Ok(())
}
