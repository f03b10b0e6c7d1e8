use super::output;
use crate::adapter::outbound::bedrock::FoundationModel;
use crate::error::Result;
use crate::infrastructure::bootstrap::connect_bedrock;
use crate::infrastructure::config::Config;

/// List foundation models and report the Claude ones.
pub async fn execute(config: &Config) -> Result<()> {
    output::section("Bedrock Access");
    output::field("Region", &config.bedrock.region);
    output::field("Model", &config.bedrock.model_id);

    let listed = match connect_bedrock(&config.bedrock).await {
        Ok(client) => client.list_foundation_models().await,
        Err(e) => Err(e),
    };

    let models = match listed {
        Ok(models) => models,
        Err(e) => {
            output::note("Check your AWS credentials and permissions");
            return Err(e.into());
        }
    };

    output::success("Connected to Bedrock");
    output::field("Models", models.len());

    let claude: Vec<&FoundationModel> = models.iter().filter(|m| m.is_claude()).collect();
    if claude.is_empty() {
        output::warning("No Claude models available");
        output::note("Check that access to Anthropic models has been approved");
        return Ok(());
    }

    output::success("Claude models available:");
    for model in &claude {
        output::item(&model.model_id);
    }
    if !claude.iter().any(|m| m.model_id == config.bedrock.model_id) {
        output::warning("Configured model is not in the listing");
    }
    Ok(())
}
