//! Tools listing command

use crate::config::CliConfigLoader;
use anyhow::Result;
use tracing::info;

/// Show the FAQ tools and the data they serve
pub async fn tools_command(config_loader: CliConfigLoader) -> Result<()> {
    info!("Listing available tools");

    let settings = config_loader.load().await?;
    let registry = super::load_registry(&settings).await?;

    println!("🛠️  Available Tools\n");

    let tools = registry
        .list_tools()
        .into_iter()
        .filter_map(|name| registry.get_tool(name));

    for tool in tools {
        println!("📦 {}", tool.name());
        println!("   {}", tool.description());
        for param in &tool.spec().parameters {
            let required = if param.required { ", required" } else { "" };
            println!(
                "     • {} ({}{}): {}",
                param.name, param.param_type, required, param.description
            );
        }
        println!();
    }

    println!("📚 FAQ data: {}", settings.faq_data_path.display());

    Ok(())
}
