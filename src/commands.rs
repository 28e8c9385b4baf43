//! Subcommand handlers for tabfix.

use tabfix_core::{Status, StatusKind, Trigger, TriggerAction};
use tabfix_protocols::message::{ExtensionRequest, ExtensionResponse};
use tabfix_protocols::tool::OperationResult;

use crate::app::App;
use crate::cli::Commands;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Handle one subcommand.
pub(crate) async fn handle_command(command: Commands, app: &App) -> CmdResult {
    match command {
        Commands::Tools => list_tools(app).await,
        Commands::Run { tool } => ui_action(app, tool, TriggerAction::Run).await,
        Commands::Undo { tool } => ui_action(app, tool, TriggerAction::Restore).await,
        Commands::Shortcut { command } => shortcut(app, command).await,
        Commands::Active { tool } => active(app, tool).await,
        Commands::Status { tool } => status(app, tool).await,
        Commands::Send { message } => send(app, &message).await,
    }
}

async fn list_tools(app: &App) -> CmdResult {
    let active = app.active.get().await?;
    let tools = app.registry.list();
    if tools.is_empty() {
        println!("No tools configured.");
        return Ok(());
    }

    println!("  {:<20} {:<24} {}", "ID", "NAME", "DESCRIPTION");
    println!("{}", "-".repeat(80));
    for tool in tools {
        let mark = if tool.id == active { "*" } else { " " };
        println!("{} {:<20} {:<24} {}", mark, tool.id, tool.name, tool.description);
    }
    Ok(())
}

async fn resolve_tool(app: &App, tool: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match tool {
        Some(id) => Ok(id),
        None => Ok(app.active.get().await?),
    }
}

async fn ui_action(app: &App, tool: Option<String>, action: TriggerAction) -> CmdResult {
    let tool_id = resolve_tool(app, tool).await?;
    let result = app.router.trigger(Trigger::Ui { tool_id, action }).await;
    report(result.as_ref())
}

async fn shortcut(app: &App, command: String) -> CmdResult {
    let result = app.router.trigger(Trigger::Shortcut(command.clone())).await;
    if result.is_none() {
        println!("Command {} is not bound.", command);
        return Ok(());
    }
    report(result.as_ref())
}

/// Print the status line of an operation; failures become the exit error.
fn report(result: Option<&OperationResult>) -> CmdResult {
    let Some(result) = result else {
        return Ok(());
    };
    let status = Status::from(result);
    match status.kind {
        StatusKind::Error => Err(status.message.into()),
        _ => {
            println!("{}", status);
            Ok(())
        }
    }
}

async fn active(app: &App, tool: Option<String>) -> CmdResult {
    let Some(tool_id) = tool else {
        println!("{}", app.active.get().await?);
        return Ok(());
    };

    match app
        .router
        .handle(ExtensionRequest::SetActiveTool { tool_id: tool_id.clone() })
        .await
    {
        ExtensionResponse::Ack { success: false, message } => {
            Err(message.unwrap_or_else(|| format!("Could not select {}", tool_id)).into())
        }
        _ => {
            println!("Active tool: {}", tool_id);
            Ok(())
        }
    }
}

async fn status(app: &App, tool: Option<String>) -> CmdResult {
    let tool_id = resolve_tool(app, tool).await?;
    match app
        .router
        .handle(ExtensionRequest::HasToolData { tool_id: tool_id.clone() })
        .await
    {
        ExtensionResponse::ToolData { has_data: true, .. } => {
            println!("{}: undo data stored", tool_id);
        }
        ExtensionResponse::ToolData { success: true, .. } => {
            println!("{}: nothing to undo", tool_id);
        }
        _ => return Err(format!("Could not read undo data for {}", tool_id).into()),
    }
    Ok(())
}

async fn send(app: &App, message: &str) -> CmdResult {
    let response = app.router.handle_json(message).await;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
