//! Submission command implementation.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use serde_json::Value;

use terrain_api::{AppId, Session, Submission, SystemId};

use crate::output;

#[derive(Args, Debug)]
pub struct SubmissionArgs {
    /// Backend managing the app (de or agave)
    pub system_id: SystemId,

    /// App identifier
    pub app_id: AppId,

    /// Analysis name (defaults to the app name plus a timestamp)
    #[arg(long)]
    pub name: Option<String>,

    /// Output folder (defaults to /iplant/home/<user>/analyses)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Parameter value as ID=VALUE; VALUE is parsed as JSON, else taken as a string
    #[arg(long = "param", value_name = "ID=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, Value)>,

    /// Submit the analysis instead of only printing the payload
    #[arg(long)]
    pub submit: bool,
}

pub async fn run(args: SubmissionArgs, session: Session) -> Result<()> {
    let detail = session
        .get_app(args.system_id, &args.app_id)
        .await
        .context("Failed to get app")?;

    let name = args
        .name
        .unwrap_or_else(|| Submission::default_name(&detail, Utc::now()));
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| Submission::default_output_dir(session.username()));

    let mut submission =
        Submission::from_app(&detail, name, output_dir).context("Failed to assemble submission")?;
    for (id, value) in args.params {
        submission.set_param(&id, value)?;
    }

    if !args.submit {
        output::json_pretty(&submission)?;
        let missing = submission.missing_required();
        if !missing.is_empty() {
            eprintln!();
            eprintln!("{}", "Required parameters without a value:".yellow());
            for param in missing {
                eprintln!("  {} ({})", param.display_name(), param.id.dimmed());
            }
        }
        return Ok(());
    }

    let response = session
        .submit_analysis(&submission)
        .await
        .context("Failed to submit analysis")?;

    output::success("Analysis submitted");
    println!();
    output::field("Name", &submission.name);
    if let Some(id) = &response.id {
        output::field("ID", id);
    }
    if let Some(status) = &response.status {
        output::field("Status", status);
    }

    Ok(())
}

fn parse_param(raw: &str) -> Result<(String, Value)> {
    let Some((id, value)) = raw.split_once('=') else {
        bail!("expected ID=VALUE, got '{}'", raw);
    };
    if id.is_empty() {
        bail!("parameter ID must not be empty");
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((id.to_string(), value))
}
