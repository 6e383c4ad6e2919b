use add_to_project::action::board::GithubProjectBoard;
use add_to_project::action::event::EventPayload;
use add_to_project::action::inputs::ActionInputs;
use add_to_project::action::outputs;
use add_to_project::action::runner::{self, Outcome};
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let inputs = ActionInputs::parse();
    inputs.validate()?;

    let payload = EventPayload::load(&inputs.event_path).with_context(|| {
        format!(
            "Failed to read event payload from {}",
            inputs.event_path.display()
        )
    })?;

    let subject = payload.subject().unwrap_or_else(|| {
        log::warn!("Event payload contains neither an issue nor a pull request");
        Default::default()
    });

    let board = GithubProjectBoard::with_token(inputs.github_token.clone())?;

    match runner::run(&inputs.gate(), inputs.project_url(), &subject, &board).await? {
        Outcome::Skipped => {}
        Outcome::Added { item_id } => {
            outputs::set_output("itemId", &item_id).context("Failed to set itemId output")?;
        }
    }

    Ok(())
}
