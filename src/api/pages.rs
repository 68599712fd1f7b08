//! Server-rendered chat page

use crate::api::assistant::schemas::ModeOption;
use crate::core::assistant::ModelMode;
use axum::http::StatusCode;
use axum::response::Html;
use log::error;
use minijinja::{Environment, context};

pub const PAGE_TITLE: &str = "💡 Hackathon Demo - AI Assistant";

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

pub fn render_index() -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("index.html", INDEX_TEMPLATE)?;
    let template = env.get_template("index.html")?;

    let modes: Vec<ModeOption> = ModelMode::ALL.into_iter().map(ModeOption::from).collect();

    template.render(context! {
        title => PAGE_TITLE,
        modes => modes,
        default_mode => ModelMode::Mistral.id(),
    })
}

pub async fn index() -> Result<Html<String>, (StatusCode, &'static str)> {
    render_index().map(Html).map_err(|e| {
        error!("failed to render index page: {e}");
        (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lists_both_modes() {
        let page = render_index().unwrap();

        assert!(page.contains(PAGE_TITLE));
        assert!(page.contains(r#"value="mistral""#));
        assert!(page.contains(r#"value="oss""#));
        assert!(page.contains("Mistral (fast via API)"));
        assert!(page.contains("OSS (offline demo)"));
    }

    #[test]
    fn test_index_has_chat_controls() {
        let page = render_index().unwrap();

        assert!(page.contains("🚀 Load Model"));
        assert!(page.contains("Type your question:"));
        assert!(page.contains(r#"id="response""#));
        assert!(page.contains("/static/app.js"));
    }
}
