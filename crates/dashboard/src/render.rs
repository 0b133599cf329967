// File: crates/dashboard/src/render.rs
// Summary: The `render` command: fetch every card, build both charts, write HTML/SVG/PNG artifacts.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use dash_client::{
    AuthContext, DashboardApi, FetchError, FetchResult, FileTokenStore, GraphQlClient, HttpTransport, LevelInfo,
    Profile, ProgressData, TokenStore,
};
use dash_core::cards::AuditStats;
use dash_core::types::{PROGRESS_ASPECT, SKILLS_ASPECT};
use dash_core::{
    bind_tooltips, max_per_category, theme, BarAnimation, ChartScene, Frame, ProgressChart, Record, SkillRecord,
    SkillsChart,
};
use dash_render_skia::RenderOptions;
use tracing::{error, info, warn};

use crate::config::DashboardConfig;
use crate::csv_source::load_records_csv;
use crate::page::{render_page, PageContent};

/// Card data for one render. `None` marks a card whose fetch failed.
#[derive(Debug, Default)]
pub struct Cards {
    pub profile: Option<Profile>,
    pub level: Option<LevelInfo>,
    pub audits: Option<AuditStats>,
    pub transactions: Option<Vec<Record>>,
    pub progress: Option<ProgressData>,
    pub skills: Option<Vec<SkillRecord>>,
}

/// Keep a successful card, log and drop a failed one. Session expiry aborts.
fn settle<T>(card: &str, result: FetchResult<T>) -> Result<Option<T>, FetchError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_session_expired() => Err(e),
        Err(e) => {
            error!(card, error = %e, "card fetch failed; rendering it empty");
            Ok(None)
        }
    }
}

/// Fetch every card in turn. Only `SessionExpired` is returned as an error.
pub async fn fetch_cards(api: &DashboardApi, ctx: &AuthContext, module: &str, with_progress: bool) -> Result<Cards, FetchError> {
    let profile = settle("profile", api.profile(ctx).await)?;
    let level = settle("level", api.level(ctx, module).await)?;
    let audits = settle("audits", api.audits(ctx).await)?;
    let transactions = settle("transactions", api.transactions(ctx).await)?;
    let progress = if with_progress { settle("progress", api.progress(ctx, module).await)? } else { None };
    let skills = settle("skills", api.skills(ctx).await)?;
    Ok(Cards { profile, level, audits, transactions, progress, skills })
}

/// Progress and skills scenes with tooltips bound.
pub fn build_scenes(cfg: &DashboardConfig, records: &[Record], series_start: DateTime<Utc>, skills: &[SkillRecord]) -> (ChartScene, ChartScene) {
    let palette = theme::find(&cfg.palette);

    let mut progress = ProgressChart::new(Frame::for_container(cfg.container_width, PROGRESS_ASPECT), palette)
        .build(records, series_start);
    bind_tooltips(&mut progress, &cfg.tooltip.into());

    let animation = if cfg.animate { BarAnimation::default() } else { BarAnimation::disabled() };
    let skills_chart = SkillsChart {
        animation,
        ..SkillsChart::new(Frame::for_container(cfg.container_width, SKILLS_ASPECT), palette)
    };
    let skills = skills_chart.build(&max_per_category(skills));

    if let Some(reason) = &progress.empty {
        warn!(%reason, "progress chart has no drawable data");
    }
    if let Some(reason) = &skills.empty {
        warn!(%reason, "skills chart has no drawable data");
    }
    (progress, skills)
}

/// Progress records and the time the series starts at: the CSV when given,
/// otherwise the fetched module data.
fn progress_input(cards: &Cards, records_csv: Option<&Path>) -> Result<(Vec<Record>, DateTime<Utc>)> {
    if let Some(path) = records_csv {
        let records = load_records_csv(path)?;
        let start = records.first().map(|r| r.timestamp).unwrap_or_default();
        info!(path = %path.display(), count = records.len(), "progress records loaded from csv");
        return Ok((records, start));
    }
    Ok(match &cards.progress {
        Some(p) => (p.records.clone(), p.window.start),
        None => (Vec::new(), DateTime::<Utc>::default()),
    })
}

/// Write all artifacts into `cfg.output_dir`. Returns the written paths.
pub fn write_outputs(cfg: &DashboardConfig, cards: &Cards, progress: &ChartScene, skills: &ChartScene) -> Result<Vec<PathBuf>> {
    let dir = &cfg.output_dir;
    let progress_svg = progress.to_svg();
    let skills_svg = skills.to_svg();
    let palette = theme::find(&cfg.palette);

    let html = render_page(&PageContent {
        palette: &palette,
        profile: cards.profile.as_ref(),
        level: cards.level.as_ref(),
        audits: cards.audits.as_ref(),
        transactions: cards.transactions.as_deref(),
        progress_svg: &progress_svg,
        skills_svg: &skills_svg,
    });

    let mut written = Vec::new();
    for (name, body) in [("dashboard.html", &html), ("progress.svg", &progress_svg), ("skills.svg", &skills_svg)] {
        let path = dir.join(name);
        std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }

    if cfg.export_png {
        let opts = RenderOptions {
            background: dash_render_skia::color::parse_color(palette.background),
            ..RenderOptions::default()
        };
        for (name, scene) in [("progress.png", progress), ("skills.png", skills)] {
            let path = dir.join(name);
            dash_render_skia::render_to_png(&scene.root, &opts, &path)?;
            written.push(path);
        }
    }

    for path in &written {
        info!(path = %path.display(), "wrote artifact");
    }
    Ok(written)
}

pub async fn run(cfg: &DashboardConfig, records_csv: Option<&Path>) -> Result<()> {
    if !cfg.output_dir.is_dir() {
        warn!(dir = %cfg.output_dir.display(), "output directory does not exist; nothing rendered");
        return Ok(());
    }

    let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&cfg.token_file));
    let ctx = AuthContext::from_store(store).context("reading session token")?;

    let cards = match &ctx {
        Some(ctx) => {
            let transport = Arc::new(HttpTransport::new());
            let api = DashboardApi::new(GraphQlClient::new(&cfg.graphql_endpoint, transport));
            match fetch_cards(&api, ctx, &cfg.module, records_csv.is_none()).await {
                Ok(cards) => cards,
                Err(e) => bail!("{e}; run `dashboard login` again"),
            }
        }
        None if records_csv.is_some() => {
            warn!("not signed in; only the csv-backed progress chart is rendered");
            Cards::default()
        }
        None => bail!("not signed in; run `dashboard login` first"),
    };

    let (records, start) = progress_input(&cards, records_csv)?;
    let skills = cards.skills.as_deref().unwrap_or_default();
    let (progress_scene, skills_scene) = build_scenes(cfg, &records, start, skills);
    write_outputs(cfg, &cards, &progress_scene, &skills_scene)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use dash_client::{HttpRequest, HttpResponse, Transport, TransportError};
    use serde_json::{json, Value};

    /// Answers each query by matching a marker in its text.
    struct ByQuery(Vec<(&'static str, Value)>);

    #[async_trait]
    impl Transport for ByQuery {
        async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let query = request.body.as_ref().and_then(|b| b["query"].as_str()).unwrap_or_default().to_string();
            self.0
                .iter()
                .find(|(marker, _)| query.contains(marker))
                .map(|(_, body)| HttpResponse::ok(body.clone()))
                .ok_or_else(|| TransportError(format!("unexpected query: {query}")))
        }
    }

    fn api(routes: Vec<(&'static str, Value)>) -> DashboardApi {
        DashboardApi::new(GraphQlClient::new("http://fake/graphql", Arc::new(ByQuery(routes))))
    }

    #[tokio::test]
    async fn failed_cards_are_dropped_not_fatal() {
        let api = api(vec![
            ("firstName", json!({ "data": { "user": [{ "firstName": "Ada", "lastName": "L" }] } })),
            ("Level(", json!({ "errors": [{ "message": "field 'transaction' not found" }] })),
            ("_nin", json!({ "data": { "user": [{ "transactions": [{ "type": "skill_go", "amount": 40 }] }] } })),
        ]);
        let ctx = AuthContext::new("tok", || {});
        let cards = fetch_cards(&api, &ctx, "Module", true).await.unwrap();
        assert_eq!(cards.profile.unwrap().first_name, "Ada");
        assert!(cards.level.is_none());
        assert!(cards.audits.is_none());
        assert!(cards.progress.is_none());
        assert_eq!(cards.skills.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn session_expiry_aborts_the_render() {
        let api = api(vec![("firstName", json!({ "errors": [{ "message": "JWTExpired" }] }))]);
        let ctx = AuthContext::new("tok", || {});
        let err = fetch_cards(&api, &ctx, "Module", true).await.unwrap_err();
        assert!(err.is_session_expired());
    }

    #[test]
    fn writes_html_and_svgs() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DashboardConfig { output_dir: dir.path().to_path_buf(), ..DashboardConfig::default() };
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let records = vec![
            Record::new(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(), 1000.0, "a"),
            Record::new(Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap(), 2000.0, "b"),
        ];
        let (progress, skills) = build_scenes(&cfg, &records, start, &[]);
        assert!(!progress.is_empty_state());
        assert!(skills.is_empty_state());

        let written = write_outputs(&cfg, &Cards::default(), &progress, &skills).unwrap();
        assert_eq!(written.len(), 3);
        let html = std::fs::read_to_string(dir.path().join("dashboard.html")).unwrap();
        assert_eq!(html.matches("class=\"data-point\"").count(), 2);
        assert!(html.contains("data-tooltip-amount=\"2 KB\""));
        assert!(html.contains("No skills recorded yet"));
    }

    #[tokio::test]
    async fn missing_output_dir_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DashboardConfig { output_dir: dir.path().join("absent"), ..DashboardConfig::default() };
        run(&cfg, None).await.unwrap();
        assert!(!dir.path().join("absent").exists());
    }
}
