use std::fmt::Write as _;

use checkins::endpoints::{self, CUSTOM_REQUEST_HEADER};
use checkins::{
    AccessDecision, ChartKind, ChartSlice, CheckIn, CheckUserResponse, DashboardStats, Event, LocationFilter,
    UserRecord, display_date, next_event, validate_admin_email,
};
use clap::{Parser, Subcommand, ValueEnum};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned HTTP {status} for {path}: {body}")]
    Status { status: u16, path: String, body: String },
    #[error(transparent)]
    Email(#[from] checkins::EmailError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("no upcoming event")]
    NoUpcomingEvent,
}

#[derive(Parser, Debug)]
#[command(name = "checkin-cli", about = "Volunteer check-in admin CLI")]
struct Cli {
    #[arg(long, env = "CHECKIN_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "CUSTOM_REQUEST_HEADER")]
    custom_header: Option<String>,

    /// Print raw JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    custom_header: Option<String>,
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the host's health endpoint.
    Ping,
    /// Per-category volunteer counts, hours and averages.
    Stats {
        #[arg(long, value_enum, default_value_t = KindArg::All)]
        kind: KindArg,
        #[arg(long, default_value = checkins::aggregate::ALL_LOCATIONS)]
        location: String,
    },
    /// The upcoming event and its check-in status.
    NextEvent,
    /// Number of registered volunteers.
    Users,
    /// Run the admin access check for an email.
    CheckUser { email: String },
    /// Toggle check-in readiness for the upcoming event, or a given event id.
    CheckInReady {
        #[arg(long)]
        event_id: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    All,
    Hacknight,
}

impl From<KindArg> for ChartKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::All => ChartKind::AllEvents,
            KindArg::Hacknight => ChartKind::HacknightOnly,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, custom_header: cli.custom_header, json: cli.json };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Stats { kind, location } => run_stats(&ctx, kind.into(), &LocationFilter::from_value(&location)).await,
        Command::NextEvent => run_next_event(&ctx).await,
        Command::Users => run_users(&ctx).await,
        Command::CheckUser { email } => run_check_user(&ctx, &email).await,
        Command::CheckInReady { event_id } => run_check_in_ready(&ctx, event_id).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = endpoints::join_url(&cli.base_url, "/healthz");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Status { status: status.as_u16(), path: "/healthz".to_owned(), body: String::new() });
    }
    println!("ok");
    Ok(())
}

async fn run_stats(cli: &CliContext, kind: ChartKind, filter: &LocationFilter) -> Result<(), CliError> {
    let check_ins: Vec<CheckIn> = api_get(cli, endpoints::CHECK_INS).await?;
    let events: Vec<Event> = api_get(cli, endpoints::EVENTS).await?;
    let stats = DashboardStats::new(events, check_ins);

    if cli.json {
        return print_json(&serde_json::to_value(stats.charts(kind, filter))?);
    }
    print!("{}", render_stats(&stats, kind, filter));
    Ok(())
}

async fn run_next_event(cli: &CliContext) -> Result<(), CliError> {
    let events: Vec<Event> = api_get(cli, endpoints::EVENTS).await?;
    let event = next_event(&events).ok_or(CliError::NoUpcomingEvent)?;
    if cli.json {
        return print_json(&serde_json::to_value(event)?);
    }
    print!("{}", render_event(event));
    Ok(())
}

async fn run_users(cli: &CliContext) -> Result<(), CliError> {
    let users: Vec<UserRecord> = api_get(cli, endpoints::USERS).await?;
    if cli.json {
        return print_json(&serde_json::to_value(&users)?);
    }
    println!("{} registered volunteers", users.len());
    Ok(())
}

async fn run_check_user(cli: &CliContext, email: &str) -> Result<(), CliError> {
    let email = validate_admin_email(email)?;
    let body = serde_json::json!({ "email": email });
    let response: CheckUserResponse = api_send(cli, reqwest::Method::POST, endpoints::CHECK_USER, Some(body)).await?;
    let decision = AccessDecision::from_response(response, &email);
    println!("{}", describe_access(&decision));
    Ok(())
}

async fn run_check_in_ready(cli: &CliContext, event_id: Option<String>) -> Result<(), CliError> {
    let event_id = match event_id {
        Some(id) => id,
        None => {
            let events: Vec<Event> = api_get(cli, endpoints::EVENTS).await?;
            next_event(&events).ok_or(CliError::NoUpcomingEvent)?.id.clone()
        }
    };
    let path = endpoints::event_path(&event_id);
    let value: Value = api_send(cli, reqwest::Method::PATCH, &path, None).await?;
    if cli.json {
        return print_json(&value);
    }
    println!("toggled check-in for {event_id}");
    Ok(())
}

fn http_client(cli: &CliContext) -> Result<reqwest::Client, CliError> {
    let mut headers = HeaderMap::new();
    if let Some(value) = &cli.custom_header {
        headers.insert(CUSTOM_REQUEST_HEADER, HeaderValue::from_str(value)?);
    }
    Ok(reqwest::Client::builder().default_headers(headers).build()?)
}

async fn api_get<T: DeserializeOwned>(cli: &CliContext, path: &str) -> Result<T, CliError> {
    api_send(cli, reqwest::Method::GET, path, None).await
}

async fn api_send<T: DeserializeOwned>(
    cli: &CliContext,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<T, CliError> {
    let client = http_client(cli)?;
    let url = endpoints::join_url(&cli.base_url, path);

    let request = client.request(method, &url);
    let request = if let Some(json) = body { request.json(&json) } else { request };

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(CliError::Status { status: status.as_u16(), path: path.to_owned(), body: text });
    }
    // PATCH may answer with an empty body.
    if text.trim().is_empty() {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_str(&text)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn render_slices(out: &mut String, title: &str, slices: &[ChartSlice]) {
    let _ = writeln!(out, "{title}:");
    if slices.is_empty() {
        let _ = writeln!(out, "  (no data)");
    }
    for slice in slices {
        let _ = writeln!(out, "  {:<24} {}", slice.label, trim_number(slice.value));
    }
}

fn render_stats(stats: &DashboardStats, kind: ChartKind, filter: &LocationFilter) -> String {
    let charts = stats.charts(kind, filter);
    let roster = stats.roster();
    let mut out = String::new();
    let _ = writeln!(out, "{} / location: {}", kind.label(), filter.value());
    let _ = writeln!(out, "check-ins: {}", stats.total_check_ins());
    let unmatched = stats.unmatched_check_ins();
    if unmatched > 0 {
        let _ = writeln!(out, "unmatched check-ins: {unmatched}");
    }
    let _ = writeln!(out, "volunteers checked in: {}", roster.volunteer_count(filter));
    render_slices(&mut out, "Total Volunteers", &charts.volunteers);
    render_slices(&mut out, "Total Volunteer Hours", &charts.hours);
    render_slices(&mut out, "Avg. Hours Per Volunteer", &charts.average_hours);
    out
}

fn render_event(event: &Event) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", event.name.as_deref().unwrap_or(event.kind()));
    let _ = writeln!(out, "id: {}", event.id);
    let _ = writeln!(out, "when: {}", display_date(event));
    let _ = writeln!(out, "type: {}", checkins::title_case(event.kind()));
    if let Some(location) = event.location() {
        let _ = writeln!(out, "location: {}", checkins::title_case(location));
    }
    let _ = writeln!(out, "check-in: {}", if event.check_in_ready { "open" } else { "closed" });
    out
}

fn describe_access(decision: &AccessDecision) -> String {
    match decision {
        AccessDecision::Admin { email } => format!("admin: {email}"),
        other => other.message().unwrap_or_default().to_owned(),
    }
}

/// Integers print without a fractional part.
fn trim_number(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON { format!("{value:.0}") } else { format!("{value:.2}") }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
