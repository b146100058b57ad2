use super::*;

fn event(id: &str, event_type: Option<&str>, hacknight: Option<&str>, hours: Option<f64>) -> Event {
    Event {
        id: id.to_owned(),
        name: Some(format!("Event {id}")),
        date: Some("2021-03-02T02:00:00Z".to_owned()),
        hours,
        event_type: event_type.map(str::to_owned),
        hacknight: hacknight.map(str::to_owned),
        check_in_ready: false,
    }
}

fn check_in(event_id: &str, user_id: &str) -> CheckIn {
    CheckIn { event_id: event_id.to_owned(), user_id: user_id.to_owned(), created_date: None }
}

fn stats() -> DashboardStats {
    DashboardStats::new(
        vec![event("e1", Some("workshop"), None, Some(2.0)), event("e2", None, Some("online"), None)],
        vec![check_in("e1", "u1"), check_in("e1", "u2"), check_in("e2", "u1"), check_in("gone", "u3")],
    )
}

#[test]
fn kind_arg_maps_to_chart_kind() {
    assert_eq!(ChartKind::from(KindArg::All), ChartKind::AllEvents);
    assert_eq!(ChartKind::from(KindArg::Hacknight), ChartKind::HacknightOnly);
}

#[test]
fn render_stats_lists_every_donut() {
    let out = render_stats(&stats(), ChartKind::AllEvents, &LocationFilter::All);
    assert!(out.starts_with("All Events / location: All\n"));
    assert!(out.contains("check-ins: 4\n"));
    assert!(out.contains("unmatched check-ins: 1\n"));
    assert!(out.contains("volunteers checked in: 2\n"));
    assert!(out.contains("Total Volunteers:\n"));
    assert!(out.contains("Avg. Hours Per Volunteer:\n"));
}

#[test]
fn render_stats_marks_empty_location() {
    let filter = LocationFilter::from_value("Westside");
    let out = render_stats(&stats(), ChartKind::HacknightOnly, &filter);
    assert!(out.contains("location: Westside"));
    assert!(out.contains("volunteers checked in: 0\n"));
    assert!(out.contains("(no data)"));
}

#[test]
fn render_stats_accepts_lower_case_location() {
    let out = render_stats(&stats(), ChartKind::HacknightOnly, &LocationFilter::from_value("online"));
    assert!(out.contains("location: Online"));
    assert!(out.contains("volunteers checked in: 1\n"));
    assert!(!out.contains("(no data)"));
}

#[test]
fn render_event_shows_schedule_and_status() {
    let out = render_event(&event("e9", None, Some("westside"), None));
    assert!(out.starts_with("Event e9\n"));
    assert!(out.contains("when: 2021-03-02 02:00 UTC\n"));
    assert!(out.contains("type: Hacknight\n"));
    assert!(out.contains("location: Westside\n"));
    assert!(out.ends_with("check-in: closed\n"));
}

#[test]
fn describe_access_covers_each_decision() {
    assert_eq!(describe_access(&AccessDecision::Admin { email: "a@b.co".to_owned() }), "admin: a@b.co");
    assert_eq!(describe_access(&AccessDecision::UnknownEmail), "Please enter the correct email address.");
    assert_eq!(
        describe_access(&AccessDecision::InsufficientAccess),
        "You don't have the correct access level to view the dashboard."
    );
}

#[test]
fn trim_number_drops_zero_fraction() {
    assert_eq!(trim_number(3.0), "3");
    assert_eq!(trim_number(2.5), "2.50");
}

#[test]
fn cli_parses_stats_flags() {
    let cli = Cli::try_parse_from(["checkin-cli", "stats", "--kind", "hacknight", "--location", "Online"]).unwrap();
    match cli.command {
        Command::Stats { kind, location } => {
            assert_eq!(kind, KindArg::Hacknight);
            assert_eq!(location, "Online");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
