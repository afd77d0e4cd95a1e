use super::*;
use cleaner_core::gate::SESSION_EXPIRED_MESSAGE;

fn test_app() -> TuiApp {
    let client = ApiClient::new("http://127.0.0.1:9/api", Session::new()).unwrap();
    TuiApp::new(AppConfig::default(), client, LogBuffer::new(50)).unwrap()
}

fn repo(id: u64, archived: bool) -> Repository {
    Repository {
        id,
        name: format!("repo-{id}"),
        full_name: format!("octo/repo-{id}"),
        description: None,
        archived,
        updated_at: "2024-03-01T12:00:00Z".to_string(),
        stars: id,
        language: Some("Rust".to_string()),
    }
}

fn page_of(rows: Vec<Repository>) -> RepositoryPage {
    let total_count = rows.len() as u64;
    RepositoryPage {
        repositories: rows,
        total_count,
        current_page: 1,
        total_pages: 1,
    }
}

/// Logged in with the first fetch answered.
fn signed_in_app(rows: Vec<Repository>) -> TuiApp {
    let mut app = test_app();
    app.login("ghp_abc");
    let epoch = app.session().epoch();
    app.apply_job_event(JobEvent::Listed {
        epoch,
        seq: 1,
        result: Ok(page_of(rows)),
    });
    app
}

fn press(app: &mut TuiApp, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::empty()))
        .unwrap()
}

fn type_text(app: &mut TuiApp, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[test]
fn gate_masks_input_and_submits() {
    let mut app = test_app();
    assert_eq!(app.view, View::Gate);
    assert!(!press(&mut app, KeyCode::Enter));
    assert_eq!(app.gate.status(), GateStatus::Idle);

    type_text(&mut app, "ghp_abcd");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.gate.masked(), "*******");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.gate.status(), GateStatus::Submitting);
}

#[test]
fn quit_keys() {
    let mut app = test_app();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.handle_key(ctrl_c).unwrap());
    assert!(press(&mut app, KeyCode::Esc));

    let mut app = signed_in_app(vec![repo(1, false)]);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn accepted_token_opens_browser() {
    let mut app = test_app();
    type_text(&mut app, "ghp_abc");
    assert_eq!(app.gate.submit().as_deref(), Some("ghp_abc"));
    let epoch = app.session().epoch();
    app.apply_job_event(JobEvent::Validated {
        epoch,
        result: Ok(TokenValidation {
            valid: true,
            username: Some("octocat".to_string()),
        }),
    });
    assert_eq!(app.view, View::Browser);
    assert!(app.shell.is_authenticated());
    assert_eq!(app.session().bearer().as_deref(), Some("ghp_abc"));
    assert!(app.browser.is_loading());
    assert_eq!(app.browser.placeholder_rows(), 10);
}

#[test]
fn rejected_token_stays_on_gate() {
    let mut app = test_app();
    type_text(&mut app, "bad");
    app.gate.submit();
    let epoch = app.session().epoch();
    app.apply_job_event(JobEvent::Validated {
        epoch,
        result: Ok(TokenValidation::invalid()),
    });
    assert_eq!(app.view, View::Gate);
    assert_eq!(app.gate.status(), GateStatus::Idle);
    assert!(app.gate.message().is_some());
}

#[test]
fn connectivity_failure_is_shown_verbatim_as_warning() {
    let message = "Unable to connect to server. Please check if the server is running.";
    let mut app = test_app();
    type_text(&mut app, "ghp_abc");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.gate.status(), GateStatus::Submitting);

    let epoch = app.session().epoch();
    app.apply_job_event(JobEvent::Validated {
        epoch,
        result: Err(message.to_string()),
    });
    assert_eq!(app.view, View::Gate);
    assert_eq!(app.gate.status(), GateStatus::Idle);
    assert!(!app.shell.is_authenticated());
    let shown = app.gate.message().unwrap();
    assert_eq!(shown.text, message);
    assert_eq!(shown.severity, Severity::Warning);
}

#[test]
fn results_from_ended_session_are_dropped() {
    let mut app = test_app();
    app.login("ghp_abc");
    let stale_epoch = app.session().epoch();
    app.logout(false);
    app.login("ghp_def");
    app.apply_job_event(JobEvent::Listed {
        epoch: stale_epoch,
        seq: 1,
        result: Ok(page_of(vec![repo(1, false)])),
    });
    assert!(app.browser.rows().is_empty());
    assert!(app.browser.is_loading());
}

#[test]
fn space_toggles_row_under_cursor() {
    let mut app = signed_in_app(vec![repo(1, false), repo(2, true), repo(3, false)]);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.browser.selection().contains(1));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.browser.selection().contains(2));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.cursor, 2);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.browser.selection().ids(), vec![1, 3]);
    assert_eq!(app.browser.select_all_state(), SelectAllState::Checked);
}

#[test]
fn select_all_key_toggles() {
    let mut app = signed_in_app(vec![repo(1, false), repo(2, false), repo(3, true)]);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.browser.selection().ids(), vec![1, 2]);
    press(&mut app, KeyCode::Char('a'));
    assert!(app.browser.selection().is_empty());
}

#[test]
fn archive_requires_confirmation() {
    let mut app = signed_in_app(vec![repo(7, false), repo(9, false)]);
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.view, View::Browser);

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.view, View::ArchiveConfirm);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.view, View::Browser);
    assert!(!app.browser.is_archiving());

    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.view, View::Browser);
    assert!(app.browser.is_archiving());

    let epoch = app.session().epoch();
    app.apply_job_event(JobEvent::Archived {
        epoch,
        result: Ok(ArchiveOutcome {
            success: true,
            archived_count: 2,
            failed_repositories: Vec::new(),
        }),
    });
    assert!(app.browser.selection().is_empty());
    assert!(app.browser.is_loading());
}

#[test]
fn unauthorized_listing_expires_session() {
    let mut app = test_app();
    app.login("ghp_abc");
    let epoch = app.session().epoch();
    app.apply_job_event(JobEvent::Listed {
        epoch,
        seq: 1,
        result: Err(RequestFailure::Unauthorized),
    });
    assert_eq!(app.view, View::Gate);
    assert!(!app.shell.is_authenticated());
    assert_eq!(app.session().bearer(), None);
    assert_eq!(
        app.gate.message().map(|message| message.text.as_str()),
        Some(SESSION_EXPIRED_MESSAGE)
    );
}

#[test]
fn logout_key_returns_to_clean_gate() {
    let mut app = signed_in_app(vec![repo(1, false)]);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.view, View::Gate);
    assert!(app.gate.message().is_none());
    assert!(app.browser.selection().is_empty());
    assert_eq!(app.session().bearer(), None);
}

#[test]
fn search_mode_captures_keys() {
    let mut app = signed_in_app(vec![repo(1, false)]);
    press(&mut app, KeyCode::Char('/'));
    assert!(app.search_active);
    type_text(&mut app, "demo q");
    assert_eq!(app.browser.search_text(), "demo q");
    assert_eq!(app.view, View::Browser);

    press(&mut app, KeyCode::Enter);
    assert!(!app.search_active);
    assert_eq!(app.browser.committed_search(), "demo q");
    assert!(app.browser.is_loading());
}

#[test]
fn page_size_key_cycles_options() {
    let mut app = signed_in_app(vec![repo(1, false)]);
    assert_eq!(app.browser.rows_per_page(), 100);
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.browser.rows_per_page(), 10);
    assert!(app.browser.is_loading());
}

#[test]
fn next_page_size_wraps() {
    assert_eq!(next_page_size(10), 25);
    assert_eq!(next_page_size(100), 10);
    assert_eq!(next_page_size(7), 10);
}

#[test]
fn truncate_counts_chars() {
    assert_eq!(truncate_with_ellipsis("short", 10), "short");
    assert_eq!(truncate_with_ellipsis("dépôt-name", 5), "dépô…");
    assert_eq!(truncate_with_ellipsis("abc", 0), "");
}

#[test]
fn row_markers() {
    assert_eq!(select_all_marker(SelectAllState::Indeterminate), "[-]");
    assert_eq!(row_marker(&repo(1, true), false), " - ");
    assert_eq!(row_marker(&repo(1, false), true), "[x]");
    let row = format_repo_row(&repo(4, false), false, 20);
    assert!(row.starts_with("[ ] octo/repo-4"));
    assert!(row.ends_with("2024-03-01"));
}

#[test]
fn description_line_is_indented_and_truncated() {
    let mut described = repo(5, false);
    described.description = Some("Scripts for the nightly data export".to_string());
    assert_eq!(
        description_line(&described, 20).as_deref(),
        Some("    Scripts for the…")
    );
    described.description = Some("   ".to_string());
    assert_eq!(description_line(&described, 20), None);
    assert_eq!(description_line(&repo(6, false), 20), None);
}

#[test]
fn adjust_scroll_keeps_cursor_visible() {
    assert_eq!(adjust_scroll(0, 5, 3, 10), 0);
    assert_eq!(adjust_scroll(6, 0, 3, 10), 4);
    assert_eq!(adjust_scroll(2, 1, 3, 10), 1);
}

#[test]
fn centered_rect_is_clipped() {
    let area = Rect::new(0, 0, 40, 10);
    let popup = centered_rect(60, 6, area);
    assert_eq!(popup, Rect::new(0, 2, 40, 6));
}
