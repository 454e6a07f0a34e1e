use corkboard::actions::{execute_action, Action};
use corkboard::config::{load_config, CliArgs, ConfigError};
use corkboard::logging::{build_filter, init_logging, LoggingError};
use corkboard::viewport::MAX_ZOOM_LIMIT;
use corkboard::{AppConfig, BoardCommand, CardData, CardId, Position};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

mod common;
use common::*;

fn args_for(path: PathBuf) -> CliArgs {
    CliArgs {
        config: Some(path),
        ..CliArgs::default()
    }
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config(&args_for(temp_dir.path().join("nope.toml")));

    assert!(matches!(result, Err(ConfigError::ConfigFile(_))));
}

#[test]
fn test_malformed_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "min_zoom = [oops\n").unwrap();

    assert!(load_config(&args_for(path)).is_err());
}

#[test]
fn test_wrong_value_type_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "show_grid = \"sometimes\"\n").unwrap();

    assert!(load_config(&args_for(path)).is_err());
}

#[test]
fn test_inverted_zoom_bounds_from_cli() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let args = CliArgs {
        min_zoom: Some(2.0),
        max_zoom: Some(1.0),
        ..args_for(path)
    };
    let err = load_config(&args).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_invalid_log_filter() {
    let err = build_filter("corkboard=loud").unwrap_err();
    assert!(matches!(err, LoggingError::Filter { .. }));
}

#[test]
fn test_log_file_in_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no").join("such").join("dir.log");

    let err = init_logging(Some(&path), "info").unwrap_err();
    assert!(matches!(err, LoggingError::OpenFile { .. }));
    assert!(err.to_string().contains("dir.log"));
}

#[test]
fn test_commands_for_unknown_cards_are_ignored() {
    let mut app = create_test_app();
    let ghost = CardId::from("ghost");
    let before = app.board.card(&welcome_id()).unwrap().clone();

    app.dispatch(BoardCommand::UpdateCard {
        id: ghost.clone(),
        data: CardData::new("x", "y"),
    });
    app.dispatch(BoardCommand::MoveCard {
        id: ghost.clone(),
        position: Position::new(1.0, 1.0),
    });
    app.dispatch(BoardCommand::DeleteCard { id: ghost.clone() });

    assert_eq!(app.board.len(), 1);
    assert_eq!(app.board.card(&welcome_id()).unwrap(), &before);
    assert!(app.view(&ghost).is_none());
}

#[test]
fn test_connection_to_missing_card_is_refused() {
    let mut app = create_test_app_with(plain_config());
    assert!(!app.board.add_connection(welcome_id(), CardId::from("ghost")));
    assert!(app.board.connections().is_empty());

    let lines = render_to_lines(&mut app, 60, 24);
    assert!(lines.iter().all(|line| !line.contains('▼') && !line.contains('▲')));
}

#[test]
fn test_actions_without_selection_do_not_fail() {
    let mut app = create_test_app();
    for action in [
        Action::EditSelected,
        Action::NudgeSelected { dx: 1, dy: 1 },
        Action::StartConnect,
        Action::ConfirmEdit,
        Action::CancelEdit,
        Action::TypeChar('x'),
        Action::ConfirmConnect,
    ] {
        execute_action(action, &mut app).unwrap();
    }
    assert_eq!(app.board.len(), 1);
    assert_eq!(app.board.card(&welcome_id()).unwrap().data.title, "Welcome");
}

#[test]
fn test_maximum_zoom_over_a_card() {
    let mut app = create_test_app_with(AppConfig {
        max_zoom: MAX_ZOOM_LIMIT,
        ..plain_config()
    });
    app.config.validate().unwrap();

    // Zoom in on the middle of the welcome card until the ceiling stops it
    for _ in 0..120 {
        execute_action(
            Action::ScrollZoom {
                column: 37,
                row: 16,
                zoom_in: true,
            },
            &mut app,
        )
        .unwrap();
    }
    assert_eq!(app.viewport.zoom(), MAX_ZOOM_LIMIT);
    assert_eq!(app.card_at(37, 16).map(|card| card.id.clone()), Some(welcome_id()));
    assert_eq!(app.card_at(40, 12).map(|card| card.id.clone()), Some(welcome_id()));

    let lines = render_to_lines(&mut app, 100, 32);
    assert_eq!(lines.len(), 32);
}

#[test]
fn test_spawn_area_must_be_finite() {
    let config = AppConfig {
        spawn_width: f64::INFINITY,
        ..AppConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}
