//! Behaviour-driven step definitions driving the show CLI scenarios.

use super::helpers::{CatalogueFiles, sample_destinations};
use super::*;
use crate::catalogue::FileCatalogueLoader;
use crate::show::run_show_with;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tourguide_core::{Destination, DestinationId};

struct ShowWorld {
    files: CatalogueFiles,
    catalogue_path: RefCell<Option<Utf8PathBuf>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ShowWorld {
    fn new() -> Self {
        Self {
            files: CatalogueFiles::new(),
            catalogue_path: RefCell::new(None),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, id: Option<&str>) {
        let catalogue = self
            .catalogue_path
            .borrow()
            .clone()
            .expect("catalogue written");
        let mut argv = vec![
            "tourguide".to_owned(),
            "show".to_owned(),
            format!("--{ARG_CATALOGUE}"),
            catalogue.into_string(),
        ];
        if let Some(id) = id {
            argv.extend([format!("--{ARG_ID}"), id.to_owned()]);
        }

        let outcome = Cli::try_parse_from(argv)
            .map_err(CliError::from)
            .and_then(|cli| match cli.command {
                Command::Show(args) => {
                    let mut buffer = self.stdout.borrow_mut();
                    run_show_with(args, &FileCatalogueLoader, &mut *buffer)
                }
                other => panic!("expected show command, found {other:?}"),
            });
        self.result.replace(Some(outcome));
    }

    fn expect_error(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }
}

#[fixture]
fn world() -> ShowWorld {
    ShowWorld::new()
}

#[given("a catalogue file with the Yasawi mausoleum and its neighbours")]
fn catalogue_file_written(#[from(world)] world: &ShowWorld) {
    let path = world
        .files
        .write_catalogue("show.json", &sample_destinations());
    world.catalogue_path.replace(Some(path));
}

#[when("I ask to show destination 1")]
fn show_first_destination(#[from(world)] world: &ShowWorld) {
    world.run(Some("1"));
}

#[when("I ask to show destination 42")]
fn show_unknown_destination(#[from(world)] world: &ShowWorld) {
    world.run(Some("42"));
}

#[when("I ask to show a destination without an identifier")]
fn show_without_identifier(#[from(world)] world: &ShowWorld) {
    world.run(None);
}

#[then("the printed record includes the audio guide")]
fn record_includes_audio_guide(#[from(world)] world: &ShowWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    assert!(result.is_ok(), "expected success, found {result:?}");

    let shown: Destination =
        serde_json::from_slice(&world.stdout.borrow()).expect("output should be JSON");
    assert_eq!(shown.id, DestinationId::Numeric(1));
    assert_eq!(
        shown.audio_file.as_deref(),
        Some("https://cdn.example.com/audio/yasawi.mp3")
    );
}

#[then("the command fails because destination 42 is unknown")]
fn fails_unknown_destination(#[from(world)] world: &ShowWorld) {
    world.expect_error(|error| match error {
        CliError::UnknownDestination { id, .. } => assert_eq!(*id, DestinationId::Numeric(42)),
        other => panic!("expected UnknownDestination, found {other:?}"),
    });
}

#[then("the command fails because the identifier is missing")]
fn fails_missing_identifier(#[from(world)] world: &ShowWorld) {
    world.expect_error(|error| match error {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_ID);
            assert_eq!(*env, ENV_SHOW_ID);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

macro_rules! register_show_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/show_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ShowWorld) {
            let _ = world;
        }
    };
}

register_show_scenario!(show_with_audio_guide, "printing a destination with its audio guide");
register_show_scenario!(show_unknown_id, "rejecting an unknown destination");
register_show_scenario!(show_missing_id, "rejecting a request without an identifier");
