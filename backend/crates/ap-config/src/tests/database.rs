use crate::DatabaseConfig;

use std::path::Path;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

fn database(path: &str) -> DatabaseConfig {
    DatabaseConfig {
        path: path.to_string(),
    }
}

#[test]
fn given_nested_relative_path_when_validate_then_ok() {
    assert_that!(database("data/admin.db").validate(), ok(anything()));
}

#[test]
fn given_blank_path_when_validate_then_error() {
    assert_that!(database("  ").validate(), err(anything()));
}

#[test]
fn given_absolute_path_when_validate_then_error() {
    assert_that!(database("/var/lib/admin.db").validate(), err(anything()));
}

#[test]
fn given_parent_component_when_validate_then_error() {
    assert_that!(database("data/../../admin.db").validate(), err(anything()));
}

#[test]
fn given_config_dir_when_resolving_then_joined_and_trimmed() {
    let resolved = database(" data.db ").resolve(Path::new("/srv/ap"));

    assert_that!(resolved, eq(&Path::new("/srv/ap/data.db").to_path_buf()));
}
