//! Tests for the gen-table subcommand.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_gen_table_defaults() {
    match parse(&["ecomap", "gen-table"]) {
        CliCommand::GenTable {
            data_dir,
            out,
            json_out,
            schema,
            include_team,
        } => {
            assert_eq!(data_dir, Path::new("data"));
            assert!(out.is_none());
            assert!(json_out.is_none());
            assert!(schema.is_none());
            assert!(!include_team);
        }
        _ => panic!("expected GenTable"),
    }
}

#[test]
fn cli_parse_gen_table_outputs() {
    match parse(&[
        "ecomap",
        "gen-table",
        "--out",
        "table.html",
        "--json-out",
        "records.json",
        "--schema",
        "schema.json",
    ]) {
        CliCommand::GenTable {
            out,
            json_out,
            schema,
            ..
        } => {
            assert_eq!(out.as_deref(), Some(Path::new("table.html")));
            assert_eq!(json_out.as_deref(), Some(Path::new("records.json")));
            assert_eq!(schema.as_deref(), Some(Path::new("schema.json")));
        }
        _ => panic!("expected GenTable with outputs"),
    }
}
