use clap::Parser;

use atelier_cli::cli::{Cli, Command};
use atelier_core::models::WorkType;
use atelier_core::reconcile::ImportStrategy;
use atelier_core::view::{SortOrder, TypeFilter};

#[test]
fn list_flags_build_a_query() {
    let cli = Cli::try_parse_from([
        "atelier", "list", "--type", "Music", "--search", "demo", "--sort", "title-asc",
    ])
    .unwrap();
    let Command::List(args) = cli.command else {
        panic!("expected list");
    };
    let query = args.query();
    assert_eq!(query.filter, TypeFilter::Only(WorkType::Music));
    assert_eq!(query.search, "demo");
    assert_eq!(query.sort, SortOrder::TitleAsc);
}

#[test]
fn unknown_type_is_rejected() {
    assert!(Cli::try_parse_from(["atelier", "list", "--type", "music"]).is_err());
}

#[test]
fn import_needs_exactly_one_strategy() {
    assert!(Cli::try_parse_from(["atelier", "import", "b.json"]).is_err());
    assert!(Cli::try_parse_from(["atelier", "import", "b.json", "--merge", "--replace"]).is_err());

    let cli = Cli::try_parse_from(["atelier", "import", "b.json", "--replace"]).unwrap();
    let Command::Import(args) = cli.command else {
        panic!("expected import");
    };
    assert_eq!(args.strategy(), ImportStrategy::Replace);
}

#[test]
fn edit_with_empty_description_clears_it() {
    let cli = Cli::try_parse_from(["atelier", "edit", "abc", "--description", ""]).unwrap();
    let Command::Edit(args) = cli.command else {
        panic!("expected edit");
    };
    assert_eq!(args.patch().description, Some(Some(String::new())));
}
