use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn migrate_defaults_match_the_auth_convention() {
    let cli = Cli::try_parse_from(["plume", "migrate"]).unwrap();

    assert_eq!(cli.global.migrations_dir, "migrations");
    assert!(!cli.global.verbose);
    match cli.command {
        Commands::Migrate(args) => {
            assert_eq!(args.legacy_table, "users");
            assert_eq!(args.legacy_file, "001_auth_schema.sql");
            assert!(!args.no_legacy_seed);
        }
        Commands::Status(_) => panic!("expected migrate"),
    }
}

#[test]
fn legacy_seed_flags_are_overridable() {
    let cli = Cli::try_parse_from([
        "plume",
        "migrate",
        "--legacy-table",
        "accounts",
        "--legacy-file",
        "0001_accounts.sql",
    ])
    .unwrap();

    match cli.command {
        Commands::Migrate(args) => {
            assert_eq!(args.legacy_table, "accounts");
            assert_eq!(args.legacy_file, "0001_accounts.sql");
        }
        Commands::Status(_) => panic!("expected migrate"),
    }
}

#[test]
fn status_accepts_json_output() {
    let cli = Cli::try_parse_from(["plume", "status", "--output", "json"]).unwrap();

    match cli.command {
        Commands::Status(args) => assert_eq!(args.output, StatusOutput::Json),
        Commands::Migrate(_) => panic!("expected status"),
    }
}

#[test]
fn migrations_dir_is_global() {
    let cli =
        Cli::try_parse_from(["plume", "status", "--migrations-dir", "db/migrations"]).unwrap();

    assert_eq!(cli.global.migrations_dir, "db/migrations");
}
