//! Library integration tests.

use outfit::OutfitError;

#[test]
fn error_types_are_public() {
    let err = OutfitError::UnsupportedPlatform { os: "plan9".into() };
    assert!(err.to_string().contains("plan9"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> outfit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use outfit::cli::{Cli, Commands};

    let cli = Cli::parse_from(["outfit", "plan", "--json"]);
    if let Some(Commands::Plan(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Plan command");
    }
}

#[test]
fn builtin_catalog_covers_expected_tools() {
    use outfit::catalog::Catalog;
    use outfit::config::OutfitConfig;

    let catalog = Catalog::builtin().unwrap();
    for tool in OutfitConfig::default().expected_tools {
        assert!(catalog.contains_tool(&tool), "{tool} is not in any catalog");
    }
}

#[test]
fn ubuntu_release_file_detects_debian() {
    use outfit::detection::{Distro, EnvironmentDetector, OsFamily, StaticProbe};

    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("os-release");
    std::fs::write(&path, "PRETTY_NAME=\"Ubuntu 22.04 LTS\"\n").unwrap();

    let probe = StaticProbe::new(["pacman"]);
    let env = EnvironmentDetector::new(&probe)
        .with_os_family(OsFamily::Linux)
        .with_os_release(&path)
        .detect();

    assert_eq!(env.os_family, OsFamily::Linux);
    assert_eq!(env.distro, Distro::Debian);
}
