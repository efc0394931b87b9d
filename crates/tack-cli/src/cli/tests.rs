#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_asset;
    use crate::cli::{Cli, Command, Section};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_asset_valid() {
        let spec = parse_asset("main.js=build/main.js").unwrap();
        assert_eq!(spec.name, "main");
        assert_eq!(spec.ext, "js");
        assert_eq!(spec.file, PathBuf::from("build/main.js"));
        assert_eq!(spec.logical(), "main.js");
    }

    #[test]
    fn test_parse_asset_splits_on_last_dot() {
        let spec = parse_asset("vendor.min.js=out.js").unwrap();
        assert_eq!(spec.name, "vendor.min");
        assert_eq!(spec.ext, "js");
    }

    #[test]
    fn test_parse_asset_invalid() {
        assert!(parse_asset("main.js").is_err());
        assert!(parse_asset("main.js=").is_err());
        assert!(parse_asset("main=build/main.js").is_err());
        assert!(parse_asset(".js=build/main.js").is_err());
        assert!(parse_asset("main.=build/main.js").is_err());
        assert!(parse_asset("js/main.js=build/main.js").is_err());
    }

    #[test]
    fn test_describe_defaults() {
        let cli = Cli::try_parse_from(["tack", "describe"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        match cli.command {
            Command::Describe(args) => {
                assert_eq!(args.invocation.mode, None);
                assert_eq!(args.invocation.watch_flag(), None);
                assert_eq!(args.section, None);
                assert!(!args.compact);
            }
            _ => panic!("Expected Describe command"),
        }
    }

    #[test]
    fn test_describe_with_flags() {
        let cli = Cli::try_parse_from([
            "tack",
            "describe",
            "--mode",
            "development",
            "--watch",
            "--section",
            "plugins",
        ])
        .unwrap();
        match cli.command {
            Command::Describe(args) => {
                assert_eq!(args.invocation.mode.as_deref(), Some("development"));
                assert_eq!(args.invocation.watch_flag(), Some(true));
                assert_eq!(args.section, Some(Section::Plugins));
            }
            _ => panic!("Expected Describe command"),
        }
    }

    #[test]
    fn test_unknown_mode_is_accepted() {
        // Unknown modes fall back to production later, not at parse time
        let cli = Cli::try_parse_from(["tack", "check", "-m", "staging"]).unwrap();
        match cli.command {
            Command::Check(args) => assert_eq!(args.invocation.mode.as_deref(), Some("staging")),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_last_watch_flag_wins() {
        let cli = Cli::try_parse_from(["tack", "describe", "--watch", "--no-watch"]).unwrap();
        match cli.command {
            Command::Describe(args) => assert_eq!(args.invocation.watch_flag(), Some(false)),
            _ => panic!("Expected Describe command"),
        }
    }

    #[test]
    fn test_explain_requires_paths() {
        assert!(Cli::try_parse_from(["tack", "explain"]).is_err());
        let cli = Cli::try_parse_from(["tack", "explain", "a.js", "b.css"]).unwrap();
        match cli.command {
            Command::Explain(args) => assert_eq!(args.paths.len(), 2),
            _ => panic!("Expected Explain command"),
        }
    }

    #[test]
    fn test_hash_requires_name() {
        assert!(Cli::try_parse_from(["tack", "hash", "a.js"]).is_err());
        let cli = Cli::try_parse_from(["tack", "hash", "a.js", "--name", "main"]).unwrap();
        match cli.command {
            Command::Hash(args) => {
                assert_eq!(args.name, "main");
                assert_eq!(args.template, None);
            }
            _ => panic!("Expected Hash command"),
        }
    }

    #[test]
    fn test_manifest_rejects_malformed_pairs() {
        assert!(Cli::try_parse_from(["tack", "manifest", "main.js"]).is_err());
        assert!(Cli::try_parse_from(["tack", "manifest", "main.js=a.js", "--clean", "--merge"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tack", "clean", "--verbose", "--root", "site"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.root, PathBuf::from("site"));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["tack", "describe", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_section_keys() {
        assert_eq!(Section::Module.key(), "module");
        assert_eq!(Section::Entry.key(), "entry");
    }
}
