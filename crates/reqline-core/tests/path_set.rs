#![allow(clippy::unwrap_used)]

use std::rc::Rc;

use reqline_core::commands::{self, Address, Cd, PathSet};
use reqline_core::{
    Attributes, CommandVariant, Console, Error, Namespace, PlainStyle, Session, SessionRef,
};

fn namespace() -> Namespace {
    commands::namespace().unwrap()
}

fn session() -> SessionRef {
    Session::open("http://example.com/api/users").unwrap()
}

mod variant {
    use super::*;

    #[test]
    fn test_is_primary_with_cd_alias() {
        let ns = namespace();
        let path_set = ns.get("PathSet").unwrap();
        assert_eq!(path_set.alias_for(), None);
        assert_eq!(path_set.aliases(), vec![ns.get(Cd.type_name()).unwrap()]);
    }

    #[test]
    fn test_metadata() {
        let ns = namespace();
        let path_set = ns.get("path-set").unwrap();
        assert_eq!(path_set.category(), Some("Navigation"));
        assert_eq!(path_set.command_line().to_string(), "pa[th-set]");
        assert_eq!(path_set.command_line_arguments(), Some("PATH"));
        assert_eq!(path_set.help(&PlainStyle), "Changes the path of the request's address");
        assert_eq!(
            path_set.help_extended(&PlainStyle),
            "Changes the path used for the request. Does not communicate with the host.\n\n\
             The path will be URL-encoded if necessary.\n\n\
             The console prompt shows the address for the current request."
        );
        assert_eq!(
            path_set.see_also_commands(),
            vec![ns.get(Address.type_name()).unwrap()]
        );
    }

    #[test]
    fn test_command_line_tracks_siblings() {
        let alone = Namespace::new("solo", [&PathSet as &dyn CommandVariant]).unwrap();
        assert_eq!(alone.get("PathSet").unwrap().command_line().to_string(), "p[ath-set]");
    }

    #[test]
    fn test_partial_namespace_with_cd() {
        let ns = Namespace::new("commands", [&PathSet as &dyn CommandVariant, &Cd]).unwrap();
        let path_set = ns.get("PathSet").unwrap();
        let cd = ns.get("Cd").unwrap();

        assert_eq!(path_set.aliases(), vec![cd]);
        assert_eq!(cd.alias_for(), Some(path_set));
        assert_eq!(path_set.command_line().to_string(), "p[ath-set]");
        assert_eq!(cd.command_line().to_string(), "c[d]");
        // Address is not loaded, so the declared see-also resolves to nothing
        assert!(path_set.see_also_commands().is_empty());
        assert_eq!(cd.see_also_commands(), vec![path_set]);
    }
}

mod build_for {
    use super::*;

    fn build(line: &str) -> (Option<Vec<String>>, String) {
        let ns = namespace();
        let path_set = ns.get("PathSet").unwrap();
        let session = session();
        let attributes = Attributes::new(Rc::clone(&session));
        let mut console = Console::plain();
        let built = path_set.build_for(line, &attributes, &mut console).unwrap();
        if let Some(command) = &built {
            assert_eq!(command.variant(), path_set);
            assert!(Rc::ptr_eq(command.session(), &session));
        }
        (built.map(|c| c.arguments().to_vec()), console.take_output())
    }

    #[test]
    fn test_unabbreviated_command_line() {
        assert_eq!(build("path-set foo").0, Some(vec!["foo".to_string()]));
    }

    #[test]
    fn test_abbreviated_command_line() {
        assert_eq!(build("path bar").0, Some(vec!["bar".to_string()]));
        assert_eq!(build("pa bar").0, Some(vec!["bar".to_string()]));
    }

    #[test]
    fn test_bad_command() {
        assert_eq!(build("x baz").0, None);
        assert_eq!(build("p baz").0, None);
    }

    #[test]
    fn test_escapes_simple_paths() {
        assert_eq!(build("path b@r").0, Some(vec!["b%40r".to_string()]));
    }

    #[test]
    fn test_keeps_multi_part_paths() {
        assert_eq!(build("path bar/baz").0, Some(vec!["bar/baz".to_string()]));
    }

    #[test]
    fn test_escapes_multi_part_paths_with_special_characters() {
        assert_eq!(build("path b@r/ba{").0, Some(vec!["b%40r/ba%7B".to_string()]));
    }

    #[test]
    fn test_keeps_segments_with_escape_sequences() {
        let (arguments, output) = build("path b@r/b%2Fz");
        assert_eq!(arguments, Some(vec!["b%40r/b%2Fz".to_string()]));
        assert_eq!(
            output,
            "*** Argument 'b%2Fz' was not URL-escaped because it contains escape sequences\n"
        );
    }

    #[test]
    fn test_unterminated_quote() {
        let ns = namespace();
        let attributes = Attributes::new(session());
        let mut console = Console::plain();
        let result = ns
            .get("PathSet")
            .unwrap()
            .build_for("path \"unterminated", &attributes, &mut console);
        assert!(matches!(result, Err(Error::UnclosedQuote { .. })));
        assert!(console.lines().is_empty());
    }
}

mod perform {
    use super::*;

    fn run(line: &str, session: &SessionRef) -> Result<String, Error> {
        let ns = namespace();
        let attributes = Attributes::new(Rc::clone(session));
        let mut console = Console::plain();
        ns.parse_line(line, &attributes, &mut console)?
            .perform(&mut console)?;
        Ok(console.take_output())
    }

    fn last_address(session: &SessionRef) -> String {
        session.borrow().last_request().unwrap().address().to_string()
    }

    #[test]
    fn test_relative_and_absolute_paths() {
        let session = session();
        run("path groups", &session).unwrap();
        assert_eq!(last_address(&session), "http://example.com/api/groups");

        run("path-set /b@r", &session).unwrap();
        assert_eq!(last_address(&session), "http://example.com/b%40r");
        assert_eq!(session.borrow().requests().len(), 3);
    }

    #[test]
    fn test_cd_forwards_to_path_set() {
        let session = session();
        run("cd ../v2", &session).unwrap();
        assert_eq!(last_address(&session), "http://example.com/v2");
    }

    #[test]
    fn test_same_path_records_nothing() {
        let session = session();
        run("cd /api/users", &session).unwrap();
        assert_eq!(session.borrow().requests().len(), 1);
    }

    #[test]
    fn test_missing_argument() {
        let session = session();
        let result = run("path-set", &session);
        assert!(matches!(
            result,
            Err(Error::MissingArgument { command, argument }) if command == "path-set" && argument == "PATH"
        ));
        let result = run("cd", &session);
        assert!(matches!(result, Err(Error::MissingArgument { command, .. }) if command == "path-set"));
    }
}
