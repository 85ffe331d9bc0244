use clue_sat::{config::Config, reasoner::Reasoner, reports::Answer, types::err};

fn ready_reasoner() -> Reasoner {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut reasoner = Reasoner::from_config(Config::default()).unwrap();
    assert!(reasoner.initialize().is_ok());
    reasoner
}

mod scenarios {
    use super::*;

    #[test]
    fn own_hand() {
        let mut reasoner = ready_reasoner();
        assert!(reasoner.record_hand("sc", &["wh", "li", "st"]).is_ok());

        assert_eq!(reasoner.query("sc", "wh"), Ok(Answer::True));
        assert_eq!(reasoner.query("sc", "ro"), Ok(Answer::Unknown));
        assert_eq!(reasoner.query("cf", "li"), Ok(Answer::False));
    }

    #[test]
    fn refuter_shows_a_card() {
        let mut reasoner = ready_reasoner();
        assert!(reasoner.record_hand("sc", &["wh", "li", "st"]).is_ok());
        assert!(reasoner
            .record_suggestion("sc", ["sc", "ro", "lo"], Some("mu"), Some("sc"))
            .is_ok());

        assert_eq!(reasoner.query("mu", "sc"), Ok(Answer::True));
        assert_eq!(reasoner.query("cf", "sc"), Ok(Answer::False));
        assert_eq!(reasoner.query("mu", "ro"), Ok(Answer::Unknown));
    }

    #[test]
    fn player_holding_their_own_suspect() {
        let mut reasoner = ready_reasoner();
        assert!(reasoner
            .record_suggestion("pl", ["sc", "ca", "ki"], Some("sc"), Some("sc"))
            .is_ok());

        // Only a player who holds a card may show it.
        assert_eq!(reasoner.query("sc", "sc"), Ok(Answer::True));
        assert_eq!(reasoner.query("sc", "ca"), Ok(Answer::Unknown));
    }

    #[test]
    fn unseen_refutation() {
        let mut reasoner = ready_reasoner();
        assert!(reasoner
            .record_suggestion("wh", ["pl", "kn", "ba"], Some("pe"), None)
            .is_ok());
        assert!(reasoner.record_hand("pe", &["pl"]).is_ok());

        assert_eq!(reasoner.query("gr", "kn"), Ok(Answer::False));
        assert_eq!(reasoner.query("pe", "kn"), Ok(Answer::Unknown));
        assert_eq!(reasoner.query("pe", "pl"), Ok(Answer::True));
    }

    #[test]
    fn unseen_refutation_forced() {
        let mut reasoner = ready_reasoner();
        assert!(reasoner
            .record_suggestion("wh", ["pl", "kn", "ba"], Some("pe"), None)
            .is_ok());
        assert!(reasoner.record_hand("sc", &["pl", "ba"]).is_ok());

        assert_eq!(reasoner.query("pe", "kn"), Ok(Answer::True));
        assert_eq!(reasoner.query("cf", "kn"), Ok(Answer::False));
    }

    #[test]
    fn correct_accusation() {
        let mut reasoner = ready_reasoner();
        assert!(reasoner
            .record_accusation("gr", ["pe", "pi", "bi"], true)
            .is_ok());

        for card in ["pe", "pi", "bi"] {
            assert_eq!(reasoner.query("cf", card), Ok(Answer::True));
            assert_eq!(reasoner.query("gr", card), Ok(Answer::False));
        }
        assert_eq!(reasoner.query("cf", "ha"), Ok(Answer::False));
        assert_eq!(reasoner.query("cf", "kn"), Ok(Answer::False));
    }

    #[test]
    fn contradictory_events() {
        let mut reasoner = ready_reasoner();
        assert!(reasoner.record_hand("sc", &["kn"]).is_ok());
        assert!(reasoner
            .record_suggestion("mu", ["pl", "kn", "ha"], None, None)
            .is_ok());

        assert_eq!(
            reasoner.query("sc", "kn"),
            Err(err::ErrorKind::Query(
                err::QueryError::ContradictoryKnowledgeBase
            ))
        );
    }

    #[test]
    fn queries_leave_knowledge_untouched() {
        let mut reasoner = ready_reasoner();
        assert!(reasoner.record_hand("sc", &["wh", "li", "st"]).is_ok());
        let clauses = reasoner.clauses().to_vec();

        for _ in 0..3 {
            assert_eq!(reasoner.query("sc", "ro"), Ok(Answer::Unknown));
        }
        assert_eq!(reasoner.clauses(), clauses.as_slice());
    }
}

mod properties {
    use super::*;

    fn check_grid(reasoner: &Reasoner) {
        let grid = reasoner.query_all().unwrap();
        let registry = reasoner.registry();

        for (card, row) in grid.iter().enumerate() {
            assert!(
                row.iter().any(|answer| *answer != Answer::False),
                "No holder for {}",
                registry.card_name(card).unwrap()
            );
            assert!(
                row.iter().filter(|answer| **answer == Answer::True).count() <= 1,
                "Many holders for {}",
                registry.card_name(card).unwrap()
            );
        }

        let case_file = registry.player_count();
        for category in clue_sat::structures::entity::Category::ALL {
            let answers = registry
                .cards_of(category)
                .map(|card| grid[card][case_file])
                .collect::<Vec<_>>();
            assert!(answers.iter().filter(|answer| **answer == Answer::True).count() <= 1);
            assert!(answers.iter().any(|answer| *answer != Answer::False));
        }
    }

    #[test]
    fn empty_game() {
        let reasoner = ready_reasoner();
        check_grid(&reasoner);

        let grid = reasoner.query_all().unwrap();
        assert!(grid.iter().flatten().all(|answer| *answer == Answer::Unknown));
    }

    #[test]
    fn after_events() {
        let mut reasoner = ready_reasoner();
        assert!(reasoner.record_hand("sc", &["wh", "li", "st"]).is_ok());
        assert!(reasoner
            .record_suggestion("sc", ["sc", "ro", "lo"], Some("mu"), Some("sc"))
            .is_ok());
        assert!(reasoner
            .record_suggestion("mu", ["pe", "pi", "di"], Some("pe"), None)
            .is_ok());
        assert!(reasoner
            .record_suggestion("wh", ["mu", "re", "ba"], Some("pe"), None)
            .is_ok());
        check_grid(&reasoner);
    }

    #[test]
    fn case_file_forced_by_exclusion() {
        let mut reasoner = ready_reasoner();
        assert!(reasoner
            .record_hand("mu", &["mu", "pl", "gr", "pe", "sc"])
            .is_ok());
        check_grid(&reasoner);

        assert_eq!(reasoner.query("cf", "wh"), Ok(Answer::True));
        assert_eq!(reasoner.query("sc", "wh"), Ok(Answer::False));
    }
}

mod errors {
    use super::*;

    #[test]
    fn events_before_initialization() {
        let mut reasoner = Reasoner::from_config(Config::default()).unwrap();

        assert_eq!(
            reasoner.record_hand("sc", &["wh"]),
            Err(err::ErrorKind::State(err::StateError::Uninitialized))
        );
        assert_eq!(
            reasoner.query("sc", "wh"),
            Err(err::ErrorKind::State(err::StateError::Uninitialized))
        );
        assert_eq!(reasoner.clause_count(), 0);
    }

    #[test]
    fn case_file_may_not_suggest() {
        let mut reasoner = ready_reasoner();
        let count = reasoner.clause_count();

        assert_eq!(
            reasoner.record_suggestion("cf", ["sc", "ro", "lo"], None, None),
            Err(err::ErrorKind::Registry(err::RegistryError::NotAPlayer(
                "cf".to_string()
            )))
        );
        assert_eq!(reasoner.clause_count(), count);
    }

    #[test]
    fn no_time_to_query() {
        let mut config = Config::default();
        config.time_limit.value = Some(std::time::Duration::ZERO);

        let mut reasoner = Reasoner::from_config(config).unwrap();
        assert!(reasoner.initialize().is_ok());
        assert!(reasoner.record_hand("sc", &["wh"]).is_ok());

        assert_eq!(
            reasoner.query("sc", "wh"),
            Err(err::ErrorKind::Oracle(err::OracleError::TimeUp))
        );
        assert_eq!(
            reasoner.query_all(),
            Err(err::ErrorKind::Oracle(err::OracleError::TimeUp))
        );
    }

    #[test]
    fn options_written_out_of_bounds() {
        let mut config = Config::default();
        config.polarity_lean.value = 1.5;

        assert_eq!(
            Reasoner::from_config(config).err(),
            Some(err::ErrorKind::Config(err::ConfigError::OutOfBounds(
                "polarity_lean"
            )))
        );

        let mut config = Config::default();
        config.polarity_lean.value = -0.1;
        assert!(Reasoner::from_config(config).is_err());
    }

    #[test]
    fn invalid_registry() {
        let mut config = Config::default();
        config.registry.rooms.clear();

        assert!(matches!(
            Reasoner::from_config(config),
            Err(err::ErrorKind::Registry(err::RegistryError::EmptyCategory(_)))
        ));
    }
}
