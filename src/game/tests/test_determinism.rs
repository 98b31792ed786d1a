#[cfg(test)]
mod tests {
    use crate::game::batting_order::NUM_BATTERS_PER_SIDE;
    use crate::game::lineup::check_complete;
    use crate::game::team::{GameTeam, SubstitutionTarget};
    use crate::game::tests::common::{config, create_test_team, slot, standard_team};
    use crate::generate::generate_team;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use schema::{PlayerId, Position};

    #[test]
    fn test_same_input_gives_identical_assignments() {
        let first = create_test_team(&standard_team(), false);
        let second = create_test_team(&standard_team(), false);

        let first_json = serde_json::to_string(first.players_in_game()).unwrap();
        let second_json = serde_json::to_string(second.players_in_game()).unwrap();
        assert_eq!(first_json, second_json);

        let sub_indexes = |team: &GameTeam| -> Vec<(u32, Option<u32>)> {
            team.roster().iter().map(|p| (p.id.0, p.sub_index)).collect()
        };
        assert_eq!(sub_indexes(&first), sub_indexes(&second));
    }

    proptest! {
        #[test]
        fn prop_generated_teams_build_complete_lineups(seed in any::<u64>(), dh in any::<bool>()) {
            let template = generate_team("GEN", 100, seed);
            prop_assert_eq!(&template, &generate_team("GEN", 100, seed));

            let team = GameTeam::new(&template, &config(dh)).unwrap();
            prop_assert!(check_complete(team.players_in_game()).is_ok());

            let batters = team
                .players_in_game()
                .values()
                .filter(|p| p.batting_order.is_some())
                .count();
            prop_assert_eq!(batters, NUM_BATTERS_PER_SIDE);
            prop_assert_eq!(
                team.current_pitcher().unwrap().assignment.batting_order.is_none(),
                dh
            );
        }

        #[test]
        fn prop_sub_index_counts_up_with_each_entry(picks in proptest::collection::vec(0usize..9, 0..3)) {
            // Pinch hit from the three-man bench in any slot order
            let mut team = create_test_team(&standard_team(), false);
            let starters = team.players_in_game().len() as u32;

            for (n, index) in picks.iter().enumerate() {
                let incoming = PlayerId(20 + n as u32);
                team.substitute(SubstitutionTarget::BattingSlot(slot(*index)), incoming)
                    .unwrap();
                prop_assert_eq!(team.player(incoming).unwrap().sub_index, Some(starters + n as u32));
            }

            let arrivals: Vec<Option<u32>> = team
                .players_in_arrival_order()
                .iter()
                .map(|p| p.sub_index)
                .collect();
            let expected: Vec<Option<u32>> =
                (0..starters + picks.len() as u32).map(Some).collect();
            prop_assert_eq!(arrivals, expected);
            prop_assert!(team.at_position(Position::Pitcher).is_some());
        }
    }
}
