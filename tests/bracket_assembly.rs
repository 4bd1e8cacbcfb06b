//! End-to-end assembly of scraped draws into bracket trees.

use seedtree::{seeding, Bracket, BinaryTree, Game, Round, Team, Tournament, Traversal};

fn played(seed: u16, name: &str, points: u16, won: bool) -> Team {
    Team::new(seed, name).with_result(points, won)
}

/// 2022 West region, eight-team cut: Arkansas upsets the top seed, Duke
/// takes the region.
fn west_2022() -> Bracket {
    let quarterfinals = Round::new(vec![
        Game::between(
            played(1, "Gonzaga", 98, true),
            played(8, "Georgia State", 71, false),
        ),
        Game::between(
            played(4, "Arkansas", 75, true),
            played(5, "Connecticut", 58, false),
        ),
        Game::between(
            played(2, "Duke", 78, true),
            played(7, "Murray State", 64, false),
        ),
        Game::between(
            played(3, "Texas Tech", 81, true),
            played(6, "Alabama", 50, false),
        ),
    ]);
    let semifinals = Round::new(vec![
        Game::between(
            played(1, "Gonzaga", 68, false),
            played(4, "Arkansas", 74, true),
        ),
        Game::between(
            played(2, "Duke", 78, true),
            played(3, "Texas Tech", 73, false),
        ),
    ]);
    let regional_final = Round::new(vec![Game::between(
        played(4, "Arkansas", 69, false),
        played(2, "Duke", 78, true),
    )]);

    Bracket::new("West", vec![quarterfinals, semifinals, regional_final])
}

/// 2019 East region, all sixteen teams: Michigan State beats Duke in the
/// regional final.
fn east_2019() -> Bracket {
    let first_round = Round::new(vec![
        Game::between(
            played(1, "Duke", 85, true),
            played(16, "North Dakota State", 62, false),
        ),
        Game::between(played(8, "VCU", 58, false), played(9, "UCF", 73, true)),
        Game::between(
            played(4, "Virginia Tech", 66, true),
            played(13, "Saint Louis", 52, false),
        ),
        Game::between(
            played(5, "Mississippi State", 76, false),
            played(12, "Liberty", 80, true),
        ),
        Game::between(
            played(2, "Michigan State", 76, true),
            played(15, "Bradley", 65, false),
        ),
        Game::between(
            played(7, "Louisville", 76, false),
            played(10, "Minnesota", 86, true),
        ),
        Game::between(played(3, "LSU", 79, true), played(14, "Yale", 74, false)),
        Game::between(
            played(6, "Maryland", 79, true),
            played(11, "Belmont", 77, false),
        ),
    ]);
    let second_round = Round::new(vec![
        Game::between(played(1, "Duke", 77, true), played(9, "UCF", 76, false)),
        Game::between(
            played(4, "Virginia Tech", 67, true),
            played(12, "Liberty", 58, false),
        ),
        Game::between(
            played(2, "Michigan State", 70, true),
            played(10, "Minnesota", 50, false),
        ),
        Game::between(played(3, "LSU", 69, true), played(6, "Maryland", 67, false)),
    ]);
    let semifinals = Round::new(vec![
        Game::between(
            played(1, "Duke", 75, true),
            played(4, "Virginia Tech", 73, false),
        ),
        Game::between(
            played(2, "Michigan State", 80, true),
            played(3, "LSU", 63, false),
        ),
    ]);
    let regional_final = Round::new(vec![Game::between(
        played(1, "Duke", 67, false),
        played(2, "Michigan State", 68, true),
    )]);

    Bracket::new(
        "East",
        vec![first_round, second_round, semifinals, regional_final],
    )
}

fn names_at(tree: &BinaryTree<Team>, depth: u32) -> Vec<String> {
    tree.levels(tree.root())[&depth]
        .iter()
        .map(|id| match tree[*id].data() {
            Some(team) => team.name.clone(),
            None => String::from("-"),
        })
        .collect()
}

/// Every occupied internal node must hold the winner of the game its two
/// children form.
fn assert_winners_climb(tree: &BinaryTree<Team>) {
    for id in tree.traverse(tree.root(), Traversal::Pre) {
        let node = &tree[id];
        let (Some(left), Some(right)) = (node.left(), node.right()) else {
            continue;
        };
        let (Some(top), Some(bottom)) = (tree[left].data(), tree[right].data()) else {
            continue;
        };

        let game = Game::between(top.clone(), bottom.clone());
        if let Some(winner) = game.winner() {
            assert_eq!(node.data(), Some(winner));
        }
    }
}

#[test]
fn eight_team_draw_becomes_a_height_three_tree() {
    let bracket = west_2022();
    let tree = bracket.tree().expect("well-formed draw");

    assert_eq!(tree.height(), 3);
    assert_eq!(tree.size(), 8);

    assert_eq!(
        names_at(&tree, 3),
        vec![
            "Gonzaga",
            "Georgia State",
            "Arkansas",
            "Connecticut",
            "Duke",
            "Murray State",
            "Texas Tech",
            "Alabama",
        ]
    );
    assert_eq!(
        names_at(&tree, 2),
        vec!["Gonzaga", "Arkansas", "Duke", "Texas Tech"]
    );
    assert_eq!(names_at(&tree, 1), vec!["Arkansas", "Duke"]);
    assert_eq!(names_at(&tree, 0), vec!["Duke"]);

    assert_winners_climb(&tree);
}

#[test]
fn sixteen_team_draw_becomes_a_height_four_tree() {
    let bracket = east_2019();
    let tree = bracket.tree().expect("well-formed draw");

    assert_eq!(tree.height(), 4);
    assert_eq!(tree.size(), 16);
    assert_eq!(
        bracket.champion().map(|team| team.name.as_str()),
        Some("Michigan State")
    );
    assert_eq!(names_at(&tree, 0), vec!["Michigan State"]);
    assert_eq!(names_at(&tree, 1), vec!["Duke", "Michigan State"]);

    assert_winners_climb(&tree);
}

#[test]
fn first_round_slots_follow_the_seeding_layout() {
    for bracket in [west_2022(), east_2019()] {
        let entrants: Vec<Team> = bracket.entrants().into_iter().cloned().collect();

        // Rebuild the ranked field and lay it out: the page's slot order must
        // be exactly what the seeding sort produces for that field.
        let mut ranked = entrants.clone();
        ranked.sort();
        let order = seeding::sort(ranked).expect("power-of-two field");

        assert_eq!(order, entrants);
    }
}

#[test]
fn tournament_collects_regional_brackets() {
    let tournament = Tournament::new(2022, vec![west_2022()]);

    assert_eq!(tournament.year(), 2022);
    assert_eq!(tournament.regions(), vec!["West"]);

    let west = tournament.bracket("West").expect("region exists");
    assert_eq!(
        west.champion().map(|team| team.name.as_str()),
        Some("Duke")
    );
    assert!(tournament.bracket("South").is_none());
}
