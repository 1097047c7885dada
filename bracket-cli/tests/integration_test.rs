//! Integration tests for the BRACKET generator
//!
//! Tests the full stack: entrant parsing, maze ranking, bracket generation,
//! result recording and JSON export

use bracket_core::{
    generate_bracket, parse_entrants, to_value, update_match, update_match_at, write_json_file,
    BracketConfig, BracketError, Branch, Entrant, MatchPath, ValidationError,
};
use bracket_maze::{MazeConfig, MazeRanking};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

// ============================================================================
// TEST FIXTURES
// ============================================================================

const ROSTER: &str = "\
# club ladder
ash 5
birch 2
cedar 7
dogwood 1
elm 4
fir 3
";

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Collect every real entrant name appearing in the opening matches
fn opening_names(value: &Value, out: &mut Vec<String>) {
    if value["left"].is_null() && value["right"].is_null() {
        for key in ["player1", "player2"] {
            let name = value[key].as_str().unwrap_or_default();
            if name != "BYE" {
                out.push(name.to_string());
            }
        }
        return;
    }
    for key in ["left", "right"] {
        if !value[key].is_null() {
            opening_names(&value[key], out);
        }
    }
}

// ============================================================================
// FILE TO BRACKET
// ============================================================================

#[test]
fn test_roster_to_bracket() {
    let entrants = parse_entrants(ROSTER).unwrap();
    assert_eq!(entrants.len(), 6);

    let bracket = generate_bracket(entrants, &BracketConfig::default()).unwrap();
    assert_eq!(bracket.padded_size, 8);
    assert_eq!(bracket.bye_count(), 2);
    assert_eq!(bracket.final_round(), 3);
    assert_eq!(bracket.champion().name, "dogwood");

    // Top two seeds get the byes
    let schedule = bracket.schedule();
    assert_eq!(schedule[0].entrant_a.name, "dogwood");
    assert!(schedule[0].entrant_b.is_bye());
    assert!(schedule
        .iter()
        .any(|m| m.entrant_a.name == "birch" && m.entrant_b.is_bye()));

    let value = to_value(&bracket.tree).unwrap();
    let mut seen = Vec::new();
    opening_names(&value, &mut seen);
    seen.sort();
    assert_eq!(seen, vec!["ash", "birch", "cedar", "dogwood", "elm", "fir"]);
}

#[test]
fn test_shuffled_roster_gives_same_bracket() {
    let entrants = parse_entrants(ROSTER).unwrap();
    let expected = generate_bracket(entrants.clone(), &BracketConfig::default()).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..5 {
        let mut shuffled = entrants.clone();
        shuffled.shuffle(&mut rng);
        let bracket = generate_bracket(shuffled, &BracketConfig::default()).unwrap();
        assert_eq!(to_value(&bracket.tree).unwrap(), to_value(&expected.tree).unwrap());
    }
}

#[test]
fn test_custom_roster() {
    let entrants = parse_entrants(ROSTER).unwrap();
    let bracket = generate_bracket(entrants, &BracketConfig::custom()).unwrap();

    assert_eq!(bracket.contested_rounds(), 5);
    assert_eq!(bracket.champion().name, "dogwood");

    // dogwood meets cedar (last seed) in the first contested round
    let first_contest = bracket
        .tree
        .nodes()
        .map(|(_, n)| n)
        .find(|n| n.is_contested())
        .unwrap();
    assert_eq!(first_contest.entrant_a.name, "dogwood");
    assert_eq!(first_contest.entrant_b.name, "cedar");
}

// ============================================================================
// RESULTS
// ============================================================================

#[test]
fn test_reported_results_flow_to_champion() {
    let field = vec![
        Entrant::new("A", 1),
        Entrant::new("B", 2),
        Entrant::new("C", 3),
        Entrant::new("D", 4),
    ];
    let mut bracket = generate_bracket(field, &BracketConfig::default()).unwrap();

    let left = MatchPath::root().child(Branch::Left);
    update_match_at(&mut bracket.tree, &left, "D").unwrap();
    assert!(update_match(&mut bracket.tree, "C").is_some());
    update_match_at(&mut bracket.tree, &MatchPath::root(), "D").unwrap();

    let value = to_value(&bracket.tree).unwrap();
    assert_eq!(value["player1"], "D");
    assert_eq!(value["player2"], "C");
    assert_eq!(value["winner"], "D");
    assert_eq!(value["left"]["winner"], "D");
    assert_eq!(value["right"]["winner"], "C");
}

#[test]
fn test_unknown_winner_leaves_tree_alone() {
    let entrants = parse_entrants(ROSTER).unwrap();
    let mut bracket = generate_bracket(entrants, &BracketConfig::default()).unwrap();
    let before = bracket.tree.clone();

    assert!(update_match(&mut bracket.tree, "oak").is_none());
    assert!(update_match(&mut bracket.tree, "BYE").is_none());
    assert_eq!(bracket.tree, before);
}

// ============================================================================
// MAZE RANKING
// ============================================================================

#[test]
fn test_maze_ranked_bracket() {
    let runners = names(&["ash", "birch", "cedar", "dogwood", "elm"]);
    let config = MazeConfig::default().with_size(8);

    let entrants = MazeRanking::seeded(config.clone(), 3)
        .unwrap()
        .entrants(&runners)
        .unwrap();
    assert_eq!(entrants.len(), 5);

    let mut ranks: Vec<i32> = entrants.iter().map(|e| e.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);

    let bracket =
        generate_bracket(entrants.clone(), &BracketConfig::default().with_unique_ranks(true))
            .unwrap();
    let champion = entrants.iter().find(|e| e.rank == 1).unwrap();
    assert_eq!(bracket.champion().name, champion.name);

    // Same seed, same standings
    let again = MazeRanking::seeded(config, 3)
        .unwrap()
        .entrants(&runners)
        .unwrap();
    assert_eq!(again, entrants);
}

// ============================================================================
// ERRORS AND OUTPUT
// ============================================================================

#[test]
fn test_invalid_fields_are_rejected() {
    let dup = parse_entrants("x 1\ny 2\nx 3\n").unwrap();
    assert_eq!(
        generate_bracket(dup, &BracketConfig::default()),
        Err(ValidationError::DuplicateName("x".to_string()))
    );

    let tied = parse_entrants("x 1\ny 1\n").unwrap();
    assert!(generate_bracket(tied.clone(), &BracketConfig::default()).is_ok());
    assert!(generate_bracket(tied, &BracketConfig::default().with_unique_ranks(true)).is_err());

    let err: BracketError = parse_entrants("x\n").unwrap_err().into();
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn test_write_json_file() {
    let dir = std::env::temp_dir().join(format!("bracket-it-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bracket.json");

    let entrants = parse_entrants(ROSTER).unwrap();
    let bracket = generate_bracket(entrants, &BracketConfig::default()).unwrap();
    write_json_file(&bracket.tree, &path).unwrap();

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, to_value(&bracket.tree).unwrap());
    assert_eq!(value["round"], 3);

    let missing = dir.join("no-such-dir").join("bracket.json");
    assert!(matches!(
        write_json_file(&bracket.tree, &missing),
        Err(BracketError::Io { .. })
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}
