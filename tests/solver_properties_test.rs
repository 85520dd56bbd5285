use anyhow::Result;
use hanoi::core::solver::move_count;
use hanoi::{generate, Move, Rod, Rods, Towers};

fn rods() -> (Rod, Rod, Rod) {
    (Rod::new('A'), Rod::new('C'), Rod::new('B'))
}

fn solve(disks: u32) -> Result<Vec<Move>> {
    let (a, c, b) = rods();
    Ok(generate(disks, a, c, b)?.collect())
}

#[test]
fn test_move_count_is_two_to_the_n_minus_one() -> Result<()> {
    for disks in 0..=14u32 {
        let moves = solve(disks)?;
        assert_eq!(moves.len() as u64, (1u64 << disks) - 1, "disks = {}", disks);
        assert_eq!(move_count(disks), Some(moves.len() as u64));
    }
    Ok(())
}

#[test]
fn test_replay_never_breaks_the_rules_and_ends_solved() -> Result<()> {
    for disks in 0..=12u32 {
        let mut towers = Towers::new(disks, Rods::default());
        for mv in solve(disks)? {
            towers.apply(&mv)?;
        }
        assert!(towers.is_solved(), "disks = {}", disks);

        let expected: Vec<u32> = (1..=disks).rev().collect();
        assert_eq!(towers.rod(Rod::new('C')), Some(expected.as_slice()));
        assert_eq!(towers.rod(Rod::new('A')), Some(&[][..]));
        assert_eq!(towers.rod(Rod::new('B')), Some(&[][..]));
    }
    Ok(())
}

#[test]
fn test_three_disks_structure() -> Result<()> {
    let lines: Vec<String> = solve(3)?.iter().map(ToString::to_string).collect();
    assert_eq!(lines.len(), 7);

    // disks 1-2 go A -> B, disk 3 goes A -> C, then disks 1-2 go B -> C
    assert_eq!(lines[3], "Move disk 3 from A to C");
    assert_eq!(
        &lines[4..],
        [
            "Move disk 1 from B to A",
            "Move disk 2 from B to C",
            "Move disk 1 from A to C",
        ]
    );
    assert!(lines[..3].iter().all(|l| !l.contains("disk 3")));
    Ok(())
}

#[test]
fn test_generation_is_repeatable() -> Result<()> {
    assert_eq!(solve(9)?, solve(9)?);
    Ok(())
}

#[test]
fn test_custom_labels() -> Result<()> {
    let (x, y, z) = (Rod::new('x'), Rod::new('y'), Rod::new('z'));
    let moves: Vec<Move> = generate(2, x, y, z)?.collect();
    let lines: Vec<String> = moves.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        [
            "Move disk 1 from x to z",
            "Move disk 2 from x to y",
            "Move disk 1 from z to y",
        ]
    );

    let mut towers = Towers::new(2, Rods::new(x, y, z)?);
    for mv in &moves {
        towers.apply(mv)?;
    }
    assert!(towers.is_solved());
    Ok(())
}

#[test]
fn test_generation_is_lazy() -> Result<()> {
    // 64 disks would never finish if collected; the first moves come out immediately
    let (a, c, b) = rods();
    let mut moves = generate(64, a, c, b)?;
    assert_eq!(moves.remaining(), u64::MAX);

    let first: Vec<String> = moves.by_ref().take(3).map(|m| m.to_string()).collect();
    assert_eq!(
        first,
        [
            "Move disk 1 from A to B",
            "Move disk 2 from A to C",
            "Move disk 1 from B to C",
        ]
    );
    assert_eq!(moves.remaining(), u64::MAX - 3);
    Ok(())
}

#[test]
fn test_largest_disk_moves_exactly_once() -> Result<()> {
    let moves = solve(8)?;
    let largest: Vec<&Move> = moves.iter().filter(|m| m.disk == 8).collect();
    assert_eq!(largest.len(), 1);
    assert_eq!(largest[0].to_string(), "Move disk 8 from A to C");
    Ok(())
}
